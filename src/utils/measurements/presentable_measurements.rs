//! Resting place for [PresentableMeasurement]

use std::borrow::Cow;
use std::fmt::Display;
use std::time::Duration;
use once_cell::sync::Lazy;

/// := (threshold, scale, unit, format)
type AutoScaleEntry = (f64, f64, Cow<'static, str>, &'static str);

/// Holds and present custom unit measurements with auto-scaling
pub struct PresentableMeasurement {
    pub(crate) value: f64,
    auto_scale: &'static [AutoScaleEntry],
}
impl Default for PresentableMeasurement {
    fn default() -> Self {
        Self {
            value: 0.0,
            auto_scale: &[],
        }
    }
}

impl Display for PresentableMeasurement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static MISSING_UNIT: Cow<'static, str> = Cow::Borrowed("<missing_unit_suffix_please_fix>");
        let (scaled_value, suffix, format) = self.auto_scale.iter()
            .find(|&&(threshold, _, _, _)| self.value >= threshold)
            .map_or(
                (self.value, &MISSING_UNIT, ":.2"),
                |&(_threshold, rate, ref suffix, format)| (self.value / rate, suffix, format));
        match format {
            ":.0"  => write!(f, "{:.0}{}",  scaled_value, suffix),
            ":.1"  => write!(f, "{:.1}{}",  scaled_value, suffix),
            ":.2"  => write!(f, "{:.2}{}",  scaled_value, suffix),
            ":.3"  => write!(f, "{:.3}{}",  scaled_value, suffix),
            ":.3e" => write!(f, "{:.3e}{}", scaled_value, suffix),
            _ => Err(std::fmt::Error),
        }
    }
}

/// Builds a [PresentableMeasurement] able to display & auto-scale
/// quantities representing "a duration".
pub fn duration_measurement(duration: Duration) -> PresentableMeasurement {
    static AUTO_SCALE_DATA: Lazy<Vec<AutoScaleEntry>> = Lazy::new(|| {
        [
            (1.0,  1.0,  "s",  ":.3"),
            (1e-3, 1e-3, "ms", ":.3"),
            (1e-6, 1e-6, "µs", ":.3"),
            (0.0,  1e-9, "ns", ":.0"),
        ]
        .into_iter()
        .map(|(threshold, rate, suffix, format)| (threshold, rate, Cow::Borrowed(suffix), format))
        .collect()
    });

    PresentableMeasurement {
        value: duration.as_secs_f64(),
        auto_scale: AUTO_SCALE_DATA.as_slice(),
    }
}

/// Builds a [PresentableMeasurement] able to display & auto-scale
/// quantities representing "a number of bytes".
pub fn bytes_measurement(value: f64) -> PresentableMeasurement {
    static AUTO_SCALE_DATA: Lazy<Vec<AutoScaleEntry>> = Lazy::new(|| {
        [
            ((1u64<<40) as f64, "TiB", ":.2"),
            ((1u64<<30) as f64, "GiB", ":.2"),
            ((1u64<<20) as f64, "MiB", ":.2"),
            ((1u64<<10) as f64, "KiB", ":.2"),
            (1.0,               "b",   ":.0"),
            (0.0,               "b",   ":.0"),
        ]
        .into_iter()
        .map(|(threshold, suffix, format)| (
            threshold,
            if threshold != 0.0 { threshold } else { 1.0 },
            Cow::Borrowed(suffix),
            format
        ))
        .collect()
    });

    PresentableMeasurement {
        value,
        auto_scale: AUTO_SCALE_DATA.as_slice(),
    }
}
