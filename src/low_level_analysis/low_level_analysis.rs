//! See [super].

use crate::features::PERCENT_TOLERANCE;
use super::types::BigOAlgorithmComplexity;


/// Performs the Algorithm Complexity Analysis on the resource denoted by `u`, where `u1` & `u2` are the resource
/// utilization on passes 1 & 2 and, likewise, `n1` & `n2` represent the input sizes of each pass
/// -- in other words, represents the `n` in the Big-O notation... `O(n)`, `O(log(n))`, `O(n²)`, etc...\
/// `n1` must be at least 2 (so `log(n1)` isn't zero) and smaller than `n2`.
///
/// The observed ratio `u2/u1` is compared against the ratio each complexity class predicts for `n2/n1`,
/// accepting [PERCENT_TOLERANCE] of measurement error. A pass using nothing can't be compared by ratio:
/// if both passes used nothing, `O(1)` is returned; if only the first did, [BigOAlgorithmComplexity::WorseThanON4].
pub fn analyse_complexity(u1: f64, u2: f64, n1: f64, n2: f64) -> BigOAlgorithmComplexity {
    if u1 <= 0.0 {
        return if u2 <= 0.0 {
            BigOAlgorithmComplexity::O1
        } else {
            BigOAlgorithmComplexity::WorseThanON4
        };
    }

    let observed_ratio = u2 / u1;
    // := (expected ratio, the "between" class just below, the class itself)
    let models = [
        (1.0,                                  BigOAlgorithmComplexity::BetterThanO1,        BigOAlgorithmComplexity::O1),
        (n2.log2() / n1.log2(),                BigOAlgorithmComplexity::BetweenO1AndOLogN,   BigOAlgorithmComplexity::OLogN),
        (n2 / n1,                              BigOAlgorithmComplexity::BetweenOLogNAndON,   BigOAlgorithmComplexity::ON),
        ((n2 * n2.log2()) / (n1 * n1.log2()),  BigOAlgorithmComplexity::BetweenONAndONLogN,  BigOAlgorithmComplexity::ONLogN),
        ((n2 / n1).powi(2),                    BigOAlgorithmComplexity::BetweenONLogNAndON2, BigOAlgorithmComplexity::ON2),
        ((n2 / n1).powi(3),                    BigOAlgorithmComplexity::BetweenON2AndON3,    BigOAlgorithmComplexity::ON3),
        ((n2 / n1).powi(4),                    BigOAlgorithmComplexity::BetweenON3AndON4,    BigOAlgorithmComplexity::ON4),
    ];
    for (expected_ratio, below, complexity) in models {
        let proportion = observed_ratio / expected_ratio;
        if proportion < 1.0 - PERCENT_TOLERANCE {
            return below;
        } else if (proportion - 1.0).abs() <= PERCENT_TOLERANCE {
            return complexity;
        }
    }
    BigOAlgorithmComplexity::WorseThanON4
}


#[cfg(test)]
mod tests {

    //! Unit tests for [low_level_analysis](super) module

    use super::*;

    /// complexity analysis must progress through every class, one at a time, as the resource utilization increases
    #[test]
    fn smooth_transitions() {
        let mut last_complexity = BigOAlgorithmComplexity::BetterThanO1;
        for u2 in 0..40_000 {
            let current_complexity = analyse_complexity(10.0, u2 as f64, 2.0, 14.0);
            let delta = current_complexity as i32 - last_complexity as i32;
            assert!(delta == 0 || delta == 1, "'analyse_complexity(..., {}, ..., ...)' suddenly went from {:?} to {:?} when `u2` went from {} to {}", u2, last_complexity, current_complexity, u2-1, u2);
            last_complexity = current_complexity;
        }
        assert_eq!(last_complexity, BigOAlgorithmComplexity::WorseThanON4, "Please update this test to cycle through all variants of `BigOAlgorithmComplexity`");
    }

    /// expectations computed for the default 10% tolerance
    #[cfg(any(feature = "tolerance_10_percent", not(feature = "tolerance_25_percent")))]
    #[test]
    fn theoretical_measurements() {
        let cases = [
            ("better than O(1)", 100.0,  80.0, BigOAlgorithmComplexity::BetterThanO1),
            ("O(1)",             100.0, 100.0, BigOAlgorithmComplexity::O1),
            ("O(log(n))",        100.0, 110.0, BigOAlgorithmComplexity::OLogN),
            ("O(n)",             100.0, 200.0, BigOAlgorithmComplexity::ON),
            ("O(n.log(n))",      100.0, 220.0, BigOAlgorithmComplexity::ONLogN),
            ("O(n²)",            100.0, 400.0, BigOAlgorithmComplexity::ON2),
            ("O(n³)",            100.0, 800.0, BigOAlgorithmComplexity::ON3),
            ("exponential",      100.0, 1e6,   BigOAlgorithmComplexity::WorseThanON4),
        ];
        for (description, u1, u2, expected_complexity) in cases {
            let observed_complexity = analyse_complexity(u1, u2, 1000.0, 2000.0);
            assert_eq!(observed_complexity, expected_complexity, "Theoretical {description} algorithm check failed!");
        }
    }

    #[test]
    fn passes_using_nothing() {
        assert_eq!(analyse_complexity(0.0,  0.0, 10.0, 20.0), BigOAlgorithmComplexity::O1);
        assert_eq!(analyse_complexity(0.0, 64.0, 10.0, 20.0), BigOAlgorithmComplexity::WorseThanON4);
    }
}
