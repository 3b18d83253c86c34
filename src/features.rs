//! Contains code for handling the Cargo features used to compile this crate.
#![allow(dead_code)]

use std::io::{stdout,stderr,Write};
use crate::metrics_allocator::MetricsAllocator;

#[cfg(any(feature = "tolerance_10_percent", not(any(feature = "tolerance_25_percent"))))]
/// acceptable proportional variance (acceptable measurement errors) when classifying an algorithm's growth
pub const PERCENT_TOLERANCE: f64 = 0.10;

#[cfg(all(feature = "tolerance_25_percent", not(feature = "tolerance_10_percent")))]
/// acceptable proportional variance (acceptable measurement errors) when classifying an algorithm's growth
pub const PERCENT_TOLERANCE: f64 = 0.25;

#[cfg(feature = "report_stdout")]
/// Function to output an `&str` -- used to sink timing reports -- controlled by the crate's features (stdout, stderr, no_report)
pub const OUTPUT: fn(&str) = stdout_write;

#[cfg(all(feature = "report_stderr", not(feature = "report_stdout")))]
/// Function to output an `&str` -- used to sink timing reports -- controlled by the crate's features (stdout, stderr, no_report)
pub const OUTPUT: fn(&str) = stderr_write;

#[cfg(not(any(feature = "report_stdout", feature = "report_stderr")))]
/// Function to output an `&str` -- used to sink timing reports -- controlled by the crate's features (stdout, stderr, no_report)
pub const OUTPUT: fn(&str) = null_write;

/// How many times each variant is executed by the demos when computing its average time
pub const DEFAULT_ITERATIONS: u32 = 1000;

#[cfg(debug_assertions)]
/// loop multiplier for debug compilation
pub const LOOP_MULTIPLIER: u32 = 1;
#[cfg(not(debug_assertions))]
/// loop multiplier for release compilation
pub const LOOP_MULTIPLIER: u32 = 100;

/// Allows access to the metrics allocator -- replacing the Global Allocator unless the
/// `no_allocator_metrics` feature is active, in which case all heap measurements read zero.
#[cfg_attr(not(feature = "no_allocator_metrics"), global_allocator)]
pub static ALLOC: MetricsAllocator = MetricsAllocator::new();


fn stdout_write(buf: &str) {
    sync_outputs();
    print!("{}", buf);
    sync_outputs();
}

fn stderr_write(buf: &str) {
    sync_outputs();
    eprint!("{}", buf);
    sync_outputs();
}

/// Flushes both stdout and stderr so the next output will be in sync with everything that came before
fn sync_outputs() {
    _ = stdout().flush();
    _ = stderr().flush();
}

fn null_write(_buf: &str) {
    // release compilations will optimize out this call for '_buf' is not used
}
