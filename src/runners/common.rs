//! The timing harness: runs an algorithm, measuring how long it takes & how much heap it uses.\
//! Shared by the [super::standard] runners and by every demo.

use crate::{
    error::{ShowdownError, ShowdownResult},
    features,
    low_level_analysis::types::*,
};
use std::{
    hint::black_box,
    time::{Duration, Instant},
};
use crate::utils::measurements::presentable_measurements::duration_measurement;
use tracing::trace;


/// Runs `algorithm` once, measuring (and returning) the time it took together with its result.\
/// The result goes through [black_box()], so the compiler can't optimize the call away.
pub fn measure_time<R>(algorithm: impl FnOnce() -> R) -> (Duration, R) {
    let start = Instant::now();
    let result = black_box(algorithm());
    let elapsed = start.elapsed();
    (elapsed, result)
}

/// Outcome of [average_time()]
#[derive(Debug, Clone)]
pub struct AverageTiming<R> {
    /// how many times the algorithm ran
    pub iterations: u32,
    /// sum of the time taken by each run
    pub total_time: Duration,
    /// `total_time / iterations`, truncated to whole nanoseconds
    pub average_time: Duration,
    /// what the last run computed
    pub last_result: R,
    /// heap usage for all the runs
    pub space_measurements: BigOSpacePassMeasurements,
}
impl<R> AverageTiming<R> {
    /// the average time, in nanoseconds
    pub fn average_nanos(&self) -> u128 {
        self.average_time.as_nanos()
    }
}

/// Runs `algorithm` `iterations` times through [measure_time()], returning the average time a run took
/// and the last computed result. Fails with [ShowdownError::ZeroIterations] if there is nothing to average.
pub fn average_time<R>(iterations: u32, mut algorithm: impl FnMut() -> R) -> ShowdownResult<AverageTiming<R>> {
    if iterations == 0 {
        return Err(ShowdownError::ZeroIterations);
    }
    let allocator_savepoint = features::ALLOC.save_point();
    let (mut total_time, mut last_result) = measure_time(&mut algorithm);
    for _ in 1..iterations {
        let (elapsed, result) = measure_time(&mut algorithm);
        total_time += elapsed;
        last_result = result;
    }
    let allocator_statistics = features::ALLOC.delta_statistics(&allocator_savepoint);
    let average_nanos = total_time.as_nanos() / iterations as u128;
    let average_time = Duration::from_nanos(u64::try_from(average_nanos).unwrap_or(u64::MAX));
    trace!(iterations, ?total_time, ?average_time, "timed");

    Ok(AverageTiming {
        iterations,
        total_time,
        average_time,
        last_result,
        space_measurements: BigOSpacePassMeasurements {
            used_memory_before: allocator_savepoint.metrics.current_used_memory,
            used_memory_after:  allocator_statistics.current_used_memory,
            min_used_memory:    allocator_statistics.min_used_memory,
            max_used_memory:    allocator_statistics.max_used_memory,
        },
    })
}

/// contains the measurements for a pass done in [run_pass()]
#[derive(Debug, Clone, Copy, Default)]
pub struct PassResult {
    /// average time of a single run
    pub time_measurements:  Duration,
    pub space_measurements: BigOSpacePassMeasurements,
}

/// Runs a pass on the given `algorithm`: [average_time()] over `iterations` runs
pub fn run_pass<R>(iterations: u32, algorithm: impl FnMut() -> R) -> ShowdownResult<(PassResult, R)> {
    let timing = average_time(iterations, algorithm)?;
    Ok((PassResult {
        time_measurements:  timing.average_time,
        space_measurements: timing.space_measurements,
    }, timing.last_result))
}

/// wrap around [run_pass()] to output progress & intermediate results
pub fn run_pass_verbosely<R>(result_prefix: &str,
                             result_suffix: &str,
                             iterations:    u32,
                             algorithm:     impl FnMut() -> R,
                             mut output:    impl FnMut(&str))
                            -> ShowdownResult<(PassResult, R)> {
    let (pass_result, r) = run_pass(iterations, algorithm)?;
    output(&format!("{}{}/{}{}", result_prefix, duration_measurement(pass_result.time_measurements), pass_result.space_measurements, result_suffix));
    Ok((pass_result, r))
}
