//! Knows how to run & measure the problem variants: side-by-side comparisons for the demos
//! and 2-pass growth checks, having their complexities analysed.\
//! See `tests/growth_tests.rs` for examples.

use std::time::Duration;
use keen_retry::{loggable_retry_errors, ResolvedResult, RetryProducerResult, RetryResult};
use tracing::{debug, warn};
use crate::{
    error::{ShowdownError, ShowdownResult},
    features::OUTPUT,
    low_level_analysis::{
        self,
        types::{
            BigOAlgorithmAnalysis,
            BigOAlgorithmComplexity,
            AlgorithmPassesInfo,
            AlgorithmMeasurements,
            BigOTimeMeasurements,
            BigOSpaceMeasurements,
        },
    },
    runners::common::*,
};


/// A named algorithm, as accepted by [compare_variants()]
pub type Variant<'a, R> = (&'a str, Box<dyn FnMut() -> R + 'a>);

/// The timing of one of the variants given to [compare_variants()]
#[derive(Debug)]
pub struct VariantTiming<'a, R> {
    pub name:   &'a str,
    pub timing: AverageTiming<R>,
}

/// Times each one of the `variants` through [average_time()], in order, reporting
/// `Average time for <name>: <ns> ns` for each of them.
pub fn compare_variants<'a, R>(problem_name: &str,
                               iterations:   u32,
                               variants:     Vec<Variant<'a, R>>)
                              -> ShowdownResult<Vec<VariantTiming<'a, R>>> {
    let mut timings = Vec::with_capacity(variants.len());
    for (name, algorithm) in variants {
        let timing = average_time(iterations, algorithm)?;
        debug!(problem = problem_name, variant = name, iterations, average_nanos = timing.average_nanos() as u64, "variant measured");
        OUTPUT(&format!("Average time for {}: {} ns\n", name, timing.average_nanos()));
        timings.push(VariantTiming { name, timing });
    }
    Ok(timings)
}

/// Runs `pass1_algorithm` & `pass2_algorithm`, `iterations` times each, analysing how their averages grow
/// from input size `pass1_n` to `pass2_n`.\
/// Progress & the final analysis are reported through [OUTPUT].
pub fn measure_growth<'a, R>(measurement_name: &'a str,
                             iterations:       u32,
                             pass1_n:          u32,
                             pass1_algorithm:  impl FnMut() -> R,
                             pass2_n:          u32,
                             pass2_algorithm:  impl FnMut() -> R)
                            -> ShowdownResult<BigOAlgorithmAnalysis<'a>> {

    if pass1_n < 2 || pass1_n >= pass2_n {
        return Err(ShowdownError::InvalidGrowthPasses { pass1_n, pass2_n });
    }

    OUTPUT(&format!("Running '{}' algorithm:\n", measurement_name));
    let (pass1_result, _) = run_pass_verbosely("  Pass 1: ", "", iterations, pass1_algorithm, OUTPUT)?;
    let (pass2_result, _) = run_pass_verbosely("; Pass 2: ", "", iterations, pass2_algorithm, OUTPUT)?;
    let measurements = AlgorithmMeasurements {
        measurement_name,
        passes_info: AlgorithmPassesInfo {
            pass1_n,
            pass2_n,
            iterations,
        },
        time_measurements: BigOTimeMeasurements {
            pass_1_measurements: pass1_result.time_measurements,
            pass_2_measurements: pass2_result.time_measurements,
        },
        space_measurements: BigOSpaceMeasurements {
            pass_1_measurements: pass1_result.space_measurements,
            pass_2_measurements: pass2_result.space_measurements,
        },
    };
    let time_complexity  = low_level_analysis::time_analysis::analyse_time_complexity(&measurements.passes_info, &measurements.time_measurements);
    let space_complexity = low_level_analysis::space_analysis::analyse_space_complexity(&measurements.passes_info, &measurements.space_measurements);
    let algorithm_analysis = BigOAlgorithmAnalysis {
        time_complexity,
        space_complexity,
        algorithm_measurements: measurements,
    };

    OUTPUT("\n\n");
    OUTPUT(&format!("{}\n", algorithm_analysis));
    Ok(algorithm_analysis)
}

/// Runs [measure_growth()], asserting the observed time & space complexities don't exceed the given maximums
/// -- retrying as much as `max_retry_attempts` to avoid flaky test results.\
/// In case of rejection, a detailed run log with measurements & analysis results is issued before panicking.
pub fn test_growth(test_name:           &str,
                   max_retry_attempts:  u32,
                   iterations:          u32,
                   pass1_n:             u32,
                   mut pass1_algorithm: impl FnMut() -> u64,
                   pass2_n:             u32,
                   mut pass2_algorithm: impl FnMut() -> u64,
                   max_time_complexity:  BigOAlgorithmComplexity,
                   max_space_complexity: BigOAlgorithmComplexity) {
    let result = check_growth(test_name, iterations, pass1_n, &mut pass1_algorithm, pass2_n, &mut pass2_algorithm, max_time_complexity, max_space_complexity)
        .retry_with(|_| check_growth(test_name, iterations, pass1_n, &mut pass1_algorithm, pass2_n, &mut pass2_algorithm, max_time_complexity, max_space_complexity))
        .with_delays((0..max_retry_attempts).map(|_| Duration::from_secs(1)));
    let failure_msg = match result {
        ResolvedResult::Ok { .. } => None,
        ResolvedResult::Fatal { error, .. } => Some(error),
        ResolvedResult::Recovered { .. } => None,
        ResolvedResult::GivenUp { retry_errors, fatal_error, .. } => Some(format!("Given up with '{}' after {max_retry_attempts} attempts. Previous transient errors: {}", fatal_error, loggable_retry_errors(&retry_errors))),
        ResolvedResult::Unrecoverable { retry_errors, fatal_error, .. } => Some(format!("Stopped after retrying for {max_retry_attempts} attempts due to the fatal outcome '{}'. Previous transient errors: {}", fatal_error, loggable_retry_errors(&retry_errors))),
    };
    if let Some(failure_msg) = failure_msg {
        panic!("{}", failure_msg);
    }
}

/// Internal version of [test_growth()], allowing retries: space mismatches are fatal, time mismatches may be retried
fn check_growth(test_name:            &str,
                iterations:           u32,
                pass1_n:              u32,
                pass1_algorithm:      &mut impl FnMut() -> u64,
                pass2_n:              u32,
                pass2_algorithm:      &mut impl FnMut() -> u64,
                max_time_complexity:  BigOAlgorithmComplexity,
                max_space_complexity: BigOAlgorithmComplexity)
               -> RetryProducerResult<String, String> {

    let algorithm_analysis = match measure_growth(test_name, iterations, pass1_n, pass1_algorithm, pass2_n, pass2_algorithm) {
        Ok(algorithm_analysis) => algorithm_analysis,
        Err(err) => return RetryResult::Fatal { input: (), error: format!("'{}' could not be measured: {}", test_name, err) },
    };
    let observed_time_complexity  = algorithm_analysis.time_complexity;
    let observed_space_complexity = algorithm_analysis.space_complexity;

    if observed_space_complexity > max_space_complexity {
        let msg = format!("\n ** Aborted due to SPACE complexity mismatch on '{}': maximum: {:?}, measured: {:?}\n\n", test_name, max_space_complexity, observed_space_complexity);
        OUTPUT(&msg);
        RetryResult::Fatal { input: (), error: msg }
    } else if observed_time_complexity > max_time_complexity {
        let msg = format!("\n ** TIME complexity mismatch on '{}': maximum: {:?}, measured: {:?} -- a reattempt may be performed...\n\n", test_name, max_time_complexity, observed_time_complexity);
        OUTPUT(&msg);
        warn!(test_name, max = ?max_time_complexity, measured = ?observed_time_complexity, "time complexity mismatch");
        RetryResult::Transient { input: (), error: msg }
    } else {
        let msg = format!("'{}' is within {:?} time & {:?} space\n\n", test_name, max_time_complexity, max_space_complexity);
        OUTPUT(&msg);
        RetryResult::Ok { reported_input: (), output: msg }
    }
}
