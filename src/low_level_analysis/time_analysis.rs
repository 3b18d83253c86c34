//! Contains functions to perform Algorithm's Time Complexity Analysis.

use crate::low_level_analysis::{
    analyse_complexity,
    types::*,
};


/// Performs time complexity analysis for algorithms run on two input sizes, such as `fib(n)`, `lis(n)`, `paths(n, n)`, ...\
/// The average time of a single execution, on each pass, is what gets compared.
///
/// The number of iterations & the input sizes must be carefully chosen in order to generate elapsed times (on each pass)
/// high enough to make OS latencies & timer granularity negligible -- the machine should be idle.
pub fn analyse_time_complexity(passes_info:  &AlgorithmPassesInfo,
                               measurements: &BigOTimeMeasurements) -> BigOAlgorithmComplexity {

    // time variation
    let t1 = measurements.pass_1_measurements.as_nanos() as f64;
    let t2 = measurements.pass_2_measurements.as_nanos() as f64;

    // input sizes
    let n1 = passes_info.pass1_n as f64;
    let n2 = passes_info.pass2_n as f64;

    analyse_complexity(t1, t2, n1, n2)
}

#[cfg(test)]
mod tests {

    //! Unit tests for [time_analysis](super) module

    use super::*;
    use std::time::Duration;

    /// tests the time complexity analysis results based on some known-to-be-correct measurement times
    #[cfg(any(feature = "tolerance_10_percent", not(feature = "tolerance_25_percent")))]
    #[test]
    fn analyse_algorithm_theoretical_test() {
        let assert = |measurement_name, expected_complexity, passes_info: AlgorithmPassesInfo, time_measurements: BigOTimeMeasurements| {
            let observed_time_complexity = analyse_time_complexity(&passes_info, &time_measurements);
            assert_eq!(observed_time_complexity, expected_complexity, "Time analysis for '{}' check failed!", measurement_name);
        };
        let passes_info = AlgorithmPassesInfo { pass1_n: 1000, pass2_n: 2000, iterations: 1 };
        let micros = |pass_1, pass_2| BigOTimeMeasurements {
            pass_1_measurements: Duration::from_micros(pass_1),
            pass_2_measurements: Duration::from_micros(pass_2),
        };

        assert("Theoretical better than O(1) algorithm",            BigOAlgorithmComplexity::BetterThanO1,      passes_info, micros(100,  89));
        assert("Theoretical O(1) algorithm",                        BigOAlgorithmComplexity::O1,                passes_info, micros(100, 100));
        assert("Theoretical O(log(n)) algorithm",                   BigOAlgorithmComplexity::OLogN,             passes_info, micros(100, 111));
        assert("Theoretical between O(log(n)) and O(n) algorithm",  BigOAlgorithmComplexity::BetweenOLogNAndON, passes_info, micros(100, 150));
        assert("Theoretical O(n) algorithm",                        BigOAlgorithmComplexity::ON,                passes_info, micros(100, 200));
        assert("Theoretical O(n²) algorithm",                       BigOAlgorithmComplexity::ON2,               passes_info, micros(100, 400));
        assert("Theoretical exponential algorithm",                 BigOAlgorithmComplexity::WorseThanON4,      passes_info, micros(100, 100_000));
    }
}
