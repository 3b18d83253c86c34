//! Contains functions to perform Algorithm's Space Complexity Analysis.
//!
//! The complexity analysis is done on the peak heap memory used by a pass -- which includes any *auxiliary memory*,
//! where *auxiliary memory* means allocations that were done, but then freed before the algorithm finishes,
//! like the tables built by memoized & tabulated variants.\
//! Stack usage (recursion depth, fixed arrays) is not seen by the allocator.

use crate::low_level_analysis::{
    analyse_complexity,
    types::*,
};


/// Performs space complexity analysis for algorithms run on two input sizes, such as `fib(n)`, `lis(n)`, `paths(n, n)`, ...
pub fn analyse_space_complexity(passes_info:  &AlgorithmPassesInfo,
                                measurements: &BigOSpaceMeasurements) -> BigOAlgorithmComplexity {

    // max mem usage
    let s1 = measurements.pass_1_measurements.peak_used_memory() as f64;
    let s2 = measurements.pass_2_measurements.peak_used_memory() as f64;

    // input sizes
    let n1 = passes_info.pass1_n as f64;
    let n2 = passes_info.pass2_n as f64;

    analyse_complexity(s1, s2, n1, n2)
}
