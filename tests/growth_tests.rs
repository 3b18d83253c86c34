//! Checks the growth of the problem variants as their inputs grow, in Big-O notation

use dp_showdown::{
    features::LOOP_MULTIPLIER,
    measure_growth,
    problems::{fibonacci::*, grid_paths::*, lis::*, two_sum::*},
    test_growth,
    BigOAlgorithmComplexity,
};
use ctor::ctor;


/// Sets up the ENV, affecting the Rust's test runner
#[ctor]
fn setup_env() {
    // cause tests to run serially, for time measurements to be more reliable
    std::env::set_var("RUST_TEST_THREADS", "1");
}


#[test]
fn recursive_fibonacci_is_exponential() {
    let analysis = measure_growth("Recursive Fibonacci", 10,
                                  16, || fibonacci_recursive(16),
                                  24, || fibonacci_recursive(24))
        .expect("valid passes");
    assert!(analysis.time_complexity > BigOAlgorithmComplexity::ON,
            "naive recursion should grow way worse than O(n), but was measured as {:?}", analysis.time_complexity);
}

#[test]
fn tabulated_fibonacci() {
    test_growth("Tabulated Fibonacci", 5, 1000 * LOOP_MULTIPLIER,
                46, || fibonacci_tabulated(46).expect("within u64"),
                92, || fibonacci_tabulated(92).expect("within u64"),
                BigOAlgorithmComplexity::ON2, BigOAlgorithmComplexity::ON2);
}

#[test]
fn tabulated_grid_paths() {
    test_growth("Tabulated grid paths", 5, 100 * LOOP_MULTIPLIER,
                16, || count_paths_tabulated(16, 16).expect("fits in u64"),
                32, || count_paths_tabulated(32, 32).expect("fits in u64"),
                BigOAlgorithmComplexity::ON2, BigOAlgorithmComplexity::ON2);
}

#[test]
fn tabulated_lis() {
    let sequence: Vec<i64> = (0..1000).map(|i| (i * 7919) % 1009).collect();
    test_growth("Tabulated LIS", 5, 10 * LOOP_MULTIPLIER,
                500,  || lis_tabulated(&sequence[..500])  as u64,
                1000, || lis_tabulated(&sequence[..1000]) as u64,
                BigOAlgorithmComplexity::ON2, BigOAlgorithmComplexity::ON);
}

#[test]
fn tabulated_two_sum_without_a_pair() {
    // only even numbers: an odd target is never found, so the whole sequence is visited
    let sequence: Vec<i64> = (0..8000).map(|i| i * 2).collect();
    test_growth("Tabulated two sum", 5, 10 * LOOP_MULTIPLIER,
                2000, || two_sum_tabulated(&sequence[..2000], 1).map_or(0, |(first, _)| first as u64),
                8000, || two_sum_tabulated(&sequence[..8000], 1).map_or(0, |(first, _)| first as u64),
                BigOAlgorithmComplexity::ON2, BigOAlgorithmComplexity::ON2);
}
