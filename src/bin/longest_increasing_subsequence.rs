//! Compares brute force, memoized & tabulated solutions for the length of the Longest Increasing Subsequence.

use dp_showdown::{
    compare_variants,
    problems::lis::*,
    ShowdownResult, Variant, DEFAULT_ITERATIONS, OUTPUT,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const SEQUENCE: [i64; 8] = [5, 2, 8, 6, 3, 6, 9, 7];

fn main() -> ShowdownResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    OUTPUT("-----------------------------------\n");
    OUTPUT("Calculating LIS in the array\n");
    let variants: Vec<Variant<ShowdownResult<usize>>> = vec![
        ("LIS (Brute Force)", Box::new(|| lis_brute_force(&SEQUENCE))),
        ("LIS (Memoization)", Box::new(|| Ok(lis_memoized(&SEQUENCE)))),
        ("LIS (Tabulation)",  Box::new(|| Ok(lis_tabulated(&SEQUENCE)))),
    ];
    for variant in compare_variants("LIS", DEFAULT_ITERATIONS, variants)? {
        let length = variant.timing.last_result?;
        info!(variant = variant.name, length, "computed");
    }
    OUTPUT("-----------------------------------\n");
    Ok(())
}
