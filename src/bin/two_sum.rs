//! Compares brute force, recursive, memoized & tabulated solutions for finding two values adding up to a target.

use dp_showdown::{
    compare_variants,
    problems::two_sum::*,
    ShowdownResult, Variant, DEFAULT_ITERATIONS, OUTPUT,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const TARGET_SUM: i64 = 18;

fn main() -> ShowdownResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let sequence: Vec<i64> = (1..=36).chain([8, 10]).collect();

    OUTPUT("-----------------------------------\n");
    OUTPUT(&format!("Calculating Two Sum ({})\n", TARGET_SUM));
    let variants: Vec<Variant<Option<Pair>>> = vec![
        ("Brute Force", Box::new(|| two_sum_brute_force(&sequence, TARGET_SUM))),
        ("Recursive",   Box::new(|| two_sum_recursive(&sequence, TARGET_SUM))),
        ("Memoized",    Box::new(|| two_sum_memoized(&sequence, TARGET_SUM))),
        ("Tabulation",  Box::new(|| two_sum_tabulated(&sequence, TARGET_SUM))),
    ];
    for variant in compare_variants("two sum", DEFAULT_ITERATIONS, variants)? {
        info!(variant = variant.name, pair = ?variant.timing.last_result, "computed");
    }
    OUTPUT("-----------------------------------\n");
    Ok(())
}
