//! Finds, & reports, a pair adding up to the target -- by brute force and through memoization.

use dp_showdown::{
    problems::two_sum::{two_sum_brute_force, two_sum_memoized, Pair},
    ShowdownResult, OUTPUT,
};
use tracing_subscriber::EnvFilter;

const SEQUENCE: [i64; 6] = [8, 10, 2, 9, 7, 5];
const TARGET_SUM: i64 = 11;

fn report(method: &str, pair: Option<Pair>) {
    match pair {
        Some((first, second)) => OUTPUT(&format!("{}: Pair found: ({}, {})\n", method, first, second)),
        None                  => OUTPUT(&format!("{}: No pair found.\n", method)),
    }
}

fn main() -> ShowdownResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    report("Brute Force", two_sum_brute_force(&SEQUENCE, TARGET_SUM));
    report("Memoization", two_sum_memoized(&SEQUENCE, TARGET_SUM));
    Ok(())
}
