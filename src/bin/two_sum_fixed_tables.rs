//! Two sum again, now comparing the memoization backed by a dense index table
//! & the tabulation backed by a fixed size, value indexed, table.

use dp_showdown::{
    compare_variants,
    problems::two_sum::*,
    ShowdownResult, Variant, DEFAULT_ITERATIONS, OUTPUT,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const SEQUENCE: [i64; 6] = [8, 10, 2, 9, 7, 5];
const TARGET_SUM: i64 = 11;

fn main() -> ShowdownResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    OUTPUT("-----------------------------------\n");
    OUTPUT(&format!("Calculating Two-Sum ({})\n", TARGET_SUM));
    let variants: Vec<Variant<ShowdownResult<Option<Pair>>>> = vec![
        ("Brute Force",          Box::new(|| Ok(two_sum_brute_force(&SEQUENCE, TARGET_SUM)))),
        ("Recursive",            Box::new(|| Ok(two_sum_recursive(&SEQUENCE, TARGET_SUM)))),
        ("Memoized",             Box::new(|| two_sum_memoized_table(&SEQUENCE, TARGET_SUM))),
        ("Tabulation C-Style",   Box::new(|| two_sum_value_table(&SEQUENCE, TARGET_SUM))),
    ];
    for variant in compare_variants("two sum", DEFAULT_ITERATIONS, variants)? {
        let pair = variant.timing.last_result?;
        info!(variant = variant.name, ?pair, "computed");
    }
    OUTPUT("-----------------------------------\n");
    Ok(())
}
