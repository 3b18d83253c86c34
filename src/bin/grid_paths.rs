//! Compares brute force, memoized & tabulated ways of counting the right/down paths through a grid.

use dp_showdown::{
    compare_variants,
    problems::grid_paths::*,
    ShowdownResult, Variant, DEFAULT_ITERATIONS, OUTPUT,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const ROWS: usize = 3;
const COLS: usize = 3;

fn main() -> ShowdownResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    OUTPUT("-----------------------------------\n");
    OUTPUT(&format!("Calculating Paths in a {}x{} matrix\n", ROWS, COLS));
    let variants: Vec<Variant<ShowdownResult<u64>>> = vec![
        ("Brute Force", Box::new(|| count_paths_brute_force(ROWS, COLS))),
        ("Memoization", Box::new(|| count_paths_memoized(ROWS, COLS))),
        ("Tabulation",  Box::new(|| count_paths_tabulated(ROWS, COLS))),
    ];
    for variant in compare_variants("grid paths", DEFAULT_ITERATIONS, variants)? {
        let paths = variant.timing.last_result?;
        info!(variant = variant.name, paths, "computed");
    }
    OUTPUT("-----------------------------------\n");
    Ok(())
}
