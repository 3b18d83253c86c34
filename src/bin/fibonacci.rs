//! Compares recursive, memoized & tabulated Fibonacci implementations.

use std::collections::HashMap;
use dp_showdown::{
    compare_variants,
    problems::fibonacci::*,
    ShowdownResult, Variant, VariantTiming, DEFAULT_ITERATIONS, OUTPUT,
};
use tracing_subscriber::EnvFilter;

const TEST_CASES: [u32; 3] = [10, 20, 30];

fn main() -> ShowdownResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    // shared by every test case, so later cases start from what earlier ones computed
    let mut table = FibonacciTable::with_capacity_for(MAX_FIBONACCI_N);

    for n in TEST_CASES {
        OUTPUT(&format!("Calculating Fibonacci({})\n", n));
        // reused across iterations: only the first one does any real work
        let mut memo = HashMap::new();
        let variants: Vec<Variant<ShowdownResult<u64>>> = vec![
            ("recursive Fibonacci",             Box::new(|| fibonacci_recursive(n))),
            ("memoized Fibonacci",              Box::new(|| fibonacci_memoized(n, &mut memo))),
            ("tabulated Fibonacci",             Box::new(|| fibonacci_tabulated(n))),
            ("table memoized Fibonacci",        Box::new(|| fibonacci_memoized_table(n, &mut table))),
            ("array tabulated Fibonacci",       Box::new(|| fibonacci_array_tabulated(n))),
        ];
        for VariantTiming { name, timing } in compare_variants("Fibonacci", DEFAULT_ITERATIONS, variants)? {
            OUTPUT(&format!("Fibonacci({}) = {} -- {}\n", n, timing.last_result?, name));
        }
        OUTPUT("-----------------------------------\n");
    }
    Ok(())
}
