//! Error types shared by the problem variants & the timing harness

use thiserror::Error;

/// Result type for this crate's fallible operations
pub type ShowdownResult<T> = Result<T, ShowdownError>;

/// Everything that may go wrong when computing a problem variant or timing it
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShowdownError {
    #[error("at least one iteration is needed to compute an average time")]
    ZeroIterations,
    #[error("growth analysis needs 2 <= pass 1 size < pass 2 size; got {pass1_n} & {pass2_n}")]
    InvalidGrowthPasses { pass1_n: u32, pass2_n: u32 },
    #[error("Fibonacci({n}) does not fit in 64 bits")]
    FibonacciOverflow { n: u32 },
    #[error("a {rows}x{cols} grid has no cells to walk through")]
    InvalidGrid { rows: usize, cols: usize },
    #[error("the number of paths in a {rows}x{cols} grid does not fit in 64 bits")]
    PathCountOverflow { rows: usize, cols: usize },
    #[error("input of {len} elements is too large for this variant (maximum: {max})")]
    InputTooLarge { len: usize, max: usize },
    #[error("value {value} does not fit a table of {capacity} slots")]
    ValueOutOfRange { value: i64, capacity: usize },
}
