//! Exports time & space algorithm complexity analysis functions, as well as the needed types to operate on them. See:
//!   - [time_analysis]
//!   - [space_analysis]
//!   - [types]
//!
//! The analysis compares 2 passes of the same algorithm, run on inputs of different sizes:
//! how much more time (or memory) the second pass needed tells how the algorithm grows.

mod low_level_analysis;
pub use low_level_analysis::*;
pub mod types;
pub mod time_analysis;
pub mod space_analysis;
