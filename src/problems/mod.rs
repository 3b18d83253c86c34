//! The classic problems being compared -- each one solved by several variants,
//! from brute force to tabulation, all returning the same answers.

pub mod fibonacci;
pub mod grid_paths;
pub mod lis;
pub mod two_sum;
