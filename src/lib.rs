#![doc = include_str!("../README.md")]

pub mod features;
pub mod error;
pub mod problems;
pub mod runners;
pub mod low_level_analysis;
pub mod metrics_allocator;
pub mod utils;


// exported symbols
pub use {
    features::{ALLOC, OUTPUT, DEFAULT_ITERATIONS},
    error::{ShowdownError, ShowdownResult},
    low_level_analysis::types::BigOAlgorithmComplexity,
    runners::{
        common::{measure_time, average_time, AverageTiming},
        standard::{compare_variants, measure_growth, test_growth, Variant, VariantTiming},
    },
};
