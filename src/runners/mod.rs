//! Contains executors of the algorithms, gathering time & space metrics to report
//! or to pass to [crate::low_level_analysis] in order to have their complexity measured

pub mod common;
pub mod standard;
