//! Contains utilities for holding & presenting measurements

pub mod presentable_measurements;
