//! Miscellaneous helpers shared by the runners & reports

pub mod measurements;
