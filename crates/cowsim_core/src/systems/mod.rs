//! Population dynamics systems run by the pen between measurements.

pub mod pruning;
pub mod reproduction;
