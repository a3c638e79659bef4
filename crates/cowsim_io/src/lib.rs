//! # Cowsim IO
//!
//! Reporting layer for the cow pen simulation.
//!
//! This crate provides:
//! - Structured error handling with custom error types
//! - CSV export of every cohort's telemetry tables
//! - A JSON run manifest summarising the run
//! - An append-only JSON Lines event log

/// Error types and result aliases for I/O operations
pub mod error;
/// JSON Lines log of pipeline events
pub mod history;
/// Run summary persisted next to the report
pub mod manifest;
/// CSV export of cohort telemetry
pub mod report;

pub use error::{IoError, Result};
pub use history::EventLog;
pub use manifest::RunManifest;
pub use report::write_report;
