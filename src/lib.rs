//! Command-line driver for the cow pen simulation.

pub mod engine;
pub mod registry;
pub mod summary;

pub use engine::{run, RunOptions, RunOutcome};
pub use registry::{EnvironmentKind, DEFAULT_POPULATION};
pub use summary::EventSummary;
