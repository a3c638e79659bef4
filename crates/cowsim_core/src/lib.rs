//! # Cowsim Core
//!
//! The simulation engine for a resource-bounded cow pen.
//!
//! This crate contains the deterministic simulation logic, including:
//! - Organism state (age, calories, weight) and its daily transitions
//! - Proportional feed rationing with a fixed daily budget
//! - Reproduction, mortality and capacity culling
//! - Per-cohort telemetry tables
//! - Metrics collection and structured logging
//!
//! ## Example
//!
//! ```
//! use cowsim_core::{Environment, SimConfig};
//!
//! let config = SimConfig {
//!     max_steps: 5,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//! let mut env = Environment::new(config, [("Purple Angus", 10)]).unwrap();
//! env.run();
//! assert!(env.steps() <= 5);
//! ```

/// Breeds and their physiological constants
pub mod breed;
/// Configuration management for simulation parameters
pub mod config;
/// The pen and its step pipeline
pub mod environment;
/// Error types for pen construction
pub mod error;
/// Daily feed rationing
pub mod feed;
/// Organism behavior and the cow implementation
pub mod lifecycle;
/// Run counters and logging setup
pub mod metrics;
/// Event sinks
pub mod observer;
/// Population systems (reproduction, pruning)
pub mod systems;
/// Per-cohort time series
pub mod telemetry;

pub use breed::{Breed, BreedProfile};
pub use config::{FeedConfig, SimConfig};
pub use environment::{Cohort, Environment};
pub use error::SimError;
pub use feed::{FeedAllocator, FeedKind};
pub use lifecycle::{Cow, Organism};
pub use metrics::{init_logging, Metrics};
pub use observer::{EventSink, MemorySink, TracingSink};
pub use telemetry::{CohortTelemetry, Table};
pub use cowsim_data::{BodyState, CauseOfDeath, Emotion, LiveEvent, Sex, Temperament};
