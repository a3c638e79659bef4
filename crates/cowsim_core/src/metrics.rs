//! Run counters and logging setup.

use cowsim_data::LiveEvent;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Counters accumulated over a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub steps: u64,
    pub births: u64,
    /// Deaths keyed by cause.
    pub deaths: BTreeMap<String, u64>,
    pub culled: u64,
    pub servings_served: u64,
    pub feed_cost: f64,
    #[serde(skip)]
    pub busy: Duration,
}

impl Metrics {
    /// Creates a new metrics collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one pipeline event.
    pub fn observe(&mut self, event: &LiveEvent) {
        match event {
            LiveEvent::Birth { .. } => self.births += 1,
            LiveEvent::Death { cause, .. } => {
                *self.deaths.entry(cause.as_str().to_string()).or_insert(0) += 1;
            }
            LiveEvent::Culled { .. } => self.culled += 1,
            LiveEvent::Extinction { .. } | LiveEvent::StepCompleted { .. } => {}
        }
    }

    pub fn record_feeding(&mut self, servings: u32, cost: f64) {
        self.servings_served += u64::from(servings);
        self.feed_cost += cost;
    }

    /// Records a completed step with its duration.
    pub fn record_step(&mut self, duration: Duration, population: usize) {
        self.steps += 1;
        self.busy += duration;

        // Roughly once a simulated month
        if self.steps.is_multiple_of(30) {
            tracing::info!(
                step = self.steps,
                population = population,
                births = self.births,
                deaths = self.total_deaths(),
                duration_us = duration.as_micros() as u64,
                "Simulation step"
            );
        }
    }

    #[must_use]
    pub fn total_deaths(&self) -> u64 {
        self.deaths.values().sum()
    }
}

/// Initialize tracing subscriber for logging.
///
/// `RUST_LOG` overrides the default `info` filter. Logs go to stderr so that
/// stdout carries only command output.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}
