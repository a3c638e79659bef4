//! Configuration management for simulation parameters.
//!
//! All fields have defaults, so a `config.toml` only needs the values it
//! overrides.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! max_capacity = 100
//! max_steps = 365
//! seed = 42
//!
//! [feed]
//! kind = "orange-grass"
//! servings = 300
//! ```

use crate::feed::FeedKind;
use serde::{Deserialize, Serialize};

/// Default daily servings stocked per unit of pen capacity.
pub const SERVINGS_PER_CAPITA: u32 = 3;

/// Feed stocked in the pen every day.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct FeedConfig {
    pub kind: FeedKind,
    /// Servings per day for the whole pen. `None` scales with capacity.
    pub servings: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    /// Largest head count any single cohort may keep after pruning.
    pub max_capacity: usize,
    /// Number of days to simulate.
    pub max_steps: u64,
    /// Generator seed. `None` seeds from entropy.
    pub seed: Option<u64>,
    pub feed: FeedConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_capacity: 100,
            max_steps: 365,
            seed: None,
            feed: FeedConfig::default(),
        }
    }
}

impl SimConfig {
    /// Servings stocked per day.
    #[must_use]
    pub fn daily_servings(&self) -> u32 {
        self.feed.servings.unwrap_or_else(|| {
            u32::try_from(self.max_capacity)
                .unwrap_or(u32::MAX)
                .saturating_mul(SERVINGS_PER_CAPITA)
        })
    }

    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.max_capacity > 0, "Max capacity must be positive");
        anyhow::ensure!(self.max_steps > 0, "Max steps must be positive");
        anyhow::ensure!(
            self.daily_servings() > 0,
            "Daily feed servings must be positive"
        );
        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Stable hash of every parameter that shapes a run.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self).as_bytes());
        hex::encode(hasher.finalize())
    }
}
