//! Run summary written next to the CSV report.

use crate::error::{IoError, Result};
use chrono::{DateTime, Utc};
use cowsim_core::{Environment, Metrics};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    pub generated_at: DateTime<Utc>,
    pub environment: String,
    pub steps_completed: u64,
    pub max_steps: u64,
    pub max_capacity: usize,
    pub seed: Option<u64>,
    pub config_fingerprint: String,
    /// Final head count per cohort.
    pub populations: Vec<(String, usize)>,
    pub metrics: Metrics,
    /// Report files, relative to the manifest.
    pub files: Vec<String>,
}

impl RunManifest {
    #[must_use]
    pub fn from_environment(env: &Environment, files: Vec<String>) -> Self {
        let config = env.config();
        Self {
            generated_at: Utc::now(),
            environment: Environment::NAME.to_string(),
            steps_completed: env.steps(),
            max_steps: config.max_steps,
            max_capacity: config.max_capacity,
            seed: config.seed,
            config_fingerprint: config.fingerprint(),
            populations: env.populations(),
            metrics: env.metrics().clone(),
            files,
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json).map_err(|e| {
            IoError::FileSystem(e).with_context(format!("writing manifest to {:?}", path.as_ref()))
        })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(&path).map_err(|e| {
            IoError::FileSystem(e)
                .with_context(format!("reading manifest from {:?}", path.as_ref()))
        })?;
        Ok(serde_json::from_str(&json)?)
    }
}
