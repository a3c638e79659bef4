//! Run driver shared by the command line and integration tests.

use crate::registry::{default_founders, organism_names, EnvironmentKind};
use anyhow::{Context, Result};
use cowsim_core::{Environment, SimConfig};
use cowsim_io::{write_report, EventLog};
use std::path::PathBuf;

/// Everything needed to start a run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub environment: EnvironmentKind,
    /// `(organism kind, count)` pairs. Empty means the environment's default herd.
    pub founders: Vec<(String, i64)>,
    /// Directory for the report and event log. `None` writes nothing.
    pub output: Option<PathBuf>,
    pub config: SimConfig,
}

/// What a finished run produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub environment: Environment,
    pub files: Vec<PathBuf>,
}

impl RunOutcome {
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.environment.steps()
    }
}

/// Builds the environment, runs it to completion and writes the report.
pub fn run(options: RunOptions) -> Result<RunOutcome> {
    let RunOptions {
        environment: kind,
        founders,
        output,
        config,
    } = options;

    let founders = if founders.is_empty() {
        default_founders(kind)
    } else {
        founders
    };

    let mut environment = Environment::new(config, founders)
        .with_context(|| {
            format!(
                "Failed to build {kind} environment (known organisms: {})",
                organism_names().join(", ")
            )
        })?;

    if let Some(dir) = &output {
        let log = EventLog::create(dir)
            .with_context(|| format!("Failed to open event log in {}", dir.display()))?;
        environment = environment.with_sink(log);
    }

    tracing::info!(
        environment = kind.name(),
        output = ?output,
        "Starting run"
    );
    environment.run();

    let files = match &output {
        Some(dir) => write_report(dir, &environment)
            .with_context(|| format!("Failed to write report to {}", dir.display()))?,
        None => Vec::new(),
    };

    Ok(RunOutcome { environment, files })
}
