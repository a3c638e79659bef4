use crate::error::{IoError, Result};
use cowsim_core::EventSink;
use cowsim_data::LiveEvent;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const EVENT_LOG_FILE: &str = "events.jsonl";

/// Appends every pipeline event to `events.jsonl`, one JSON object per line.
pub struct EventLog {
    file: BufWriter<File>,
    path: PathBuf,
}

impl EventLog {
    /// Starts a fresh log in `dir`, creating the directory if needed.
    pub fn create<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let path = dir.join(EVENT_LOG_FILE);
        let file = File::create(&path)
            .map_err(|e| IoError::FileSystem(e).with_context(format!("creating {:?}", path)))?;
        Ok(Self {
            file: BufWriter::new(file),
            path,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn log_event(&mut self, event: &LiveEvent) -> Result<()> {
        let json = serde_json::to_string(event)?;
        writeln!(self.file, "{}", json)?;
        if matches!(event, LiveEvent::StepCompleted { .. } | LiveEvent::Extinction { .. }) {
            self.file.flush()?;
        }
        Ok(())
    }

    /// Reads a log back. A malformed line is an error.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Vec<LiveEvent>> {
        let content = std::fs::read_to_string(path)?;
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).map_err(IoError::from))
            .collect()
    }
}

impl EventSink for EventLog {
    fn record(&mut self, event: &LiveEvent) {
        if let Err(e) = self.log_event(event) {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to log event");
        }
    }
}
