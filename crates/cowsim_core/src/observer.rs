//! Sinks that receive the pen's [`LiveEvent`]s as they happen.

use cowsim_data::LiveEvent;
use std::sync::{Arc, Mutex};

/// Receiver for pipeline events, injected into the pen.
pub trait EventSink {
    fn record(&mut self, event: &LiveEvent);
}

impl<F: FnMut(&LiveEvent)> EventSink for F {
    fn record(&mut self, event: &LiveEvent) {
        self(event)
    }
}

/// Writes events to `tracing`. The default sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&mut self, event: &LiveEvent) {
        match event {
            LiveEvent::Birth { id, cohort, step, .. } => {
                tracing::debug!(step, cohort = cohort.as_str(), %id, "Calf born");
            }
            LiveEvent::Death {
                id,
                cohort,
                age,
                cause,
                step,
            } => {
                tracing::debug!(step, cohort = cohort.as_str(), %id, age, %cause, "Animal died");
            }
            LiveEvent::Culled { id, cohort, step } => {
                tracing::debug!(step, cohort = cohort.as_str(), %id, "Animal culled over capacity");
            }
            LiveEvent::Extinction { cohort, step } => {
                tracing::info!(step, cohort = cohort.as_str(), "Cohort extinct, stopping run");
            }
            LiveEvent::StepCompleted {
                step,
                census,
                populations,
                servings,
            } => {
                tracing::trace!(step, census, servings, ?populations, "Step completed");
            }
        }
    }
}

/// Keeps every event in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<LiveEvent>>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<LiveEvent> {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for MemorySink {
    fn record(&mut self, event: &LiveEvent) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event.clone());
    }
}
