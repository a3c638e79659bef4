use super::entity::CauseOfDeath;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Something that happened inside the pen during a step.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "event")]
pub enum LiveEvent {
    Birth {
        id: Uuid,
        cohort: String,
        parents: (Uuid, Uuid),
        step: u64,
    },
    Death {
        id: Uuid,
        cohort: String,
        age: u32,
        cause: CauseOfDeath,
        step: u64,
    },
    /// Removed by capacity pruning while still alive.
    Culled {
        id: Uuid,
        cohort: String,
        step: u64,
    },
    Extinction {
        cohort: String,
        step: u64,
    },
    StepCompleted {
        step: u64,
        /// Head count at the start of the step, before any birth or removal.
        census: usize,
        /// Head counts per cohort once the step has finished.
        populations: Vec<(String, usize)>,
        servings: u32,
    },
}

impl LiveEvent {
    #[must_use]
    pub fn step(&self) -> u64 {
        match self {
            LiveEvent::Birth { step, .. }
            | LiveEvent::Death { step, .. }
            | LiveEvent::Culled { step, .. }
            | LiveEvent::Extinction { step, .. }
            | LiveEvent::StepCompleted { step, .. } => *step,
        }
    }
}
