//! Per-cohort time series recorded by the pen.
//!
//! Every per-animal table maps an entity id to a column indexed by step.
//! Columns are created when an animal joins the cohort and are never removed,
//! so the history of dead animals stays addressable. Cells for steps in which
//! an animal was not measured stay `None`.

use cowsim_data::BodyState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Append-only table of per-entity columns indexed by step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table<T> {
    order: Vec<Uuid>,
    columns: HashMap<Uuid, Vec<Option<T>>>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            columns: HashMap::new(),
        }
    }
}

impl<T: Clone> Table<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty column for `id`. Returns `false` if it already existed.
    pub fn add_column(&mut self, id: Uuid) -> bool {
        if self.columns.contains_key(&id) {
            return false;
        }
        self.order.push(id);
        self.columns.insert(id, Vec::new());
        true
    }

    /// Writes `value` at (`id`, `step`), creating the column if needed.
    pub fn record(&mut self, id: Uuid, step: u64, value: T) {
        self.add_column(id);
        let row = step as usize;
        if let Some(cells) = self.columns.get_mut(&id) {
            if cells.len() <= row {
                cells.resize(row + 1, None);
            }
            cells[row] = Some(value);
        }
    }

    #[must_use]
    pub fn get(&self, id: &Uuid, step: u64) -> Option<&T> {
        self.columns
            .get(id)
            .and_then(|cells| cells.get(step as usize))
            .and_then(Option::as_ref)
    }

    #[must_use]
    pub fn column(&self, id: &Uuid) -> Option<&[Option<T>]> {
        self.columns.get(id).map(Vec::as_slice)
    }

    /// Every column in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = (Uuid, &[Option<T>])> + '_ {
        self.order
            .iter()
            .filter_map(move |id| self.column(id).map(|cells| (*id, cells)))
    }

    #[must_use]
    pub fn contains(&self, id: &Uuid) -> bool {
        self.columns.contains_key(id)
    }

    /// Column ids in the order they were added.
    #[must_use]
    pub fn ids(&self) -> &[Uuid] {
        &self.order
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Length of the longest column.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.columns.values().map(Vec::len).max().unwrap_or(0)
    }

    /// Cells of every column at `step`, in column order.
    pub fn row(&self, step: u64) -> impl Iterator<Item = (Uuid, Option<&T>)> + '_ {
        self.order.iter().map(move |id| (*id, self.get(id, step)))
    }
}

/// All series recorded for one cohort.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CohortTelemetry {
    /// Head count at the start of each step.
    pub population: Vec<usize>,
    /// Servings received per animal.
    pub feeding: Table<u32>,
    /// Liters of milk per animal.
    pub milk: Table<f64>,
    /// Kilograms of methane per animal.
    pub methane: Table<f64>,
    /// Age, calories and weight per animal at the start of each step.
    pub state: Table<BodyState>,
}

impl CohortTelemetry {
    pub fn with_entities<I: IntoIterator<Item = Uuid>>(ids: I) -> Self {
        let mut telemetry = Self::default();
        for id in ids {
            telemetry.add_entity(id);
        }
        telemetry
    }

    /// Opens a column for `id` in every per-animal table.
    pub fn add_entity(&mut self, id: Uuid) {
        self.feeding.add_column(id);
        self.milk.add_column(id);
        self.methane.add_column(id);
        self.state.add_column(id);
    }

    pub fn record_population(&mut self, step: u64, count: usize) {
        let row = step as usize;
        if self.population.len() <= row {
            self.population.resize(row + 1, 0);
        }
        self.population[row] = count;
    }

    /// Number of steps with a recorded head count.
    #[must_use]
    pub fn steps_recorded(&self) -> usize {
        self.population.len()
    }
}
