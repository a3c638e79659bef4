//! Offline summary of an `events.jsonl` log.

use cowsim_data::LiveEvent;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventSummary {
    pub steps: u64,
    pub births: u64,
    /// Deaths keyed by cause.
    pub deaths: BTreeMap<&'static str, u64>,
    pub culled: u64,
    pub servings: u64,
    /// Sum of ages at death, in days.
    pub lifespan_total: u64,
    pub peak_population: usize,
    pub extinct: Option<(String, u64)>,
}

impl EventSummary {
    #[must_use]
    pub fn from_events<'a, I: IntoIterator<Item = &'a LiveEvent>>(events: I) -> Self {
        let mut summary = Self::default();
        for event in events {
            match event {
                LiveEvent::Birth { .. } => summary.births += 1,
                LiveEvent::Death { age, cause, .. } => {
                    *summary.deaths.entry(cause.as_str()).or_insert(0) += 1;
                    summary.lifespan_total += u64::from(*age);
                }
                LiveEvent::Culled { .. } => summary.culled += 1,
                LiveEvent::Extinction { cohort, step } => {
                    summary.extinct = Some((cohort.clone(), *step));
                }
                LiveEvent::StepCompleted {
                    census,
                    populations,
                    servings,
                    ..
                } => {
                    summary.steps += 1;
                    summary.servings += u64::from(*servings);
                    let total: usize = populations.iter().map(|(_, n)| n).sum();
                    summary.peak_population = summary.peak_population.max(*census).max(total);
                }
            }
        }
        summary
    }

    #[must_use]
    pub fn total_deaths(&self) -> u64 {
        self.deaths.values().sum()
    }

    /// Mean age at death in days, if anything died.
    #[must_use]
    pub fn average_lifespan(&self) -> Option<f64> {
        match self.total_deaths() {
            0 => None,
            n => Some(self.lifespan_total as f64 / n as f64),
        }
    }
}

impl fmt::Display for EventSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Steps:           {}", self.steps)?;
        writeln!(f, "Births:          {}", self.births)?;
        writeln!(f, "Deaths:          {}", self.total_deaths())?;
        for (cause, count) in &self.deaths {
            writeln!(f, "  {cause:<14} {count}")?;
        }
        writeln!(f, "Culled:          {}", self.culled)?;
        writeln!(f, "Servings served: {}", self.servings)?;
        writeln!(f, "Peak population: {}", self.peak_population)?;
        if let Some(days) = self.average_lifespan() {
            writeln!(f, "Mean lifespan:   {:.1} days", days)?;
        }
        if let Some((cohort, step)) = &self.extinct {
            writeln!(f, "Extinct:         {cohort} at step {step}")?;
        }
        Ok(())
    }
}
