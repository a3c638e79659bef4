//! The cow pen: named cohorts of animals stepped day by day.

use crate::breed::Breed;
use crate::config::SimConfig;
use crate::error::{Result, SimError};
use crate::lifecycle::{Cow, Organism};
use crate::metrics::Metrics;
use crate::observer::{EventSink, TracingSink};
use crate::telemetry::CohortTelemetry;
use cowsim_data::LiveEvent;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub mod update;

/// Animals of one breed sharing the pen, with their recorded history.
#[derive(Debug, Clone)]
pub struct Cohort {
    pub breed: Breed,
    pub members: Vec<Cow>,
    pub telemetry: CohortTelemetry,
}

impl Cohort {
    fn new(breed: Breed) -> Self {
        Self {
            breed,
            members: Vec::new(),
            telemetry: CohortTelemetry::default(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.breed.name()
    }

    #[must_use]
    pub fn population(&self) -> usize {
        self.members.len()
    }

    fn admit(&mut self, cow: Cow) {
        self.telemetry.add_entity(cow.id());
        self.members.push(cow);
    }
}

/// A resource-bounded pen.
///
/// Owns every cohort, the run's single random generator and the sink that
/// receives pipeline events.
pub struct Environment {
    pub(crate) cohorts: Vec<Cohort>,
    pub(crate) step: u64,
    pub(crate) config: SimConfig,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) sink: Box<dyn EventSink>,
    pub(crate) metrics: Metrics,
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("step", &self.step)
            .field("populations", &self.populations())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Environment {
    /// Name of this environment kind.
    pub const NAME: &'static str = "Cowpen";

    /// Builds a pen from `(organism kind, count)` pairs.
    ///
    /// Every pair is validated before any animal is generated, so a rejected
    /// founder list never yields a partial pen. Pairs naming the same kind
    /// are merged into one cohort.
    pub fn new<I, S>(config: SimConfig, founders: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        config
            .validate()
            .map_err(|e| SimError::invalid_config(e.to_string()))?;

        let mut plan: Vec<(Breed, usize)> = Vec::new();
        for (kind, quantity) in founders {
            let breed: Breed = kind.as_ref().parse()?;
            if quantity <= 0 {
                return Err(SimError::NonPositiveQuantity {
                    breed: breed.name().to_string(),
                    quantity,
                });
            }
            plan.push((breed, quantity as usize));
        }
        if plan.is_empty() {
            return Err(SimError::NoFounders);
        }

        let mut rng = Self::seed_rng(&config);
        let mut herd = Vec::new();
        for (breed, quantity) in plan {
            herd.extend((0..quantity).map(|_| Cow::generate(breed, &mut rng)));
        }
        Ok(Self::assemble(config, rng, herd))
    }

    /// Builds a pen from existing animals, grouped into cohorts by breed.
    pub fn from_herd<I: IntoIterator<Item = Cow>>(config: SimConfig, herd: I) -> Result<Self> {
        config
            .validate()
            .map_err(|e| SimError::invalid_config(e.to_string()))?;
        let herd: Vec<Cow> = herd.into_iter().collect();
        if herd.is_empty() {
            return Err(SimError::NoFounders);
        }
        let rng = Self::seed_rng(&config);
        Ok(Self::assemble(config, rng, herd))
    }

    fn seed_rng(config: &SimConfig) -> ChaCha8Rng {
        match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }

    fn assemble(config: SimConfig, rng: ChaCha8Rng, herd: Vec<Cow>) -> Self {
        let mut cohorts: Vec<Cohort> = Vec::new();
        for cow in herd {
            let breed = cow.breed();
            let index = match cohorts.iter().position(|c| c.breed == breed) {
                Some(index) => index,
                None => {
                    cohorts.push(Cohort::new(breed));
                    cohorts.len() - 1
                }
            };
            cohorts[index].admit(cow);
        }

        tracing::info!(
            environment = Self::NAME,
            cohorts = cohorts.len(),
            founders = cohorts.iter().map(Cohort::population).sum::<usize>(),
            capacity = config.max_capacity,
            steps = config.max_steps,
            "Environment created"
        );

        Self {
            cohorts,
            step: 0,
            config,
            rng,
            sink: Box::new(TracingSink),
            metrics: Metrics::new(),
        }
    }

    /// Replaces the event sink.
    #[must_use]
    pub fn with_sink<S: EventSink + 'static>(mut self, sink: S) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Steps completed so far.
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.step
    }

    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    #[must_use]
    pub fn cohorts(&self) -> &[Cohort] {
        &self.cohorts
    }

    #[must_use]
    pub fn cohort(&self, name: &str) -> Option<&Cohort> {
        let breed: Breed = name.parse().ok()?;
        self.cohorts.iter().find(|c| c.breed == breed)
    }

    /// Mutable access for seeding fixtures between steps.
    pub fn cohort_mut(&mut self, name: &str) -> Option<&mut Cohort> {
        let breed: Breed = name.parse().ok()?;
        self.cohorts.iter_mut().find(|c| c.breed == breed)
    }

    #[must_use]
    pub fn telemetry(&self, name: &str) -> Option<&CohortTelemetry> {
        self.cohort(name).map(|c| &c.telemetry)
    }

    /// Current head count of every cohort, in creation order.
    #[must_use]
    pub fn populations(&self) -> Vec<(String, usize)> {
        self.cohorts
            .iter()
            .map(|c| (c.name().to_string(), c.population()))
            .collect()
    }

    #[must_use]
    pub fn total_population(&self) -> usize {
        self.cohorts.iter().map(Cohort::population).sum()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.step >= self.config.max_steps
    }

    /// First cohort with no members left, if any.
    #[must_use]
    pub fn extinct_cohort(&self) -> Option<&Cohort> {
        self.cohorts.iter().find(|c| c.members.is_empty())
    }

    /// Steps until `max_steps` is reached or a cohort dies out, and returns
    /// the number of steps completed.
    pub fn run(&mut self) -> u64 {
        while !self.is_finished() {
            if let Some(cohort) = self.extinct_cohort() {
                let event = LiveEvent::Extinction {
                    cohort: cohort.name().to_string(),
                    step: self.step,
                };
                self.metrics.observe(&event);
                self.sink.record(&event);
                break;
            }
            self.step();
        }
        tracing::info!(
            steps = self.step,
            population = self.total_population(),
            births = self.metrics.births,
            deaths = self.metrics.total_deaths(),
            "Run finished"
        );
        self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cowsim_data::Sex;
    use uuid::Uuid;

    fn config() -> SimConfig {
        SimConfig {
            seed: Some(1),
            ..Default::default()
        }
    }

    #[test]
    fn test_constructor() {
        let env = Environment::new(config(), [("Purple Angus", 4)]).unwrap();
        let cohort = env.cohort("Purple Angus").unwrap();
        assert_eq!(cohort.population(), 4);
        assert_eq!(cohort.telemetry.feeding.len(), 4);
        assert_eq!(env.steps(), 0);
    }

    #[test]
    fn test_duplicate_kinds_merge() {
        let env =
            Environment::new(config(), [("Purple Angus", 2), ("purple-angus", 3)]).unwrap();
        assert_eq!(env.cohorts().len(), 1);
        assert_eq!(env.total_population(), 5);
    }

    #[test]
    fn test_rejects_bad_founders() {
        assert_eq!(
            Environment::new(config(), [("Holstein", 3)]).unwrap_err(),
            SimError::UnknownBreed("Holstein".into())
        );
        assert!(matches!(
            Environment::new(config(), [("Purple Angus", 3), ("Purple Angus", 0)]).unwrap_err(),
            SimError::NonPositiveQuantity { quantity: 0, .. }
        ));
        assert_eq!(
            Environment::new(config(), Vec::<(&str, i64)>::new()).unwrap_err(),
            SimError::NoFounders
        );
    }

    #[test]
    fn test_from_herd_groups_by_breed() {
        let herd = vec![
            Cow::new(Uuid::new_v4(), Breed::PurpleAngus, 10, Sex::Male, 9000.0, 900.0),
            Cow::new(Uuid::new_v4(), Breed::PurpleAngus, 20, Sex::Female, 9000.0, 900.0),
        ];
        let env = Environment::from_herd(config(), herd.clone()).unwrap();
        assert_eq!(env.cohorts().len(), 1);
        assert_eq!(env.cohorts()[0].members, herd);
        assert_eq!(
            env.cohorts()[0].telemetry.state.ids(),
            &[herd[0].id(), herd[1].id()]
        );
        assert_eq!(
            Environment::from_herd(config(), Vec::new()).unwrap_err(),
            SimError::NoFounders
        );
    }

    #[test]
    fn test_rejects_invalid_config() {
        let bad = SimConfig {
            max_steps: 0,
            ..config()
        };
        assert!(matches!(
            Environment::new(bad, [("Purple Angus", 3)]).unwrap_err(),
            SimError::InvalidConfig(_)
        ));
    }
}
