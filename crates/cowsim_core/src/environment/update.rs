use crate::environment::Environment;
use crate::feed::FeedAllocator;
use crate::lifecycle::Organism;
use crate::systems::{pruning, reproduction};
use cowsim_data::LiveEvent;
use rand::seq::SliceRandom;
use std::time::Instant;

impl Environment {
    /// Advances the pen by one day.
    ///
    /// Phases run in a fixed order:
    /// - census of head counts and body state
    /// - feeding from one shared, shuffled ration
    /// - reproduction over every ordered pair in each cohort
    /// - caloric expenditure
    /// - removal of the dead, then random culling above capacity
    /// - milk, then methane measurement
    /// - aging of the survivors
    ///
    /// # Returns
    /// Events raised during the step, also forwarded to the sink. Empty once
    /// `max_steps` has been reached, in which case nothing changes.
    pub fn step(&mut self) -> Vec<LiveEvent> {
        if self.is_finished() {
            tracing::warn!(step = self.step, "Step requested past max_steps, ignoring");
            return Vec::new();
        }

        let started = Instant::now();
        let step = self.step;
        let mut events = Vec::new();

        let census = self.pass_census(step);
        let servings = self.pass_feeding(step);
        self.pass_reproduction(step, &mut events);
        self.pass_expenditure();
        self.pass_pruning(step, &mut events);
        self.pass_milk(step);
        self.pass_methane(step);
        self.pass_aging();

        self.step += 1;
        events.push(LiveEvent::StepCompleted {
            step,
            census,
            populations: self.populations(),
            servings,
        });

        for event in &events {
            self.metrics.observe(event);
            self.sink.record(event);
        }
        let population = self.total_population();
        self.metrics.record_step(started.elapsed(), population);

        events
    }

    /// Records head counts and body state, returning the pen's head count.
    fn pass_census(&mut self, step: u64) -> usize {
        let mut total = 0;
        for cohort in &mut self.cohorts {
            total += cohort.members.len();
            cohort
                .telemetry
                .record_population(step, cohort.members.len());
            for cow in &cohort.members {
                cohort.telemetry.state.record(cow.id(), step, cow.body_state());
            }
        }
        total
    }

    /// Feeds every animal in the pen from one day's ration and returns the
    /// servings handed out.
    fn pass_feeding(&mut self, step: u64) -> u32 {
        let mut allocator = FeedAllocator::new(
            self.config.feed.kind,
            self.config.daily_servings(),
            self.cohorts.iter().flat_map(|c| c.members.iter()),
        );

        let mut queue: Vec<(usize, usize)> = self
            .cohorts
            .iter()
            .enumerate()
            .flat_map(|(c, cohort)| (0..cohort.members.len()).map(move |m| (c, m)))
            .collect();
        queue.shuffle(&mut self.rng);

        for (c, m) in queue {
            let cohort = &mut self.cohorts[c];
            let cow = &mut cohort.members[m];
            let servings = allocator.feed(cow);
            cohort.telemetry.feeding.record(cow.id(), step, servings);
        }

        let served = allocator.served();
        if allocator.current_serving_total() == 0 {
            tracing::debug!(step, served, "Daily ration exhausted");
        }
        self.metrics.record_feeding(served, allocator.price());
        served
    }

    fn pass_reproduction(&mut self, step: u64, events: &mut Vec<LiveEvent>) {
        for cohort in &mut self.cohorts {
            let births = reproduction::reproduce(&mut cohort.members, &mut self.rng);
            for birth in births {
                cohort.telemetry.add_entity(birth.id);
                events.push(LiveEvent::Birth {
                    id: birth.id,
                    cohort: cohort.name().to_string(),
                    parents: birth.parents,
                    step,
                });
            }
        }
    }

    fn pass_expenditure(&mut self) {
        for cohort in &mut self.cohorts {
            for cow in &mut cohort.members {
                cow.expend_calories(&mut self.rng);
            }
        }
    }

    fn pass_pruning(&mut self, step: u64, events: &mut Vec<LiveEvent>) {
        let capacity = self.config.max_capacity;
        for cohort in &mut self.cohorts {
            for death in pruning::remove_dead(&mut cohort.members) {
                events.push(LiveEvent::Death {
                    id: death.id,
                    cohort: cohort.name().to_string(),
                    age: death.age,
                    cause: death.cause,
                    step,
                });
            }
            for id in pruning::cull_to_capacity(&mut cohort.members, capacity, &mut self.rng) {
                events.push(LiveEvent::Culled {
                    id,
                    cohort: cohort.name().to_string(),
                    step,
                });
            }
        }
    }

    fn pass_milk(&mut self, step: u64) {
        for cohort in &mut self.cohorts {
            for cow in &cohort.members {
                let milk = cow.milk_yield(&mut self.rng);
                cohort.telemetry.milk.record(cow.id(), step, milk);
            }
        }
    }

    fn pass_methane(&mut self, step: u64) {
        for cohort in &mut self.cohorts {
            for cow in &cohort.members {
                cohort
                    .telemetry
                    .methane
                    .record(cow.id(), step, cow.methane_yield());
            }
        }
    }

    fn pass_aging(&mut self) {
        for cohort in &mut self.cohorts {
            for cow in &mut cohort.members {
                cow.increment_age();
            }
        }
    }
}
