pub mod macros;

use cowsim_core::{Breed, Cow, Environment, MemorySink, SimConfig};
use cowsim_data::Sex;
use uuid::Uuid;

#[allow(dead_code)]
pub struct PenBuilder {
    config: SimConfig,
    founders: Vec<(String, i64)>,
    herd: Vec<Cow>,
}

#[allow(dead_code)]
impl PenBuilder {
    pub fn new() -> Self {
        Self {
            config: SimConfig {
                seed: Some(42),
                ..Default::default()
            },
            founders: Vec::new(),
            herd: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.config.max_capacity = capacity;
        self
    }

    pub fn with_steps(mut self, steps: u64) -> Self {
        self.config.max_steps = steps;
        self
    }

    pub fn with_servings(mut self, servings: u32) -> Self {
        self.config.feed.servings = Some(servings);
        self
    }

    pub fn with_founders(mut self, kind: &str, count: i64) -> Self {
        self.founders.push((kind.to_string(), count));
        self
    }

    pub fn with_cow(mut self, cow: Cow) -> Self {
        self.herd.push(cow);
        self
    }

    /// Builds from explicit cows when any were added, from founder pairs otherwise.
    pub fn build(self) -> Environment {
        if self.herd.is_empty() {
            Environment::new(self.config, self.founders)
                .expect("Failed to create pen in test builder")
        } else {
            Environment::from_herd(self.config, self.herd)
                .expect("Failed to create pen in test builder")
        }
    }

    /// Builds with a [`MemorySink`] attached and returns a handle to it.
    pub fn build_recorded(self) -> (Environment, MemorySink) {
        let sink = MemorySink::new();
        let env = self.build().with_sink(sink.clone());
        (env, sink)
    }
}

#[allow(dead_code)]
pub struct CowBuilder {
    id: Option<Uuid>,
    age: u32,
    sex: Sex,
    calories: f64,
    weight: f64,
}

#[allow(dead_code)]
impl CowBuilder {
    pub fn new() -> Self {
        let p = Breed::PurpleAngus.profile();
        Self {
            id: None,
            age: p.adult_age,
            sex: Sex::Female,
            calories: p.caloric_midpoint(),
            weight: (p.min_adult_weight + p.max_weight) / 2.0,
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn sex(mut self, sex: Sex) -> Self {
        self.sex = sex;
        self
    }

    pub fn calories(mut self, calories: f64) -> Self {
        self.calories = calories;
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn build(self) -> Cow {
        Cow::new(
            self.id.unwrap_or_else(Uuid::new_v4),
            Breed::PurpleAngus,
            self.age,
            self.sex,
            self.calories,
            self.weight,
        )
    }
}
