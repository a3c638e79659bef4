//! Organism lifecycle: creation, metabolism, production and death.

use crate::breed::{Breed, BreedProfile};
use cowsim_data::{BodyState, CauseOfDeath, Emotion, Sex};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use uuid::Uuid;

/// Capabilities the pen needs from any organism it holds.
///
/// Every stochastic operation draws from the generator it is handed, so a
/// seeded generator replays a run exactly.
pub trait Organism: Sized {
    /// Founder with every field drawn uniformly from the breed's bounds.
    fn generate<R: Rng>(breed: Breed, rng: &mut R) -> Self;
    /// Like [`Organism::generate`] but aged zero days.
    fn newborn<R: Rng>(breed: Breed, rng: &mut R) -> Self;

    fn id(&self) -> Uuid;
    fn breed(&self) -> Breed;
    fn age(&self) -> u32;
    fn sex(&self) -> Sex;
    fn calories(&self) -> f64;
    fn weight(&self) -> f64;

    fn body_state(&self) -> BodyState {
        BodyState {
            age: self.age(),
            calories: self.calories(),
            weight: self.weight(),
        }
    }

    fn is_adult(&self) -> bool {
        self.age() >= self.breed().profile().adult_age
    }

    fn cause_of_death(&self) -> CauseOfDeath;
    /// Burns one day's worth of calories and returns the amount burnt.
    fn expend_calories<R: Rng>(&mut self, rng: &mut R) -> f64;
    /// Ingests `kcal` and returns the change in caloric reserve.
    fn caloric_intake(&mut self, kcal: f64) -> f64;
    /// Liters of milk produced today.
    fn milk_yield<R: Rng>(&self, rng: &mut R) -> f64;
    /// Kilograms of methane produced today.
    fn methane_yield(&self) -> f64;
    fn emotion<R: Rng>(&self, rng: &mut R) -> Emotion;
    fn should_reproduce<R: Rng>(a: &Self, b: &Self, rng: &mut R) -> bool;
    fn increment_age(&mut self);
}

/// A single cow of some [`Breed`].
#[derive(Debug, Clone, PartialEq)]
pub struct Cow {
    id: Uuid,
    breed: Breed,
    age: u32,
    sex: Sex,
    calories: f64,
    weight: f64,
}

impl Cow {
    /// Builds a cow with explicit state. Calories and weight are floored at zero.
    #[must_use]
    pub fn new(id: Uuid, breed: Breed, age: u32, sex: Sex, calories: f64, weight: f64) -> Self {
        Self {
            id,
            breed,
            age,
            sex,
            calories: calories.max(0.0),
            weight: weight.max(0.0),
        }
    }

    fn profile(&self) -> &'static BreedProfile {
        self.breed.profile()
    }

    fn draw<R: Rng>(breed: Breed, age: u32, rng: &mut R) -> Self {
        let p = breed.profile();
        let id = Uuid::from_u128(rng.gen::<u128>());
        let sex = Sex::ALL[rng.gen_range(0..Sex::ALL.len())];
        let calories = rng.gen_range(p.min_caloric_bound..=p.max_caloric_bound);
        let weight = rng.gen_range(p.min_weight..=p.max_weight);
        Self::new(id, breed, age, sex, calories, weight)
    }
}

/// One draw from `N(mean, mean / 3)`, clamped at zero.
fn non_negative_normal<R: Rng>(mean: f64, rng: &mut R) -> f64 {
    match Normal::new(mean, mean / 3.0) {
        Ok(normal) => normal.sample(rng).max(0.0),
        Err(_) => mean.max(0.0),
    }
}

impl Organism for Cow {
    fn generate<R: Rng>(breed: Breed, rng: &mut R) -> Self {
        let p = breed.profile();
        let age = rng.gen_range(p.min_age..=p.max_age);
        Self::draw(breed, age, rng)
    }

    fn newborn<R: Rng>(breed: Breed, rng: &mut R) -> Self {
        Self::draw(breed, 0, rng)
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn breed(&self) -> Breed {
        self.breed
    }

    fn age(&self) -> u32 {
        self.age
    }

    fn sex(&self) -> Sex {
        self.sex
    }

    fn calories(&self) -> f64 {
        self.calories
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn cause_of_death(&self) -> CauseOfDeath {
        let p = self.profile();
        if self.age > p.max_age {
            CauseOfDeath::OldAge
        } else if self.weight > p.max_weight {
            CauseOfDeath::Overweight
        } else if self.weight < p.min_adult_weight && self.age >= p.adult_age {
            CauseOfDeath::Malnourished
        } else {
            CauseOfDeath::NotDead
        }
    }

    fn expend_calories<R: Rng>(&mut self, rng: &mut R) -> f64 {
        let p = self.profile();
        let mut expended = rng.gen_range(p.min_caloric_bound..=p.max_caloric_bound);
        if self.sex == Sex::Male {
            expended *= p.male_expenditure_factor;
        }
        expended += non_negative_normal(p.caloric_midpoint() * p.age_expenditure_fraction, rng);

        self.calories = (self.calories - expended).max(0.0);

        // Weight loss scales with how far the reserve fell below the band.
        if self.calories < p.min_caloric_bound {
            let deficit = (p.min_caloric_bound - self.calories) / p.min_caloric_bound;
            self.weight = (self.weight - self.weight * deficit).max(0.0);
        }

        expended
    }

    fn caloric_intake(&mut self, kcal: f64) -> f64 {
        let p = self.profile();
        let before = self.calories;
        self.calories = (self.calories + kcal).max(0.0);

        // Anything above the band turns into fat instead of reserve.
        if self.calories > p.max_caloric_bound {
            let surplus = (self.calories - p.max_caloric_bound) / p.max_caloric_bound;
            self.weight += self.weight * surplus;
            self.calories = p.max_caloric_bound;
        }

        self.calories - before
    }

    fn milk_yield<R: Rng>(&self, rng: &mut R) -> f64 {
        if self.sex == Sex::Male || !self.is_adult() {
            return 0.0;
        }
        let p = self.profile();
        let milk = non_negative_normal(p.average_milk_production, rng);
        (milk * (1.0 + self.weight / p.max_weight)).max(0.0)
    }

    fn methane_yield(&self) -> f64 {
        let p = self.profile();
        p.max_methane_production * (self.calories / p.max_caloric_bound)
    }

    fn emotion<R: Rng>(&self, rng: &mut R) -> Emotion {
        Emotion::ALL[rng.gen_range(0..Emotion::ALL.len())]
    }

    fn should_reproduce<R: Rng>(a: &Self, b: &Self, rng: &mut R) -> bool {
        if std::ptr::eq(a, b) || a.id == b.id {
            return false;
        }
        if !a.is_adult() || !b.is_adult() || a.sex == b.sex {
            return false;
        }
        let chance = a.emotion(rng).temperament().willingness()
            * b.emotion(rng).temperament().willingness();
        rng.gen::<f64>() < chance
    }

    fn increment_age(&mut self) {
        self.age += 1;
    }
}
