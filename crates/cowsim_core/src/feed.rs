//! Daily feed rationing.
//!
//! A [`FeedAllocator`] holds one day's servings for the whole pen. Each animal
//! is entitled to a share of the servings proportional to its share of the
//! pen's caloric reserve, rounded up. Animals are served in the order they are
//! presented, so late arrivals go short once the budget runs out.

use crate::breed::normalize_name;
use crate::error::SimError;
use crate::lifecycle::Organism;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Feed varieties a pen can be stocked with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FeedKind {
    #[default]
    OrangeGrass,
}

impl FeedKind {
    pub const ALL: [FeedKind; 1] = [FeedKind::OrangeGrass];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FeedKind::OrangeGrass => "Orange Grass",
        }
    }

    /// Kilocalories in one serving.
    #[must_use]
    pub fn calories_per_serving(self) -> f64 {
        match self {
            FeedKind::OrangeGrass => 7000.0,
        }
    }

    #[must_use]
    pub fn price_per_serving(self) -> f64 {
        match self {
            FeedKind::OrangeGrass => 2.5,
        }
    }
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FeedKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        FeedKind::ALL
            .into_iter()
            .find(|kind| normalize_name(kind.name()) == wanted)
            .ok_or_else(|| SimError::UnknownFeed(s.to_string()))
    }
}

/// One day's feed for a set of animals.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedAllocator {
    kind: FeedKind,
    initial_servings: u32,
    remaining_servings: u32,
    total_entity_calories: f64,
}

impl FeedAllocator {
    /// Stocks `servings` of `kind` for the given animals.
    ///
    /// The animals' combined caloric reserve is captured here and used for
    /// every entitlement computed afterwards.
    pub fn new<'a, O, I>(kind: FeedKind, servings: u32, entities: I) -> Self
    where
        O: Organism + 'a,
        I: IntoIterator<Item = &'a O>,
    {
        let total_entity_calories = entities.into_iter().map(Organism::calories).sum();
        Self {
            kind,
            initial_servings: servings,
            remaining_servings: servings,
            total_entity_calories,
        }
    }

    #[must_use]
    pub fn kind(&self) -> FeedKind {
        self.kind
    }

    #[must_use]
    pub fn initial_serving_total(&self) -> u32 {
        self.initial_servings
    }

    #[must_use]
    pub fn current_serving_total(&self) -> u32 {
        self.remaining_servings
    }

    #[must_use]
    pub fn served(&self) -> u32 {
        self.initial_servings - self.remaining_servings
    }

    #[must_use]
    pub fn initial_total_calories(&self) -> f64 {
        self.initial_servings as f64 * self.kind.calories_per_serving()
    }

    #[must_use]
    pub fn current_total_calories(&self) -> f64 {
        self.remaining_servings as f64 * self.kind.calories_per_serving()
    }

    /// Cost of the servings handed out so far.
    #[must_use]
    pub fn price(&self) -> f64 {
        self.served() as f64 * self.kind.price_per_serving()
    }

    #[must_use]
    pub fn total_entity_calories(&self) -> f64 {
        self.total_entity_calories
    }

    /// Servings `entity` is entitled to before the budget is considered.
    #[must_use]
    pub fn entitlement<O: Organism>(&self, entity: &O) -> u32 {
        if self.total_entity_calories <= 0.0 {
            return 0;
        }
        let share = entity.calories() / self.total_entity_calories;
        (share * self.initial_servings as f64).ceil() as u32
    }

    /// Feeds `entity` and returns the number of servings it received.
    pub fn feed<O: Organism>(&mut self, entity: &mut O) -> u32 {
        if self.total_entity_calories <= 0.0 {
            return 0;
        }
        let servings = self.entitlement(entity).min(self.remaining_servings);
        self.remaining_servings -= servings;
        entity.caloric_intake(servings as f64 * self.kind.calories_per_serving());
        servings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breed::Breed;
    use crate::lifecycle::Cow;
    use cowsim_data::Sex;
    use uuid::Uuid;

    fn bull(age: u32, calories: f64, weight: f64) -> Cow {
        Cow::new(Uuid::new_v4(), Breed::PurpleAngus, age, Sex::Male, calories, weight)
    }

    #[test]
    fn test_constructor() {
        let herd: Vec<Cow> = (0..5).map(|_| bull(100, 1000.0, 1000.0)).collect();
        let grass = FeedAllocator::new(FeedKind::OrangeGrass, 20, &herd);
        assert_eq!(grass.initial_serving_total(), 20);
        assert_eq!(grass.current_serving_total(), 20);
        assert_eq!(grass.total_entity_calories(), 5000.0);
        assert_eq!(grass.initial_total_calories(), 140000.0);
        assert_eq!(grass.price(), 0.0);
    }

    #[test]
    fn test_feed_first_come_first_served() {
        let mut herd = vec![
            bull(100, 6000.0, 1000.0),
            bull(200, 12000.0, 2000.0),
            bull(300, 15000.0, 3000.0),
            bull(400, 24000.0, 4000.0),
        ];
        let mut grass = FeedAllocator::new(FeedKind::OrangeGrass, 20, &herd);

        let before = herd[0].calories();
        assert_eq!(grass.feed(&mut herd[0]), 3);
        assert_eq!(grass.current_serving_total(), 17);
        assert_eq!(herd[0].calories() - before, 3.0 * 7000.0);

        assert_eq!(grass.feed(&mut herd[1]), 5);
        assert_eq!(grass.feed(&mut herd[2]), 6);
        assert_eq!(grass.feed(&mut herd[3]), 6);
        assert_eq!(grass.current_serving_total(), 0);
        assert_eq!(grass.current_total_calories(), 0.0);
        assert_eq!(grass.price(), 20.0 * 2.5);
    }

    #[test]
    fn test_entitlement_ignores_remaining_budget() {
        let herd = vec![bull(100, 24000.0, 1000.0), bull(100, 33000.0, 1000.0)];
        let grass = FeedAllocator::new(FeedKind::OrangeGrass, 20, &herd);
        assert_eq!(grass.entitlement(&herd[0]), 9);
    }

    #[test]
    fn test_starving_pen_gets_nothing() {
        let mut herd = vec![bull(100, 0.0, 1000.0), bull(100, 0.0, 1000.0)];
        let mut grass = FeedAllocator::new(FeedKind::OrangeGrass, 20, &herd);
        assert_eq!(grass.feed(&mut herd[0]), 0);
        assert_eq!(grass.current_serving_total(), 20);
        assert_eq!(herd[0].calories(), 0.0);
    }

    #[test]
    fn test_exhausted_budget_serves_zero() {
        let mut herd = vec![bull(100, 10000.0, 1000.0), bull(100, 10000.0, 1000.0)];
        let mut grass = FeedAllocator::new(FeedKind::OrangeGrass, 1, &herd);
        assert_eq!(grass.feed(&mut herd[0]), 1);
        assert_eq!(grass.feed(&mut herd[1]), 0);
        assert_eq!(herd[1].calories(), 10000.0);
    }

    #[test]
    fn test_feed_kind_parsing() {
        assert_eq!("orange-grass".parse::<FeedKind>(), Ok(FeedKind::OrangeGrass));
        assert!(matches!(
            "hay".parse::<FeedKind>(),
            Err(SimError::UnknownFeed(_))
        ));
    }
}
