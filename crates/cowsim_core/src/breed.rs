//! Breed registry and the numeric profile each breed supplies.

use crate::error::SimError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric bounds and coefficients that drive a breed's biology.
#[derive(Debug, Clone, PartialEq)]
pub struct BreedProfile {
    /// Youngest founder age, in days.
    pub min_age: u32,
    /// Oldest viable age, in days. Older animals die of old age.
    pub max_age: u32,
    /// Age at which an animal may breed and produce milk.
    pub adult_age: u32,
    /// Lower edge of the healthy caloric band, in kcal.
    pub min_caloric_bound: f64,
    /// Upper edge of the healthy caloric band, in kcal.
    pub max_caloric_bound: f64,
    /// Lightest founder weight, in kg.
    pub min_weight: f64,
    /// Heaviest viable weight, in kg.
    pub max_weight: f64,
    /// Adults below this weight are malnourished.
    pub min_adult_weight: f64,
    /// Mean daily milk yield of a lactating cow, in liters.
    pub average_milk_production: f64,
    /// Methane emitted per day at a full caloric reserve, in kg.
    pub max_methane_production: f64,
    pub male_expenditure_factor: f64,
    /// Mean of the age-driven expenditure term as a fraction of the band midpoint.
    pub age_expenditure_fraction: f64,
}

impl BreedProfile {
    #[must_use]
    pub fn caloric_midpoint(&self) -> f64 {
        (self.min_caloric_bound + self.max_caloric_bound) / 2.0
    }
}

const PURPLE_ANGUS: BreedProfile = BreedProfile {
    min_age: 0,
    max_age: 25 * 365,
    adult_age: 5 * 365,
    min_caloric_bound: 5000.0,
    max_caloric_bound: 30000.0,
    min_weight: 65.0 * 2.2,
    max_weight: 3000.0 * 2.2,
    min_adult_weight: 800.0 * 2.2,
    average_milk_production: 60.0,
    max_methane_production: 0.5,
    male_expenditure_factor: 1.15,
    age_expenditure_fraction: 0.2,
};

/// Organism kinds a pen can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Breed {
    PurpleAngus,
}

impl Breed {
    pub const ALL: [Breed; 1] = [Breed::PurpleAngus];

    /// Display name; also the cohort name in a pen.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Breed::PurpleAngus => "Purple Angus",
        }
    }

    /// File-name friendly form of [`Breed::name`].
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Breed::PurpleAngus => "purple_angus",
        }
    }

    #[must_use]
    pub fn profile(self) -> &'static BreedProfile {
        match self {
            Breed::PurpleAngus => &PURPLE_ANGUS,
        }
    }
}

impl fmt::Display for Breed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercases and folds `-`, `_` and runs of whitespace into single spaces.
pub(crate) fn normalize_name(name: &str) -> String {
    name.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

impl FromStr for Breed {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_name(s);
        Breed::ALL
            .into_iter()
            .find(|breed| normalize_name(breed.name()) == wanted)
            .ok_or_else(|| SimError::UnknownBreed(s.to_string()))
    }
}
