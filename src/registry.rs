//! Names the command line accepts for environments and organisms.

use cowsim_core::{Breed, Environment};
use std::fmt;

/// Founders used when no organisms are requested.
pub const DEFAULT_POPULATION: i64 = 10;

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EnvironmentKind {
    #[default]
    #[value(name = "cowpen")]
    CowPen,
}

impl EnvironmentKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            EnvironmentKind::CowPen => Environment::NAME,
        }
    }
}

impl fmt::Display for EnvironmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Founder list for `kind` when the caller names no organisms.
#[must_use]
pub fn default_founders(kind: EnvironmentKind) -> Vec<(String, i64)> {
    match kind {
        EnvironmentKind::CowPen => vec![(Breed::PurpleAngus.name().to_string(), DEFAULT_POPULATION)],
    }
}

/// Display names of every organism kind, for help text.
#[must_use]
pub fn organism_names() -> Vec<&'static str> {
    Breed::ALL.iter().map(|b| b.name()).collect()
}
