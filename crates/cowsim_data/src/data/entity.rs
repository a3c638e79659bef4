use serde::{Deserialize, Serialize};
use std::fmt;

/// Biological sex of an organism. Fixed for its whole life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];
}

/// Emotional state of a cow.
///
/// Emotion is never stored on the animal: every query draws a fresh value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emotion {
    Confused,
    Content,
    Curious,
    Happy,
    Joyful,
    Melancholic,
    Upset,
}

impl Emotion {
    pub const ALL: [Emotion; 7] = [
        Emotion::Confused,
        Emotion::Content,
        Emotion::Curious,
        Emotion::Happy,
        Emotion::Joyful,
        Emotion::Melancholic,
        Emotion::Upset,
    ];

    #[must_use]
    pub fn temperament(self) -> Temperament {
        match self {
            Emotion::Content | Emotion::Happy | Emotion::Joyful => Temperament::Positive,
            Emotion::Confused | Emotion::Curious => Temperament::Neutral,
            Emotion::Melancholic | Emotion::Upset => Temperament::Negative,
        }
    }
}

/// Coarse classification of an [`Emotion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Temperament {
    Positive,
    Neutral,
    Negative,
}

impl Temperament {
    /// Probability that an animal in this mood agrees to mate.
    #[must_use]
    pub fn willingness(self) -> f64 {
        match self {
            Temperament::Positive => 1.0,
            Temperament::Neutral => 0.66,
            Temperament::Negative => 0.33,
        }
    }
}

/// Why an organism died, or [`CauseOfDeath::NotDead`] while it lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CauseOfDeath {
    NotDead,
    OldAge,
    Malnourished,
    Overweight,
}

impl CauseOfDeath {
    #[must_use]
    pub fn is_dead(self) -> bool {
        !matches!(self, CauseOfDeath::NotDead)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CauseOfDeath::NotDead => "not_dead",
            CauseOfDeath::OldAge => "old_age",
            CauseOfDeath::Malnourished => "malnourished",
            CauseOfDeath::Overweight => "overweight",
        }
    }
}

impl fmt::Display for CauseOfDeath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The mutable body fields of an organism, as recorded once per step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyState {
    /// Days lived.
    pub age: u32,
    /// Caloric reserve in kcal.
    pub calories: f64,
    /// Body mass in kg.
    pub weight: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_emotion_has_a_temperament() {
        let positive = Emotion::ALL
            .iter()
            .filter(|e| e.temperament() == Temperament::Positive)
            .count();
        let neutral = Emotion::ALL
            .iter()
            .filter(|e| e.temperament() == Temperament::Neutral)
            .count();
        let negative = Emotion::ALL
            .iter()
            .filter(|e| e.temperament() == Temperament::Negative)
            .count();
        assert_eq!((positive, neutral, negative), (3, 2, 2));
    }

    #[test]
    fn test_willingness_ordering() {
        assert!(Temperament::Positive.willingness() > Temperament::Neutral.willingness());
        assert!(Temperament::Neutral.willingness() > Temperament::Negative.willingness());
    }

    #[test]
    fn test_cause_of_death_serializes_snake_case() {
        let json = serde_json::to_string(&CauseOfDeath::OldAge).unwrap();
        assert_eq!(json, "\"old_age\"");
        assert!(!CauseOfDeath::NotDead.is_dead());
        assert!(CauseOfDeath::Overweight.is_dead());
    }
}
