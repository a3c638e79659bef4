//! Plain data shared by the cowsim engine, reporting layer and command line.

pub mod data;

pub use data::entity::{BodyState, CauseOfDeath, Emotion, Sex, Temperament};
pub use data::events::LiveEvent;
