//! Core data structures for the cowsim simulation.

pub mod entity;
pub mod events;
