//! Error types for cowsim_core.
//!
//! Only environment construction can fail. Once a pen exists every biological
//! computation is total over its inputs.

use thiserror::Error;

/// Main error type for engine operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// An organism kind that is not in the breed registry
    #[error("Unknown organism kind: {0}")]
    UnknownBreed(String),

    /// A feed kind that is not in the feed registry
    #[error("Unknown feed kind: {0}")]
    UnknownFeed(String),

    /// Founder count of zero or less
    #[error("Quantity for {breed} must be positive, got {quantity}")]
    NonPositiveQuantity { breed: String, quantity: i64 },

    /// Empty founder list
    #[error("At least one founder cohort is required")]
    NoFounders,

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
