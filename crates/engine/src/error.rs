//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`InvalidExpense`] thrown when an expense record is malformed.
//! - [`KeyNotFound`] thrown when a trip is not found.
//! - [`ComputationFailure`] thrown when settlement arithmetic overflows.
//!
//!  [`InvalidExpense`]: EngineError::InvalidExpense
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`ComputationFailure`]: EngineError::ComputationFailure
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid expense: {0}")]
    InvalidExpense(String),
    #[error("Invalid trip: {0}")]
    InvalidTrip(String),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
    #[error("Settlement failed: {0}")]
    ComputationFailure(String),
}

impl EngineError {
    /// Returns `true` when the error is caused by user input rather than an
    /// internal fault.
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::ComputationFailure(_))
    }
}
