//! Portal error types.

use thiserror::Error;

/// Errors that can occur at the portal's fallible edges.
///
/// The pure view-derivation functions (filtering, pagination, totals) are
/// total over their inputs and never return these.
#[derive(Error, Debug)]
pub enum PortalError {
    /// Entity not found.
    #[error("{kind} not found: {id}")]
    EntityNotFound { kind: &'static str, id: String },

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for PortalError {
    fn from(e: serde_json::Error) -> Self {
        PortalError::Serialization(e.to_string())
    }
}
