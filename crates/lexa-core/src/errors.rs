//! Cross-cutting error types for Lexa.
//!
//! Transport errors live in `lexa-api`; this module only covers failures that
//! can be decided locally, before any request leaves the process.

use thiserror::Error;

/// Errors raised by the local rules in `lexa-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} {id} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        id: String,
        from: String,
        to: String,
    },

    /// The current viewer may not see or act on the resource.
    #[error("Access denied: {0}")]
    Forbidden(String),

    /// Input failed client-side validation.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }
}
