//! Domain-level errors.
//!
//! Raised by the pure rules in this crate; the web layer decides how each
//! one is shown.

use thiserror::Error;

/// Business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input that can never be served, such as a malformed page number
    #[error("Validation error: {0}")]
    Validation(String),

    /// A record with the same unique key already exists
    #[error("{0} already exists")]
    Conflict(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    /// Create a conflict error for the named entity
    pub fn conflict(entity: impl Into<String>) -> Self {
        DomainError::Conflict(entity.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
