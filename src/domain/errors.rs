//! Domain errors for the keycheck system.

use thiserror::Error;

/// Domain-level errors that can occur while collecting and checking keys.
///
/// Per-key validation failures are deliberately *not* errors: they are
/// classified into a [`crate::domain::models::KeyStatus`] and reported as
/// part of the batch result.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Input terminated before any key was read")]
    InputTerminated,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

/// Convenience alias used throughout the domain and application layers.
pub type DomainResult<T> = Result<T, DomainError>;
