//! Domain error model.

use thiserror::Error;

/// Result type used across the analytics crates.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// The analytics operations themselves are total and never return this; it is
/// reserved for the fallible edges (decoding caller input, validating
/// configuration).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input, inconsistent settings).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. empty string).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
