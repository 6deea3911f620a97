//! Error model shared by the permission-matrix crates.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level failure.
///
/// Deterministic domain failures only; lookups that can legitimately miss
/// return `Option` instead of erroring, and infrastructure concerns wrap
/// their own error types closer to where they happen.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input broke a domain rule.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A guaranteed property of the system did not hold. Reaching this is
    /// a configuration or programming defect, never user input.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
