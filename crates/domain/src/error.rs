//! Unified error types for the domain layer
//!
//! Every rejected builder operation reports one of these. Category mismatches
//! are never errors: extension mutators on a non-matching item are no-ops.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., duplicate or out-of-range indices)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The requested mutation conflicts with the item's current state
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Parse error (for vocabulary values and configuration)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for rejected operation arguments.
    ///
    /// Use this when the arguments of a mutation cannot be applied as given:
    /// - Index lists containing duplicate values
    /// - Indices outside the collection they address
    ///
    /// # Example
    /// ```
    /// use itemforge_domain::DomainError;
    ///
    /// let err = DomainError::validation("Index list cannot contain duplicate values");
    /// assert!(err.is_validation());
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations and configuration loaders when
    /// the input doesn't match any known variant or format.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Returns true for [`DomainError::Validation`]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true for [`DomainError::Conflict`]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
