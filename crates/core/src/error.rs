//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures (bad input, missing
/// references, broken transactions). Attribute-name rejection by the category
/// registry is deliberately *not* here: `Product::add_attribute` reports it as
/// a boolean so the caller decides whether it is fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Caller-supplied data failed validation (non-positive quantity,
    /// missing/invalid price, unknown attribute selection, bad currency).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A referenced product/order/category does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The persistence transaction could not run to completion. The store
    /// rolls back before this surfaces; nothing is partially applied.
    #[error("transaction failed: {0}")]
    Transaction(String),
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn transaction(msg: impl Into<String>) -> Self {
        Self::Transaction(msg.into())
    }
}
