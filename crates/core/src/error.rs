//! Shared error model.

use thiserror::Error;

/// Result type used across the foundation layer.
pub type CoreResult<T> = Result<T, CoreError>;

/// Foundation-level error.
///
/// Keep this focused on deterministic failures (validation, parsing).
/// Transport and session concerns belong to the gateway layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl CoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
