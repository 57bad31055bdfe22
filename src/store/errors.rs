//! # Store Errors
//!
//! Error types for the account store and record codec.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Account store and codec errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Uniqueness violation on insert. Surfaced as a client-visible
    /// conflict; the store performs no write.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// Lookup miss. An expected outcome, not an exceptional abort.
    #[error("record not found")]
    NotFound,

    /// Codec load/save failure. Fatal to the triggering operation;
    /// no record is considered created.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Storage(format!("record JSON error: {}", e))
    }
}
