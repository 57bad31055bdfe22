//! # View Errors

use thiserror::Error;

/// Result type for view regeneration
pub type ViewResult<T> = Result<T, ViewError>;

/// View regeneration errors.
///
/// These are isolated from the account store: a failed regeneration leaves
/// the artifact stale but never rolls back or fails the triggering insert.
#[derive(Debug, Clone, Error)]
pub enum ViewError {
    #[error("failed to write view artifact: {0}")]
    Write(String),
}

impl From<std::io::Error> for ViewError {
    fn from(e: std::io::Error) -> Self {
        ViewError::Write(e.to_string())
    }
}
