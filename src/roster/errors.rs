//! # Roster Errors
//!
//! The caller-facing error taxonomy. `Duplicate`, `NotFound` and
//! `InvalidCredentials` are expected outcomes returned to the caller;
//! `Storage` aborts the operation before any record is considered created.

use thiserror::Error;

use crate::auth::AuthError;
use crate::store::StoreError;

/// Result type for roster operations
pub type RosterResult<T> = Result<T, RosterError>;

/// Errors surfaced by the roster service
#[derive(Debug, Clone, Error)]
pub enum RosterError {
    /// Uniqueness violation on register
    #[error("{0} already exists")]
    Duplicate(String),

    /// Lookup by id missed
    #[error("account not found")]
    NotFound,

    /// Login key miss or secret mismatch (indistinguishable by design)
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Request fields failed shape validation
    #[error("invalid request: {0}")]
    Validation(String),

    /// Record codec load/save failure
    #[error("storage failure: {0}")]
    Storage(String),

    /// Credential hashing failure
    #[error("password hashing failed")]
    Hashing,
}

impl RosterError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            RosterError::Duplicate(_) => 409,
            RosterError::NotFound => 404,
            RosterError::InvalidCredentials => 401,
            RosterError::Validation(_) => 400,
            RosterError::Storage(_) | RosterError::Hashing => 500,
        }
    }
}

impl From<StoreError> for RosterError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateKey(key) => RosterError::Duplicate(key),
            StoreError::NotFound => RosterError::NotFound,
            StoreError::Storage(msg) => RosterError::Storage(msg),
        }
    }
}

impl From<AuthError> for RosterError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::InvalidCredentials => RosterError::InvalidCredentials,
            AuthError::HashingFailed => RosterError::Hashing,
            AuthError::WeakPassword(msg) => RosterError::Validation(msg),
        }
    }
}
