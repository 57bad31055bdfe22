//! # Auth Errors

use thiserror::Error;

/// Result type for credential operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Credential hashing and verification errors
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// Key miss or secret mismatch. The two cases are deliberately
    /// indistinguishable to the caller.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Hashing the secret failed
    #[error("password hashing failed")]
    HashingFailed,

    /// Secret does not meet the configured policy
    #[error("password does not meet requirements: {0}")]
    WeakPassword(String),
}
