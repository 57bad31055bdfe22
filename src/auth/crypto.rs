//! # Credential Hashing
//!
//! Salted one-way hashing of registration secrets, and verification of a
//! plaintext secret against a stored digest.
//!
//! Both operations are deliberately slow (tens of milliseconds at the
//! default cost); callers must treat them as expensive and must never log
//! the secret or the digest.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use super::errors::{AuthError, AuthResult};

/// Minimum shape a registration secret must satisfy.
///
/// Enforced by the API layer before the core is invoked; the store itself
/// assumes shape-valid input.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self { min_length: 6 }
    }
}

impl PasswordPolicy {
    /// Validate a secret against this policy
    pub fn validate(&self, password: &str) -> AuthResult<()> {
        if password.chars().count() < self.min_length {
            return Err(AuthError::WeakPassword(format!(
                "must be at least {} characters",
                self.min_length
            )));
        }
        Ok(())
    }
}

/// Hash a secret with a fresh random salt
pub fn hash_password(password: &str) -> AuthResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::HashingFailed)
}

/// Verify a plaintext secret against a stored digest
pub fn verify_password(password: &str, hash: &str) -> AuthResult<bool> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("Secret1").unwrap();
        assert_ne!(hash, "Secret1");
        assert!(verify_password("Secret1", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn test_same_secret_hashes_differently() {
        let h1 = hash_password("same").unwrap();
        let h2 = hash_password("same").unwrap();
        assert_ne!(h1, h2);
        assert!(verify_password("same", &h1).unwrap());
        assert!(verify_password("same", &h2).unwrap());
    }

    #[test]
    fn test_policy_minimum_length() {
        let policy = PasswordPolicy { min_length: 6 };
        assert!(policy.validate("short").is_err());
        assert!(policy.validate("longenough").is_ok());
    }
}
