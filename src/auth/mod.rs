//! Credential hashing for libroster
//!
//! One-way salted hashing of registration secrets and verification of
//! login attempts. Logically independent of the account store; callers
//! compose the two.

pub mod crypto;
pub mod errors;

pub use crypto::{hash_password, verify_password, PasswordPolicy};
pub use errors::{AuthError, AuthResult};
