//! # Request-Shape Validation
//!
//! Field validation performed before the core service is invoked. The
//! store only enforces semantic invariants (uniqueness, id assignment);
//! minimum lengths and the password policy live here, at the edge.

use crate::auth::PasswordPolicy;
use crate::roster::{RegisterLibrarian, RegisterStudent, RosterError, RosterResult};

const MIN_USERNAME_LEN: usize = 3;

fn require_nonempty(field: &str, value: &str) -> RosterResult<()> {
    if value.trim().is_empty() {
        return Err(RosterError::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

fn check_password(policy: &PasswordPolicy, password: &str) -> RosterResult<()> {
    policy.validate(password).map_err(RosterError::from)
}

/// Validate a librarian registration request
pub fn register_librarian(policy: &PasswordPolicy, req: &RegisterLibrarian) -> RosterResult<()> {
    if req.username.trim().chars().count() < MIN_USERNAME_LEN {
        return Err(RosterError::Validation(format!(
            "username must be at least {} characters",
            MIN_USERNAME_LEN
        )));
    }
    require_nonempty("fullname", &req.fullname)?;
    check_password(policy, &req.password)
}

/// Validate a student registration request
pub fn register_student(policy: &PasswordPolicy, req: &RegisterStudent) -> RosterResult<()> {
    require_nonempty("name", &req.name)?;
    require_nonempty("grade", &req.grade)?;
    require_nonempty("section", &req.section)?;
    check_password(policy, &req.password)
}
