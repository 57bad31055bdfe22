//! Roster service for libroster
//!
//! Composes the account stores, the credential hasher and the view
//! synchronizer into the register/login/lookup surface the API layer
//! consumes.

mod errors;
mod profile;
mod service;

pub use errors::{RosterError, RosterResult};
pub use profile::{LibrarianProfile, StudentProfile};
pub use service::{RegisterLibrarian, RegisterStudent, RosterService};
