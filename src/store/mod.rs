//! Account store subsystem for libroster
//!
//! The store holds the canonical persistent state of all accounts: one
//! ordered JSON record sequence per kind, whole-sequence reads and writes.
//!
//! # Invariants Enforced
//!
//! - Record ids are pairwise distinct and never reused
//! - Librarian usernames are unique case-insensitively
//! - Student `(name, grade, section)` triples are unique (grade exact,
//!   name/section case-insensitive)
//! - Records are never mutated or removed after insert

mod account_store;
mod codec;
mod errors;
mod record;

pub use account_store::AccountStore;
pub use codec::RecordCodec;
pub use errors::{StoreError, StoreResult};
pub use record::{
    AccountKind, AccountRecord, Librarian, LibrarianDraft, LibrarianKey, Student, StudentDraft,
    StudentKey,
};
