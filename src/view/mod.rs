//! Derived-view subsystem for libroster
//!
//! Renders each kind's record set into a human-readable HTML listing and
//! keeps those artifacts in sync with the store after every insert.
//!
//! # Invariants Enforced
//!
//! - Artifacts list entries in record insertion order
//! - The credential hash never appears in rendered output
//! - User-supplied text is escaped against structural injection
//! - A failed regeneration leaves the artifact stale; it never fails or
//!   rolls back the insert that triggered it

mod errors;
mod render;
mod sync;

pub use errors::{ViewError, ViewResult};
pub use render::{escape_html, render_librarians, render_students};
pub use sync::ViewSynchronizer;
