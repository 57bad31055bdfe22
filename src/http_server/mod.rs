//! HTTP API layer for libroster
//!
//! External collaborator of the account core: translates requests into
//! roster-service calls, validates field shape at the edge, and shapes
//! sanitized responses.

pub mod routes;
pub mod server;
pub mod validate;

pub use routes::{AppState, ErrorResponse};
pub use server::{build_router, serve};
