//! libroster - a small, self-hostable library account service
//!
//! Registers and authenticates librarian and student accounts, persists
//! each kind as a flat JSON record set, and keeps a rendered HTML listing
//! of each set in sync after every mutation.

pub mod auth;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod roster;
pub mod store;
pub mod view;
