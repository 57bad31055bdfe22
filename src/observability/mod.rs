//! Observability subsystem for libroster
//!
//! Provides structured JSON logging for account and view-sync events.
//!
//! # Principles
//!
//! 1. Logs are synchronous, one line per event
//! 2. Deterministic field ordering
//! 3. Secrets and credential digests are never logged

mod logger;

pub use logger::{Logger, Severity};
