//! CLI module for libroster
//!
//! Provides the command-line interface:
//! - init: create directory structure and default config
//! - serve: boot the service and enter the serving loop

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, serve, Config};
pub use errors::{CliError, CliResult};
