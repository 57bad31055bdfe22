//! CLI argument definitions using clap
//!
//! Commands:
//! - libroster init --config <path>
//! - libroster serve --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// libroster - a small, self-hostable library account service
#[derive(Parser, Debug)]
#[command(name = "libroster")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the data/views directories and a default configuration
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./libroster.json")]
        config: PathBuf,
    },

    /// Start the account service
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./libroster.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
