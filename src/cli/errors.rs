//! CLI-specific error types
//!
//! All CLI errors are fatal; main exits non-zero on any of them.

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("config error: {0}")]
    Config(String),

    /// Config file already present at the init target
    #[error("already initialized: {0}")]
    AlreadyInitialized(String),

    /// Server failed to boot or serve
    #[error("boot failed: {0}")]
    Boot(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn config(msg: impl Into<String>) -> Self {
        CliError::Config(msg.into())
    }
}
