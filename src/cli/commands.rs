//! CLI command implementations
//!
//! `init` creates the directory layout and a default config file;
//! `serve` loads the config, wires the service and enters the serving
//! loop. All subsystem construction happens here, not in main.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::auth::PasswordPolicy;
use crate::http_server::{self, AppState};
use crate::roster::RosterService;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the per-kind record files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Directory holding the rendered listing artifacts
    #[serde(default = "default_views_dir")]
    pub views_dir: PathBuf,

    /// Listen address for the HTTP API
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Minimum registration-secret length
    #[serde(default = "default_min_password_len")]
    pub min_password_len: usize,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}
fn default_views_dir() -> PathBuf {
    PathBuf::from("./views")
}
fn default_bind_addr() -> String {
    "127.0.0.1:7474".to_string()
}
fn default_min_password_len() -> usize {
    6
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            views_dir: default_views_dir(),
            bind_addr: default_bind_addr(),
            min_password_len: default_min_password_len(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CliError::config(format!("failed to read {}: {}", path.display(), e)))?;

        let config: Config = serde_json::from_str(&contents)
            .map_err(|e| CliError::config(format!("invalid config JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.min_password_len == 0 {
            return Err(CliError::config("min_password_len must be > 0"));
        }
        self.parse_bind_addr()?;
        Ok(())
    }

    fn parse_bind_addr(&self) -> CliResult<SocketAddr> {
        self.bind_addr
            .parse()
            .map_err(|_| CliError::config(format!("invalid bind_addr: '{}'", self.bind_addr)))
    }
}

/// Run the CLI
pub fn run() -> CliResult<()> {
    match Cli::parse_args().command {
        Command::Init { config } => init(&config),
        Command::Serve { config } => serve(&config),
    }
}

/// Create the directory layout and write a default config file
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::AlreadyInitialized(
            config_path.display().to_string(),
        ));
    }

    let config = Config::default();
    fs::create_dir_all(&config.data_dir)?;
    fs::create_dir_all(&config.views_dir)?;
    fs::write(
        config_path,
        serde_json::to_string_pretty(&config)
            .map_err(|e| CliError::config(e.to_string()))?,
    )?;

    println!("initialized {}", config_path.display());
    Ok(())
}

/// Load the config, wire the service and serve until failure
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let addr = config.parse_bind_addr()?;

    let state = Arc::new(AppState {
        service: RosterService::new(&config.data_dir, &config.views_dir),
        password_policy: PasswordPolicy {
            min_length: config.min_password_len,
        },
    });

    let runtime = tokio::runtime::Runtime::new().map_err(|e| CliError::Boot(e.to_string()))?;
    runtime
        .block_on(http_server::serve(state, addr))
        .map_err(|e| CliError::Boot(e.to_string()))
}
