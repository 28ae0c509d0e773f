//! Configuration loading
//!
//! Every setting is resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (`FYYUR_HOST`, `FYYUR_PORT`, `FYYUR_DATABASE`, `FYYUR_LOG_LEVEL`)
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing or unreadable config file is never fatal: a warning is logged
//! and resolution continues with the next tier.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const ENV_HOST: &str = "FYYUR_HOST";
pub const ENV_PORT: &str = "FYYUR_PORT";
pub const ENV_DATABASE: &str = "FYYUR_DATABASE";
pub const ENV_LOG_LEVEL: &str = "FYYUR_LOG_LEVEL";
pub const ENV_CONFIG: &str = "FYYUR_CONFIG";

const DATABASE_FILE_NAME: &str = "fyyur.db";

/// Compiled defaults used when nothing else provides a value
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub log_level: String,
}

impl CompiledDefaults {
    pub fn for_current_platform() -> Self {
        // ~/.local/share/fyyur on Linux, ~/Library/Application Support/fyyur on macOS
        let data_dir = dirs::data_local_dir()
            .map(|d| d.join("fyyur"))
            .unwrap_or_else(|| PathBuf::from("./fyyur_data"));

        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            database_path: data_dir.join(DATABASE_FILE_NAME),
            log_level: "info".to_string(),
        }
    }
}

/// Contents of a `config.toml` file. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TomlConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// Parse a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<PathBuf>,
    pub log_level: Option<String>,
    pub config_file: Option<PathBuf>,
}

/// Fully resolved server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub log_level: String,
}

impl ServerConfig {
    /// Resolve configuration from CLI, environment, config file and defaults
    pub fn resolve(cli: &CliOverrides) -> Self {
        let file_config = locate_config_file(cli.config_file.as_deref())
            .and_then(|path| match TomlConfig::load(&path) {
                Ok(config) => Some(config),
                Err(e) => {
                    warn!("Ignoring config file: {}", e);
                    None
                }
            })
            .unwrap_or_default();

        Self::merge(cli, &file_config, CompiledDefaults::for_current_platform())
    }

    /// Merge the tiers without touching the filesystem
    pub fn merge(cli: &CliOverrides, file: &TomlConfig, defaults: CompiledDefaults) -> Self {
        let host = cli
            .host
            .clone()
            .or_else(|| env_string(ENV_HOST))
            .or_else(|| file.host.clone())
            .unwrap_or(defaults.host);

        let port = cli
            .port
            .or_else(env_port)
            .or(file.port)
            .unwrap_or(defaults.port);

        let database_path = cli
            .database
            .clone()
            .or_else(|| env_string(ENV_DATABASE).map(PathBuf::from))
            .or_else(|| file.database.clone())
            .unwrap_or(defaults.database_path);

        let log_level = cli
            .log_level
            .clone()
            .or_else(|| env_string(ENV_LOG_LEVEL))
            .or_else(|| file.log_level.clone())
            .unwrap_or(defaults.log_level);

        Self {
            host,
            port,
            database_path,
            log_level,
        }
    }

    /// `host:port` string for binding the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn env_port() -> Option<u16> {
    let raw = env_string(ENV_PORT)?;
    match raw.parse() {
        Ok(port) => Some(port),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a valid port", ENV_PORT, raw);
            None
        }
    }
}

/// Find the config file to read, if any
///
/// Explicit path (CLI or `FYYUR_CONFIG`) first, then
/// `~/.config/fyyur/config.toml`, then `/etc/fyyur/config.toml`.
fn locate_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = env_string(ENV_CONFIG) {
        return Some(PathBuf::from(path));
    }

    let user_config = dirs::config_dir().map(|d| d.join("fyyur").join("config.toml"));
    if let Some(path) = user_config {
        if path.exists() {
            return Some(path);
        }
    }

    let system_config = PathBuf::from("/etc/fyyur/config.toml");
    if system_config.exists() {
        return Some(system_config);
    }

    None
}
