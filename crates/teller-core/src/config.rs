//! Configuration management for Teller.
//!
//! Loads configuration from ${TELLER_HOME}/config.toml with sensible
//! defaults; a missing file is not an error.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::api;

/// Environment variable overriding the configured service base URL.
pub const BASE_URL_ENV: &str = "TELLER_API_BASE_URL";

pub mod paths {
    //! Path resolution for Teller configuration and data directories.
    //!
    //! TELLER_HOME resolution order:
    //! 1. TELLER_HOME environment variable (if set)
    //! 2. ~/.config/teller (default)

    use std::path::PathBuf;

    /// Returns the Teller home directory.
    pub fn teller_home() -> PathBuf {
        if let Ok(home) = std::env::var("TELLER_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("teller"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        teller_home().join("config.toml")
    }

    /// Returns the directory TUI-mode log files are written to.
    pub fn log_dir() -> PathBuf {
        teller_home().join("logs")
    }
}

/// Returns the default config template with comments.
///
/// Embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the banking service.
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: api::DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the commented default template to `path`.
    ///
    /// # Errors
    /// Returns an error if a config file already exists there.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}

/// Resolves the service base URL from, in order: a command-line override,
/// the [`BASE_URL_ENV`] environment variable, and the config file.
pub fn resolve_base_url(flag: Option<&str>, env: Option<&str>, config: &Config) -> String {
    flag.or(env)
        .unwrap_or(&config.api_base_url)
        .trim_end_matches('/')
        .to_string()
}
