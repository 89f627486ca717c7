//! Report configuration.
//!
//! Settings live in TOML at `~/.config/newslog/config.toml` (or the XDG
//! equivalent). Every field is optional and every field can be overridden on
//! the command line; a missing file parses as the defaults.
//!
//! # Example Configuration
//!
//! ```toml
//! database = "/var/lib/news/news.db"
//! output = "/var/spool/reports/logs-analysis.txt"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading the report configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Root configuration for a report run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReportConfig {
    /// Path to the news SQLite database.
    #[serde(default)]
    pub database: Option<PathBuf>,

    /// Where to write the report; stdout when unset.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl ReportConfig {
    /// Load configuration from the default location.
    ///
    /// Returns the defaults if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path.
    ///
    /// Uses XDG conventions:
    /// - Primary: `$XDG_CONFIG_HOME/newslog/config.toml`
    /// - Fallback: platform config dir (e.g. `~/.config/newslog/config.toml`)
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        // Respect XDG_CONFIG_HOME first (important for testing and Linux users)
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return Ok(PathBuf::from(xdg_config)
                .join("newslog")
                .join("config.toml"));
        }

        dirs::config_dir()
            .map(|p| p.join("newslog").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Reject values that could never work at run time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.as_deref().is_some_and(|p| p.as_os_str().is_empty()) {
            return Err(ConfigError::Validation(
                "database path cannot be empty".into(),
            ));
        }
        if self.output.as_deref().is_some_and(|p| p.as_os_str().is_empty()) {
            return Err(ConfigError::Validation(
                "output path cannot be empty".into(),
            ));
        }
        Ok(())
    }
}
