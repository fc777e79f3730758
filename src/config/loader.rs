use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::types::{AppConfig, MAX_COUNT_CHOICES};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file '{path}' does not exist")]
    NotFound { path: PathBuf },

    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl AppConfig {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/stateholder/config.toml` on Unix, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("stateholder").join("config.toml")
    }

    /// Loads configuration from the default location.
    ///
    /// A missing file yields `AppConfig::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path, which must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let choices = &self.count_choices;
        if choices.min > choices.max {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "count_choices.min ({}) must not exceed count_choices.max ({})",
                    choices.min, choices.max
                ),
            });
        }
        if choices.len() > MAX_COUNT_CHOICES {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "count_choices offers {} values, at most {} are allowed",
                    choices.len(),
                    MAX_COUNT_CHOICES
                ),
            });
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }
        if self.ui.snackbar_duration_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.snackbar_duration_ms must be greater than zero".to_string(),
            });
        }
        if self.ui.confirm_label.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "ui.confirm_label must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Render as TOML, as written in a config file.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
