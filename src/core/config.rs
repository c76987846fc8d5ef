//! core::config
//!
//! Configuration schema and loading.
//!
//! # Locations
//!
//! Searched in order (first hit wins):
//! 1. `$ROWFORGE_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/rowforge/config.toml`
//! 3. `~/.rowforge/config.toml`
//!
//! A missing config file is not an error; defaults apply. CLI flags always
//! take precedence over file values (handled in the CLI layer).
//!
//! # Validation
//!
//! Values are validated after parsing: the locale must be a supported tag.
//! Unknown fields are rejected so typos fail loudly.
//!
//! # Example
//!
//! ```toml
//! locale = "ko"
//! clipboard = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::Locale;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Global configuration (user scope).
///
/// All fields are optional; absence means "use the built-in default".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Display locale tag ("en", "ko")
    pub locale: Option<String>,

    /// Whether the copy command is enabled
    pub clipboard: Option<bool>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(locale) = &self.locale {
            locale.parse::<Locale>().map_err(|e| {
                ConfigError::InvalidValue(format!("invalid locale: {}", e))
            })?;
        }
        Ok(())
    }

    /// Load configuration from the standard locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read,
    /// parsed, or validated. A missing file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_path() {
            Some(path) => {
                let config = Self::read_from(&path)?;
                config.validate()?;
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    /// Find the first existing config file in the search order.
    fn find_config_path() -> Option<PathBuf> {
        // 1. $ROWFORGE_CONFIG
        if let Ok(path) = std::env::var("ROWFORGE_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. $XDG_CONFIG_HOME/rowforge/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("rowforge/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. ~/.rowforge/config.toml
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".rowforge/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        None
    }

    /// Read and parse one config file.
    fn read_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Resolve the effective locale (default: English).
    pub fn resolved_locale(&self) -> Locale {
        self.locale
            .as_deref()
            .and_then(|tag| tag.parse().ok())
            .unwrap_or_default()
    }
}
