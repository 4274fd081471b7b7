//! # shift-config
//!
//! Layered configuration loading for Shiftline using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SHIFT_*` prefix, `__` as separator)
//! 2. Project-level `.shiftline/config.toml`
//! 3. User-level `~/.config/shiftline/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SHIFT_DATABASE__PATH` -> `database.path` and
//! `SHIFT_GENERAL__DEFAULT_FORMAT` -> `general.default_format`.
//!
//! # Usage
//!
//! ```no_run
//! use shift_config::ShiftConfig;
//!
//! let config = ShiftConfig::load_with_dotenv().expect("config");
//! println!("database: {}", config.database.path);
//! ```

mod database;
mod error;
mod general;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::{GeneralConfig, OUTPUT_FORMATS};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ShiftConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl ShiftConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does not read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be read or merged,
    /// `ConfigError::InvalidValue` if a value fails [`Self::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` from the current directory first, then [`Self::load`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".shiftline/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("SHIFT_").split("__"))
    }

    /// Check values serde cannot.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty database path or an
    /// unknown output format.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty".into(),
            });
        }
        if !OUTPUT_FORMATS.contains(&self.general.default_format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.default_format".into(),
                reason: format!(
                    "'{}' is not one of: {}",
                    self.general.default_format,
                    OUTPUT_FORMATS.join(", ")
                ),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("shiftline").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ShiftConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.general.default_format, "json");
    }

    #[test]
    fn unknown_format_is_rejected() {
        let mut config = ShiftConfig::default();
        config.general.default_format = "yaml".into();
        let error = config.validate().unwrap_err();
        assert!(matches!(
            error,
            ConfigError::InvalidValue { ref field, .. } if field == "general.default_format"
        ));
        assert_eq!(
            error.to_string(),
            "Invalid configuration value for 'general.default_format': 'yaml' is not one of: json, raw"
        );
    }

    #[test]
    fn empty_database_path_is_rejected() {
        let mut config = ShiftConfig::default();
        config.database.path = "  ".into();
        assert!(config.validate().is_err());
    }
}
