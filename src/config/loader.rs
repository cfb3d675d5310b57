use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::args::{FlagDef, FlagKey, FlagKind};
use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
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

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/flagread/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("flagread").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads configuration from an explicit `path`.
    ///
    /// Unlike [`Config::load`], a missing file is a `ReadError`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        debug!(path = %path.display(), flags = config.flags.len(), "config loaded");
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Every flag key is a valid flag name
    /// - Flag keys are unique
    /// - Switch flags carry no default
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();

        for flag in &self.flags {
            FlagKey::parse(&flag.key).map_err(|e| ConfigError::ValidationError {
                message: format!("Invalid flag key: {}", e),
            })?;

            if !seen.insert(flag.key.as_str()) {
                return Err(ConfigError::ValidationError {
                    message: format!("Flag '{}' is declared more than once", flag.key),
                });
            }

            if flag.kind == FlagKind::Switch && flag.default.is_some() {
                return Err(ConfigError::ValidationError {
                    message: format!("Switch flag '{}' cannot have a default", flag.key),
                });
            }
        }

        Ok(())
    }

    /// Declared flags as registry definitions.
    pub fn registry(&self) -> Result<Vec<FlagDef>, ConfigError> {
        self.flags
            .iter()
            .map(|flag| {
                let key = FlagKey::parse(&flag.key).map_err(|e| ConfigError::ValidationError {
                    message: format!("Invalid flag key: {}", e),
                })?;
                let mut def = FlagDef::new(key, flag.kind).with_description(&flag.description);
                def.default = flag.default.clone();
                Ok(def)
            })
            .collect()
    }
}
