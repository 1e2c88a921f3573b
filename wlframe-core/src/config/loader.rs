//! Configuration loading.
//!
//! [`ConfigLoader::load`] looks for `config.toml` in the application
//! configuration directory (see [`crate::utils::paths`]), or at the path named
//! by the [`CONFIG_PATH_ENV`] environment variable. A missing file yields the
//! defaults. The parsed configuration is then validated:
//!
//! - log level and format are lowercased and checked;
//! - relative log file paths are resolved against the application state
//!   directory, and the log directory is created;
//! - the geometry precision must not exceed [`MAX_PRECISION`];
//! - the geometry epsilon must be positive and finite.

use std::path::Path;

use crate::config::CoreConfig;
use crate::error::{ConfigError, CoreError};
use crate::types::MAX_PRECISION;
use crate::utils::{fs as wl_fs, paths};

/// Environment variable overriding the configuration file location.
pub const CONFIG_PATH_ENV: &str = "WLFRAME_CONFIG";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["text", "json"];

/// Namespace for the configuration loading functions.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates the configuration from its default location.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::DirectoryUnavailable`] if no config directory can be
    ///   determined and no override is set.
    /// - [`ConfigError::ReadError`] if the file exists but cannot be read.
    /// - [`ConfigError::ParseError`] for malformed TOML or unknown keys.
    /// - [`ConfigError::ValidationError`] for out-of-range values.
    pub fn load() -> Result<CoreConfig, CoreError> {
        let path = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) if !path.is_empty() => path.into(),
            _ => paths::get_app_config_file()?,
        };
        Self::load_from_path(&path)
    }

    /// Loads and validates the configuration stored at `path`.
    ///
    /// A missing file is not an error: the defaults are validated and returned.
    pub fn load_from_path(path: &Path) -> Result<CoreConfig, CoreError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                tracing::debug!(path = %path.display(), "loading configuration");
                Self::from_toml_str(&content)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no configuration file, using defaults");
                let mut config = CoreConfig::default();
                Self::validate_config(&mut config)?;
                Ok(config)
            }
            Err(e) => Err(CoreError::Config(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            })),
        }
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<CoreConfig, CoreError> {
        let mut config: CoreConfig = toml::from_str(content).map_err(ConfigError::ParseError)?;
        Self::validate_config(&mut config)?;
        Ok(config)
    }

    /// Validates `config` in place, normalizing the fields it can.
    pub fn validate_config(config: &mut CoreConfig) -> Result<(), CoreError> {
        let level = config.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(validation_error(format!(
                "Invalid log level: '{}'. Must be one of trace, debug, info, warn, error.",
                config.logging.level
            )));
        }
        config.logging.level = level;

        let format = config.logging.format.to_lowercase();
        if !LOG_FORMATS.contains(&format.as_str()) {
            return Err(validation_error(format!(
                "Invalid log format: '{}'. Must be one of text, json.",
                config.logging.format
            )));
        }
        config.logging.format = format;

        if let Some(file_path) = &config.logging.file_path {
            let absolute = if file_path.is_absolute() {
                file_path.clone()
            } else {
                paths::get_app_state_dir()?.join(file_path)
            };
            if let Some(parent) = absolute.parent() {
                if !parent.as_os_str().is_empty() {
                    wl_fs::ensure_dir_exists(parent)?;
                }
            }
            config.logging.file_path = Some(absolute);
        }

        if config.geometry.precision > MAX_PRECISION {
            return Err(validation_error(format!(
                "Invalid geometry precision: {}. Must be at most {}.",
                config.geometry.precision, MAX_PRECISION
            )));
        }

        let epsilon = config.geometry.epsilon;
        if !(epsilon.is_finite() && epsilon > 0.0) {
            return Err(validation_error(format!(
                "Invalid geometry epsilon: {}. Must be positive and finite.",
                epsilon
            )));
        }

        Ok(())
    }
}

fn validation_error(message: String) -> CoreError {
    CoreError::Config(ConfigError::ValidationError(message))
}
