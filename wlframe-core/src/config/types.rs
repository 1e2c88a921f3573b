//! Configuration data structures.
//!
//! Populated by deserializing TOML. Missing fields take the values from
//! [`super::defaults`]; unknown fields are rejected via
//! `#[serde(deny_unknown_fields)]`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Settings for the logging subsystem, consumed by
/// [`crate::logging::init_logging`].
///
/// ```
/// use wlframe_core::config::LoggingConfig;
/// use std::path::PathBuf;
///
/// let toml_str = r#"
/// level = "debug"
/// file_path = "/var/log/wlframe.log"
/// format = "json"
/// "#;
/// let log_config: LoggingConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(log_config.level, "debug");
/// assert_eq!(log_config.file_path, Some(PathBuf::from("/var/log/wlframe.log")));
/// assert_eq!(log_config.format, "json");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Minimum level to record: "trace", "debug", "info", "warn" or "error"
    /// (case-insensitive).
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// Optional log file. Relative paths are resolved against the application
    /// state directory. `None` disables file logging.
    #[serde(default = "defaults::default_log_file_path")]
    pub file_path: Option<PathBuf>,
    /// "text" or "json" (case-insensitive).
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        defaults::default_logging_config()
    }
}

/// Settings for geometry and region text output and float comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeometryConfig {
    /// Decimals printed for float components, at most 15.
    #[serde(default = "defaults::default_precision")]
    pub precision: usize,
    /// Absolute tolerance for `nearly_equal`; must be positive and finite.
    #[serde(default = "defaults::default_epsilon")]
    pub epsilon: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        defaults::default_geometry_config()
    }
}

/// Root configuration structure.
///
/// ```
/// use wlframe_core::config::CoreConfig;
///
/// let toml_str = r#"
/// [logging]
/// level = "warn"
/// "#;
/// let config: CoreConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(config.logging.level, "warn");
/// assert_eq!(config.logging.format, "text");
/// assert_eq!(config.geometry.precision, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoreConfig {
    #[serde(default = "defaults::default_logging_config")]
    pub logging: LoggingConfig,
    #[serde(default = "defaults::default_geometry_config")]
    pub geometry: GeometryConfig,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            logging: defaults::default_logging_config(),
            geometry: defaults::default_geometry_config(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_deserialize_empty() {
        let config: LoggingConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, LoggingConfig::default());
    }

    #[test]
    fn test_logging_config_deserialize_partial() {
        let config: LoggingConfig = serde_json::from_str(r#"{"file_path": "/tmp/wl.log"}"#).unwrap();
        assert_eq!(config.level, "info");
        assert_eq!(config.file_path, Some(PathBuf::from("/tmp/wl.log")));
    }

    #[test]
    fn test_geometry_config_deserialize_partial() {
        let config: GeometryConfig = toml::from_str("epsilon = 0.01").unwrap();
        assert_eq!(config.precision, 3);
        assert_eq!(config.epsilon, 0.01);
    }

    #[test]
    fn test_core_config_deserialize_empty() {
        let config: CoreConfig = toml::from_str("").unwrap();
        assert_eq!(config, CoreConfig::default());
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        assert!(serde_json::from_str::<LoggingConfig>(r#"{"level": "info", "colour": true}"#).is_err());
        assert!(toml::from_str::<CoreConfig>("[compositor]\nvsync = true\n").is_err());
        assert!(toml::from_str::<GeometryConfig>("precision = 2\nrounding = \"even\"\n").is_err());
    }

    #[test]
    fn test_core_config_toml_roundtrip() {
        let mut config = CoreConfig::default();
        config.logging.file_path = Some(PathBuf::from("/tmp/wl.log"));
        config.geometry.precision = 5;
        let text = toml::to_string(&config).unwrap();
        assert_eq!(toml::from_str::<CoreConfig>(&text).unwrap(), config);
    }
}
