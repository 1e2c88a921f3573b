//! Configuration for the wlframe core layer.
//!
//! - [`types`]: the schema, rooted at [`CoreConfig`].
//! - [`defaults`]: default values referenced by the `serde(default)` attributes.
//! - [`loader`]: [`ConfigLoader`], which reads, parses and validates a TOML file.
//!
//! Missing files yield the defaults; unknown keys are rejected.
//!
//! ```
//! use wlframe_core::config::ConfigLoader;
//!
//! let config = ConfigLoader::from_toml_str("[geometry]\nprecision = 6\n").unwrap();
//! assert_eq!(config.geometry.precision, 6);
//! assert_eq!(config.logging.level, "info");
//! ```

pub mod defaults;
pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, CONFIG_PATH_ENV};
pub use types::{CoreConfig, GeometryConfig, LoggingConfig};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn test_core_config_deserialize_minimal_json() {
        let json_data = r#"{ "logging": { "level": "debug" } }"#;
        let config: CoreConfig = serde_json::from_str(json_data).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file_path, defaults::default_log_file_path());
        assert_eq!(config.logging.format, defaults::default_log_format());
        assert_eq!(config.geometry, GeometryConfig::default());
    }

    #[test]
    fn test_core_config_deserialize_full_json() {
        let json_data = r#"{
            "logging": { "level": "trace", "file_path": "/var/log/wlframe.log", "format": "json" },
            "geometry": { "precision": 1, "epsilon": 0.5 }
        }"#;
        let config: CoreConfig = serde_json::from_str(json_data).unwrap();
        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.logging.file_path, Some(PathBuf::from("/var/log/wlframe.log")));
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.geometry, GeometryConfig { precision: 1, epsilon: 0.5 });
    }
}
