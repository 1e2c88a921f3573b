//! Default configuration values.
//!
//! Referenced by the `serde(default = "...")` attributes in [`super::types`].

use std::path::PathBuf;

use super::types::{GeometryConfig, LoggingConfig};
use crate::types::DEFAULT_PRECISION;

pub(crate) fn default_logging_config() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
        file_path: default_log_file_path(),
        format: default_log_format(),
    }
}

pub(crate) fn default_log_level() -> String {
    "info".to_string()
}

pub(crate) fn default_log_file_path() -> Option<PathBuf> {
    None
}

pub(crate) fn default_log_format() -> String {
    "text".to_string()
}

pub(crate) fn default_geometry_config() -> GeometryConfig {
    GeometryConfig {
        precision: default_precision(),
        epsilon: default_epsilon(),
    }
}

/// Decimals used when printing float geometry.
pub(crate) fn default_precision() -> usize {
    DEFAULT_PRECISION
}

/// Tolerance for `nearly_equal` comparisons.
pub(crate) fn default_epsilon() -> f64 {
    1e-6
}
