//! Error handling for the wlframe core layer.
//!
//! This module defines the error types shared by the core crate using the
//! `thiserror` crate. The main error type is [`CoreError`], which wraps the more
//! specific [`ConfigError`] and [`LoggingError`]. Parsing of textual geometry is
//! reported separately through [`GeometryParseError`], since it is a value-level
//! failure that callers usually handle locally.
//!
//! # Examples
//!
//! ```
//! use wlframe_core::error::GeometryParseError;
//! use wlframe_core::types::PointInt;
//!
//! let err = "(1, 2".parse::<PointInt>().unwrap_err();
//! assert!(matches!(err, GeometryParseError::UnexpectedEnd { .. }));
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for wlframe.
///
/// Wraps configuration, logging and filesystem failures that can occur while
/// setting up the ambient services of the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Errors related to configuration loading, parsing, or validation.
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// Errors raised while installing the global logger.
    #[error("Logging Error: {0}")]
    Logging(#[from] LoggingError),

    /// Filesystem operations such as creating the log directory.
    #[error("Filesystem Error: {message} (Path: {path:?})")]
    Filesystem {
        message: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// General I/O errors not covered by other specific variants.
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for configuration-related operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or does not match the schema.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configuration parsed, but a value is out of range.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    /// A required base directory (e.g. XDG config home) could not be determined.
    #[error("Could not determine base directory for {dir_type}")]
    DirectoryUnavailable { dir_type: String },
}

/// Error type for logging initialization.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The configured level is not one of trace/debug/info/warn/error.
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    /// The global subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    InitializationFailure(String),
}

/// Error produced when textual geometry (points, sizes, rectangles, regions)
/// does not match its grammar.
///
/// Every variant carries the byte offset into the input at which scanning
/// stopped, so callers can point at the offending character.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryParseError {
    /// The input ended while `expected` was still required.
    #[error("unexpected end of input at offset {position}, expected {expected}")]
    UnexpectedEnd {
        expected: &'static str,
        position: usize,
    },

    /// A character other than the expected token was found.
    #[error("unexpected character {found:?} at offset {position}, expected {expected}")]
    UnexpectedChar {
        expected: &'static str,
        found: char,
        position: usize,
    },

    /// A numeric token was present but could not be converted.
    #[error("invalid number {text:?} at offset {position}")]
    InvalidNumber { text: String, position: usize },

    /// Non-whitespace input follows a complete value.
    #[error("trailing input at offset {position}")]
    TrailingInput { position: usize },
}

impl GeometryParseError {
    /// Byte offset into the input at which the error was detected.
    pub fn position(&self) -> usize {
        match self {
            GeometryParseError::UnexpectedEnd { position, .. }
            | GeometryParseError::UnexpectedChar { position, .. }
            | GeometryParseError::InvalidNumber { position, .. }
            | GeometryParseError::TrailingInput { position } => *position,
        }
    }
}
