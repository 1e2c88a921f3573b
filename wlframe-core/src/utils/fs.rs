//! Filesystem utilities.
//!
//! Wrappers over `std::fs` that report failures as [`CoreError::Filesystem`]
//! with the offending path attached.

use std::fs;
use std::path::Path;

use crate::error::CoreError;

/// Ensures that a directory exists at `path`, creating it and any missing
/// parents if needed.
///
/// Fails if `path` exists but is not a directory.
///
/// ```
/// use wlframe_core::utils::fs::ensure_dir_exists;
///
/// let temp_dir = tempfile::tempdir().unwrap();
/// let logs = temp_dir.path().join("state/logs");
/// ensure_dir_exists(&logs).unwrap();
/// assert!(logs.is_dir());
/// ```
pub fn ensure_dir_exists(path: &Path) -> Result<(), CoreError> {
    if path.exists() {
        if path.is_dir() {
            return Ok(());
        }
        return Err(CoreError::Filesystem {
            message: "Path exists but is not a directory".to_string(),
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "Path exists but is not a directory",
            ),
        });
    }
    tracing::debug!(path = %path.display(), "creating directory");
    fs::create_dir_all(path).map_err(|e| CoreError::Filesystem {
        message: "Failed to create directory".to_string(),
        path: path.to_path_buf(),
        source: e,
    })
}
