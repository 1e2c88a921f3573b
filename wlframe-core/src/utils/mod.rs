//! Filesystem and path helpers used by the configuration and logging layers.
//!
//! - [`fs`]: directory creation mapped onto [`crate::error::CoreError`].
//! - [`paths`]: application-specific directories resolved through `directories-next`.

pub mod fs;
pub mod paths;

pub use fs::ensure_dir_exists;
