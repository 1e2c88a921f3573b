//! Application-specific directories.
//!
//! Resolved with `directories-next` for the `org.wlframe.wlframe` project; on
//! Linux this follows the XDG base directory layout, e.g.
//! `~/.config/wlframe` and `~/.local/state/wlframe`.

use std::path::PathBuf;

use directories_next::{BaseDirs, ProjectDirs};

use crate::error::{ConfigError, CoreError};

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "wlframe";
const APPLICATION: &str = "wlframe";

/// Name of the configuration file inside [`get_app_config_dir`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

fn project_dirs(dir_type: &str) -> Result<ProjectDirs, CoreError> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).ok_or_else(|| {
        CoreError::Config(ConfigError::DirectoryUnavailable {
            dir_type: dir_type.to_string(),
        })
    })
}

/// Returns the application configuration directory.
///
/// # Errors
/// [`ConfigError::DirectoryUnavailable`] if no home directory can be found.
pub fn get_app_config_dir() -> Result<PathBuf, CoreError> {
    project_dirs("App Config").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Returns the application state directory, where relative log file paths
/// are resolved.
///
/// On Linux this is `$XDG_STATE_HOME/wlframe` (default `~/.local/state/wlframe`);
/// other platforms use the local data directory.
pub fn get_app_state_dir() -> Result<PathBuf, CoreError> {
    let dirs = BaseDirs::new().ok_or_else(|| {
        CoreError::Config(ConfigError::DirectoryUnavailable {
            dir_type: "App State".to_string(),
        })
    })?;

    #[cfg(target_os = "linux")]
    let base = match std::env::var("XDG_STATE_HOME") {
        Ok(state_home) if !state_home.is_empty() => PathBuf::from(state_home),
        _ => dirs.home_dir().join(".local/state"),
    };
    #[cfg(not(target_os = "linux"))]
    let base = dirs.data_local_dir().to_path_buf();

    Ok(base.join(APPLICATION))
}

/// Returns the full path of the default configuration file.
pub fn get_app_config_file() -> Result<PathBuf, CoreError> {
    Ok(get_app_config_dir()?.join(CONFIG_FILE_NAME))
}
