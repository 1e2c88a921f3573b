//! Logging setup on top of `tracing`.
//!
//! Libraries in this workspace only emit events; binaries and tests choose a
//! subscriber with one of the functions below.
//!
//! - [`init_minimal_logging`]: stderr, filtered by `RUST_LOG`, for tests and
//!   early startup.
//! - [`init_logging`]: stdout plus an optional daily-rolling log file, as
//!   described by a [`LoggingConfig`].

use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

use crate::config::LoggingConfig;
use crate::error::{CoreError, LoggingError};
use crate::utils;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

const DEFAULT_LOG_FILE_NAME: &str = "wlframe.log";

/// Keeps the file writer alive so buffered lines are flushed.
static LOG_WORKER_GUARD: Lazy<Mutex<Option<WorkerGuard>>> = Lazy::new(|| Mutex::new(None));

/// Installs a stderr subscriber filtered by `RUST_LOG` (default `info`).
///
/// Does nothing if a global subscriber is already set, so it can be called
/// from every test.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

/// Parses a case-insensitive level name.
pub fn parse_level(level: &str) -> Result<Level, LoggingError> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(LoggingError::InvalidLevel(level.to_string())),
    }
}

fn is_json(format: &str) -> bool {
    format.eq_ignore_ascii_case("json")
}

fn stdout_layer(format: &str) -> BoxedLayer {
    if is_json(format) {
        fmt::layer().json().with_writer(stdout).with_ansi(false).boxed()
    } else {
        fmt::layer()
            .with_writer(stdout)
            .with_ansi(atty::is(atty::Stream::Stdout))
            .boxed()
    }
}

/// Builds the daily-rolling file layer for `log_path`, creating its directory.
fn file_layer(log_path: &Path, format: &str) -> Result<(BoxedLayer, WorkerGuard), CoreError> {
    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    utils::fs::ensure_dir_exists(directory)?;

    let file_name = log_path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new(DEFAULT_LOG_FILE_NAME));
    let appender = tracing_appender::rolling::daily(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = if is_json(format) {
        fmt::layer().json().with_writer(writer).with_ansi(false).boxed()
    } else {
        fmt::layer().with_writer(writer).with_ansi(false).boxed()
    };
    Ok((layer, guard))
}

/// Installs the global subscriber described by `config`.
///
/// With `is_reload` set, an already installed subscriber is not an error:
/// the file guard is swapped and the previous subscriber stays in place.
///
/// # Errors
///
/// - [`LoggingError::InvalidLevel`] for an unknown level.
/// - [`CoreError::Filesystem`] if the log directory cannot be created.
/// - [`LoggingError::InitializationFailure`] if a subscriber is already set
///   and `is_reload` is `false`.
pub fn init_logging(config: &LoggingConfig, is_reload: bool) -> Result<(), CoreError> {
    let level = parse_level(&config.level)?;

    let mut layers: Vec<BoxedLayer> = vec![stdout_layer(&config.format)
        .with_filter(EnvFilter::new(level.to_string()))
        .boxed()];

    let mut file_guard = None;
    if let Some(log_path) = &config.file_path {
        let (layer, guard) = file_layer(log_path, &config.format)?;
        layers.push(layer.with_filter(EnvFilter::new(level.to_string())).boxed());
        file_guard = Some(guard);
    }

    let result = Registry::default().with(layers).try_init();

    match LOG_WORKER_GUARD.lock() {
        Ok(mut slot) => *slot = file_guard,
        Err(e) => eprintln!("[ERROR] failed to store log worker guard: {}", e),
    }

    match result {
        Ok(()) => {
            tracing::debug!(level = %level, format = %config.format, "logging initialized");
            Ok(())
        }
        Err(e) if is_reload => {
            tracing::info!("logging reload requested; keeping the installed subscriber ({})", e);
            Ok(())
        }
        Err(e) => Err(LoggingError::InitializationFailure(format!(
            "Failed to set global tracing subscriber: {}",
            e
        ))
        .into()),
    }
}
