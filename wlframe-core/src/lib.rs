//! # wlframe core library (`wlframe-core`)
//!
//! Foundational layer of the wlframe workspace:
//!
//! - **Geometry**: generic [`Point`], [`Size`] and [`Rect`] with an `i32`
//!   family ([`PointInt`], [`SizeInt`], [`RectInt`]) and an `f64` family
//!   ([`PointF`], [`SizeF`], [`RectF`]), including rectangle algebra and a
//!   parseable text form.
//! - **Error handling**: [`CoreError`] with the more specific [`ConfigError`]
//!   and [`LoggingError`], plus [`GeometryParseError`] for text input.
//! - **Configuration**: TOML-backed [`CoreConfig`] loaded by [`ConfigLoader`].
//! - **Logging**: `tracing` subscriber setup in [`logging`].
//!
//! ```rust,no_run
//! use wlframe_core::config::ConfigLoader;
//! use wlframe_core::logging::init_logging;
//! use wlframe_core::error::CoreError;
//!
//! fn main() -> Result<(), CoreError> {
//!     let config = ConfigLoader::load()?;
//!     init_logging(&config.logging, false)?;
//!     tracing::info!("wlframe core initialized");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

pub use config::{ConfigLoader, CoreConfig, GeometryConfig, LoggingConfig};
pub use error::{ConfigError, CoreError, GeometryParseError, LoggingError};
pub use logging::{init_logging, init_minimal_logging};
pub use types::{Point, PointF, PointInt, Rect, RectF, RectInt, Size, SizeF, SizeInt};
