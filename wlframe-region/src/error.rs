//! Error type for region operations.

use std::collections::TryReserveError;

use thiserror::Error;
use wlframe_core::error::GeometryParseError;

/// Failure of a region operation.
///
/// A failed operation never leaves a partially modified region behind: mutators
/// keep the previous contents and constructors produce nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegionError {
    /// The rectangle storage could not grow to `requested` entries.
    #[error("failed to allocate storage for {requested} rectangles")]
    Allocation {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    /// The rectangle that would be stored at `index` has an infinite or NaN
    /// component.
    #[error("rectangle {index} has a non-finite component")]
    NonFinite { index: usize },

    /// The text is not a valid region.
    #[error("invalid region text: {0}")]
    Parse(#[from] GeometryParseError),
}
