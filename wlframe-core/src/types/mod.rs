//! Core value types.
//!
//! Currently the 2D geometry primitives; see [`geometry`] for the full
//! description of the integer and float families and their textual forms.

pub mod geometry;

pub use geometry::{
    clamp_precision, display_or_null, Point, PointF, PointInt, Rect, RectF, RectInt, Scalar, Scanner,
    Size, SizeF, SizeInt, DEFAULT_PRECISION, MAX_PRECISION, NULL_REPR,
};
