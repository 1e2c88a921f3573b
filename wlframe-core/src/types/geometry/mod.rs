//! Geometric primitives: points, sizes and rectangles.
//!
//! Every primitive is generic over its component type and comes in two
//! families:
//!
//! - the integer family ([`PointInt`], [`SizeInt`], [`RectInt`]) with `i32`
//!   components, used for pixel-exact geometry;
//! - the float family ([`PointF`], [`SizeF`], [`RectF`]) with `f64` components,
//!   which is what regions store.
//!
//! Operations shared by both families are implemented once over the generic
//! types; family-specific operations (rounding, normalization, epsilon
//! comparisons) live in concrete `impl` blocks.
//!
//! All rectangles are half-open: `[x, x + width) × [y, y + height)`.
//!
//! # Textual form
//!
//! Every primitive implements [`std::fmt::Display`] and [`std::str::FromStr`]:
//!
//! | Type  | Form             |
//! |-------|------------------|
//! | point | `(x, y)`         |
//! | size  | `(w, h)`         |
//! | rect  | `(x, y, w, h)`   |
//!
//! Float components are printed with [`DEFAULT_PRECISION`] decimals unless the
//! formatter carries a precision (`format!("{:.1}", p)`), which is clamped to
//! [`MAX_PRECISION`]. Parsing accepts whitespace around every token.
//!
//! ```
//! use wlframe_core::types::{PointF, RectInt};
//!
//! let p = PointF::new(1.5, -2.0);
//! assert_eq!(p.to_string(), "(1.500, -2.000)");
//! assert_eq!(format!("{:.1}", p), "(1.5, -2.0)");
//!
//! let r: RectInt = " ( 0, 0 ,10,20 ) ".parse().unwrap();
//! assert_eq!(r, RectInt::from_coords(0, 0, 10, 20));
//! ```

mod algebra;
mod point;
mod rect;
pub mod scan;
mod size;

use std::fmt;
use std::str::FromStr;

use num_traits::{Num, NumCast};

pub use point::Point;
pub use rect::Rect;
pub use scan::Scanner;
pub use size::Size;

/// A 2D point with `i32` coordinates.
pub type PointInt = Point<i32>;
/// A 2D size with `i32` dimensions.
pub type SizeInt = Size<i32>;
/// A 2D rectangle with `i32` origin and dimensions.
pub type RectInt = Rect<i32>;

/// A 2D point with `f64` coordinates.
pub type PointF = Point<f64>;
/// A 2D size with `f64` dimensions.
pub type SizeF = Size<f64>;
/// A 2D rectangle with `f64` origin and dimensions.
pub type RectF = Rect<f64>;

/// Number of decimals used for float components when no precision is given.
pub const DEFAULT_PRECISION: usize = 3;

/// Largest precision honoured by the float formatters.
pub const MAX_PRECISION: usize = 15;

/// Rendering used for an absent value by [`display_or_null`].
pub const NULL_REPR: &str = "(NULL)";

/// Clamps a requested float precision into `[0, MAX_PRECISION]`, falling back
/// to [`DEFAULT_PRECISION`] when none was requested.
pub fn clamp_precision(precision: Option<usize>) -> usize {
    precision.unwrap_or(DEFAULT_PRECISION).min(MAX_PRECISION)
}

/// Formats an optional value, rendering `None` as [`NULL_REPR`].
///
/// ```
/// use wlframe_core::types::{display_or_null, PointInt};
///
/// assert_eq!(display_or_null(Some(&PointInt::new(1, 2))), "(1, 2)");
/// assert_eq!(display_or_null::<PointInt>(None), "(NULL)");
/// ```
pub fn display_or_null<T: fmt::Display + ?Sized>(value: Option<&T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => NULL_REPR.to_string(),
    }
}

/// A component type usable in the textual geometry forms.
///
/// Implemented for `i32` and `f64`, the two primitive families.
pub trait Scalar: Num + NumCast + Copy + PartialOrd + Default + FromStr + fmt::Debug {
    /// Writes the component, honouring the formatter precision for floats.
    fn write_scalar(self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Returns `false` for infinities and NaN, which have no textual form.
    fn is_finite(self) -> bool;
}

impl Scalar for i32 {
    fn write_scalar(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }

    fn is_finite(self) -> bool {
        true
    }
}

impl Scalar for f64 {
    fn write_scalar(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", clamp_precision(f.precision()), self)
    }

    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}

/// Writes `(a, b, ...)` using [`Scalar::write_scalar`] for every component.
fn write_tuple<T: Scalar>(f: &mut fmt::Formatter<'_>, components: &[T]) -> fmt::Result {
    f.write_str("(")?;
    for (i, component) in components.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        component.write_scalar(f)?;
    }
    f.write_str(")")
}

/// Rounds a float to the nearest `i32`, ties to even.
#[inline]
fn round_ties_even_i32(value: f64) -> i32 {
    value.round_ties_even() as i32
}
