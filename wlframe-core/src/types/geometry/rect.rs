use std::fmt;
use std::str::FromStr;

use num_traits::Num;
use serde::{Deserialize, Serialize};

use super::{round_ties_even_i32, write_tuple, Point, Scalar, Scanner, Size};
use crate::error::GeometryParseError;

/// Represents a 2D rectangle defined by an origin point and a size.
///
/// The rectangle covers the half-open area
/// `[x, x + width) × [y, y + height)`. Edges are computed in the component
/// type, so integer rectangles whose far edge exceeds `i32::MAX` overflow.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize + Num + Copy",
    deserialize = "T: Deserialize<'de> + Num + Copy"
))]
pub struct Rect<T: Num + Copy> {
    /// The origin point (top-left corner) of the rectangle.
    pub origin: Point<T>,
    /// The size (width and height) of the rectangle.
    pub size: Size<T>,
}

impl<T: Num + Copy + Eq> Eq for Rect<T> {}
impl<T: Num + Copy + std::hash::Hash> std::hash::Hash for Rect<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.origin.hash(state);
        self.size.hash(state);
    }
}

impl<T: Num + Copy> Rect<T> {
    /// Creates a new rectangle from an origin point and a size.
    pub const fn new(origin: Point<T>, size: Size<T>) -> Self {
        Rect { origin, size }
    }

    /// Creates a new rectangle from individual coordinate and dimension values.
    pub const fn from_coords(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Creates the rectangle spanned by two opposite corners, in any order.
    pub fn from_points(p1: Point<T>, p2: Point<T>) -> Self
    where
        T: PartialOrd,
    {
        let (left, right) = if p1.x <= p2.x { (p1.x, p2.x) } else { (p2.x, p1.x) };
        let (top, bottom) = if p1.y <= p2.y { (p1.y, p2.y) } else { (p2.y, p1.y) };
        Rect::from_coords(left, top, right - left, bottom - top)
    }

    /// Returns the x-coordinate of the rectangle's origin (left edge).
    pub fn x(&self) -> T {
        self.origin.x
    }

    /// Returns the y-coordinate of the rectangle's origin (top edge).
    pub fn y(&self) -> T {
        self.origin.y
    }

    /// Returns the width of the rectangle.
    pub fn width(&self) -> T {
        self.size.width
    }

    /// Returns the height of the rectangle.
    pub fn height(&self) -> T {
        self.size.height
    }

    /// Returns the origin. (Same as `top_left()`)
    pub fn position(&self) -> Point<T> {
        self.origin
    }

    /// Returns the size.
    pub fn size(&self) -> Size<T> {
        self.size
    }

    /// Returns the x-coordinate of the left edge. (Same as `x()`)
    pub fn left(&self) -> T {
        self.origin.x
    }

    /// Returns the y-coordinate of the top edge. (Same as `y()`)
    pub fn top(&self) -> T {
        self.origin.y
    }

    /// Calculates the x-coordinate of the right edge (exclusive).
    pub fn right(&self) -> T {
        self.origin.x + self.size.width
    }

    /// Calculates the y-coordinate of the bottom edge (exclusive).
    pub fn bottom(&self) -> T {
        self.origin.y + self.size.height
    }

    pub fn top_left(&self) -> Point<T> {
        self.origin
    }

    pub fn bottom_right(&self) -> Point<T> {
        Point::new(self.right(), self.bottom())
    }

    /// Calculates the center point. Integer rectangles truncate towards zero.
    pub fn center(&self) -> Point<T> {
        let two = T::one() + T::one();
        Point::new(
            self.origin.x + self.size.width / two,
            self.origin.y + self.size.height / two,
        )
    }

    pub fn area(&self) -> T {
        self.size.area()
    }

    pub fn perimeter(&self) -> T {
        let two = T::one() + T::one();
        two * (self.size.width + self.size.height)
    }

    /// Returns the rectangle moved by `(dx, dy)`; the size is unchanged.
    pub fn offset(&self, dx: T, dy: T) -> Self {
        Rect::new(Point::new(self.origin.x + dx, self.origin.y + dy), self.size)
    }

    /// Returns the rectangle translated by a delta point.
    pub fn translated(&self, delta: &Point<T>) -> Self {
        self.offset(delta.x, delta.y)
    }

    /// Grows the rectangle by `dx` on the left and right and by `dy` on the top
    /// and bottom, so the width changes by `2 * dx` and the height by `2 * dy`.
    /// Negative deltas shrink it; the result is not clamped.
    pub fn inflate(&self, dx: T, dy: T) -> Self {
        let two = T::one() + T::one();
        Rect::from_coords(
            self.origin.x - dx,
            self.origin.y - dy,
            self.size.width + two * dx,
            self.size.height + two * dy,
        )
    }

    /// Checks if a point lies within the half-open area of the rectangle.
    pub fn contains_point(&self, point: &Point<T>) -> bool
    where
        T: PartialOrd,
    {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Checks if the rectangle has zero width or height.
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Checks if the rectangle has strictly positive width and height.
    pub fn is_valid(&self) -> bool
    where
        T: PartialOrd,
    {
        self.size.is_valid()
    }
}

// --- Integer family ---

impl Rect<i32> {
    /// The zero rectangle, also the result of clipping disjoint rectangles.
    pub const ZERO: Self = Rect::from_coords(0, 0, 0, 0);

    /// Scales width and height by the given factors, rounding ties to even.
    /// The position is unchanged.
    pub fn scale(&self, sx: f64, sy: f64) -> Self {
        Rect::from_coords(
            self.origin.x,
            self.origin.y,
            round_ties_even_i32(self.size.width as f64 * sx),
            round_ties_even_i32(self.size.height as f64 * sy),
        )
    }

    /// [`Rect::contains_point`] for fractional coordinates.
    pub fn contains_point_f(&self, x: f64, y: f64) -> bool {
        Rect::<f64>::from(*self).contains_point(&Point::new(x, y))
    }
}

impl From<Rect<i32>> for Rect<f64> {
    fn from(r: Rect<i32>) -> Self {
        Rect::new(r.origin.into(), r.size.into())
    }
}

// --- Float family ---

impl Rect<f64> {
    /// The zero rectangle.
    pub const ZERO: Self = Rect::from_coords(0.0, 0.0, 0.0, 0.0);

    /// Scales width and height by the given factors. The position is unchanged.
    pub fn scale(&self, sx: f64, sy: f64) -> Self {
        Rect::from_coords(
            self.origin.x,
            self.origin.y,
            self.size.width * sx,
            self.size.height * sy,
        )
    }

    /// Returns `true` if no component is infinite or NaN.
    pub fn is_finite(&self) -> bool {
        self.origin.x.is_finite()
            && self.origin.y.is_finite()
            && self.size.width.is_finite()
            && self.size.height.is_finite()
    }

    /// Componentwise comparison with absolute tolerance `epsilon` (strict).
    pub fn nearly_equal(&self, other: &Self, epsilon: f64) -> bool {
        self.origin.nearly_equal(&other.origin, epsilon) && self.size.nearly_equal(&other.size, epsilon)
    }

    /// Rounds every component independently, ties away from zero.
    pub fn round(&self) -> Rect<i32> {
        Rect::new(self.origin.round(), self.size.round())
    }

    /// Floors every component independently.
    pub fn floor(&self) -> Rect<i32> {
        Rect::new(self.origin.floor(), self.size.floor())
    }

    /// Ceils every component independently.
    pub fn ceil(&self) -> Rect<i32> {
        Rect::new(self.origin.ceil(), self.size.ceil())
    }

    /// Formats the rectangle with `precision` decimals (clamped to 15).
    pub fn to_string_with_precision(&self, precision: usize) -> String {
        format!("{:.*}", precision, self)
    }
}

// --- Text ---

impl<T: Scalar> fmt::Display for Rect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, &[self.x(), self.y(), self.width(), self.height()])
    }
}

impl<T: Scalar> FromStr for Rect<T> {
    type Err = GeometryParseError;

    /// Parses `(x, y, w, h)`, allowing whitespace around every token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut scanner = Scanner::new(s);
        let [x, y, width, height] = scanner.delimited::<T, 4>('(', ')')?;
        scanner.finish()?;
        Ok(Rect::from_coords(x, y, width, height))
    }
}
