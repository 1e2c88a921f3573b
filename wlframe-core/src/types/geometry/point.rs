use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use num_traits::Num;
use serde::{Deserialize, Serialize};

use super::{round_ties_even_i32, write_tuple, Scalar, Scanner};
use crate::error::GeometryParseError;

/// Represents a 2D point with generic coordinates.
///
/// # Type Parameters
///
/// * `T`: The numeric type for the coordinates (`i32` or `f64` in practice).
///
/// The arithmetic operators follow the component type: integer points
/// overflow like `i32` does (a panic in debug builds).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize + Num + Copy",
    deserialize = "T: Deserialize<'de> + Num + Copy"
))]
pub struct Point<T: Num + Copy> {
    /// The x-coordinate of the point.
    pub x: T,
    /// The y-coordinate of the point.
    pub y: T,
}

impl<T: Num + Copy + Eq> Eq for Point<T> {}
impl<T: Num + Copy + std::hash::Hash> std::hash::Hash for Point<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl<T: Num + Copy> Point<T> {
    /// Creates a new point with the given coordinates.
    pub const fn new(x: T, y: T) -> Self {
        Point { x, y }
    }

    /// Returns `true` if both coordinates are zero.
    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Calculates the squared Euclidean distance to another point.
    /// Preferred over [`Point::distance`] when only comparing distances.
    pub fn distance_squared(&self, other: &Self) -> T {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Calculates the Euclidean distance to another point.
    ///
    /// Computed in `f64` for both families, so integer points do not truncate.
    pub fn distance(&self, other: &Self) -> f64
    where
        T: Into<f64>,
    {
        let dx = self.x.into() - other.x.into();
        let dy = self.y.into() - other.y.into();
        (dx * dx + dy * dy).sqrt()
    }
}

impl<T: Num + Copy> Add for Point<T> {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl<T: Num + Copy> Sub for Point<T> {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl<T: Num + Copy + Neg<Output = T>> Neg for Point<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Point::new(-self.x, -self.y)
    }
}

// --- Integer family ---

impl Point<i32> {
    /// The origin.
    pub const ZERO: Self = Point { x: 0, y: 0 };
    /// `(1, 1)`.
    pub const UNIT: Self = Point { x: 1, y: 1 };
    /// `(1, 0)`.
    pub const UNIT_X: Self = Point { x: 1, y: 0 };
    /// `(0, 1)`.
    pub const UNIT_Y: Self = Point { x: 0, y: 1 };

    /// Calculates the Manhattan distance (L1 norm) to another point,
    /// saturating at `i32::MAX`.
    pub fn manhattan_distance(&self, other: &Self) -> i32 {
        let sum = self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y));
        i32::try_from(sum).unwrap_or(i32::MAX)
    }

    /// Multiplies both coordinates by `factor`, rounding to the nearest
    /// integer with ties to even.
    pub fn scale(&self, factor: f64) -> Self {
        Point::new(
            round_ties_even_i32(self.x as f64 * factor),
            round_ties_even_i32(self.y as f64 * factor),
        )
    }
}

impl From<Point<i32>> for Point<f64> {
    fn from(p: Point<i32>) -> Self {
        Point::new(p.x as f64, p.y as f64)
    }
}

// --- Float family ---

impl Point<f64> {
    /// The origin.
    pub const ZERO: Self = Point { x: 0.0, y: 0.0 };
    /// `(1, 1)`.
    pub const UNIT: Self = Point { x: 1.0, y: 1.0 };
    /// `(1, 0)`.
    pub const UNIT_X: Self = Point { x: 1.0, y: 0.0 };
    /// `(0, 1)`.
    pub const UNIT_Y: Self = Point { x: 0.0, y: 1.0 };

    /// Length of the vector from the origin to this point.
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Squared length of the vector from the origin to this point.
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Returns the unit vector with the same direction.
    /// The zero vector normalizes to itself.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len == 0.0 {
            Self::ZERO
        } else {
            Point::new(self.x / len, self.y / len)
        }
    }

    /// Rotates the point around the origin by `radians` (counter-clockwise in a
    /// y-up frame).
    pub fn rotate(&self, radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Point::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Calculates the Manhattan distance (L1 norm) to another point.
    pub fn manhattan_distance(&self, other: &Self) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product.
    pub fn cross(&self, other: &Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Angle of the vector relative to the positive x axis, in `(-π, π]`.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Signed angle that rotates `self` onto `other`, in `(-π, π]`.
    pub fn angle_between(&self, other: &Self) -> f64 {
        self.cross(other).atan2(self.dot(other))
    }

    /// Linear interpolation: `t = 0` yields `self`, `t = 1` yields `other`.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Evaluates the quadratic Bézier curve `self → control → end` at `t`.
    pub fn quadratic_bezier(&self, control: &Self, end: &Self, t: f64) -> Self {
        let u = 1.0 - t;
        let a = u * u;
        let b = 2.0 * u * t;
        let c = t * t;
        Point::new(
            a * self.x + b * control.x + c * end.x,
            a * self.y + b * control.y + c * end.y,
        )
    }

    /// Componentwise comparison with absolute tolerance `epsilon` (strict).
    pub fn nearly_equal(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }

    /// Rounds each coordinate to the nearest integer, ties away from zero.
    pub fn round(&self) -> Point<i32> {
        Point::new(self.x.round() as i32, self.y.round() as i32)
    }

    /// Rounds each coordinate towards negative infinity.
    pub fn floor(&self) -> Point<i32> {
        Point::new(self.x.floor() as i32, self.y.floor() as i32)
    }

    /// Rounds each coordinate towards positive infinity.
    pub fn ceil(&self) -> Point<i32> {
        Point::new(self.x.ceil() as i32, self.y.ceil() as i32)
    }

    /// Formats the point with `precision` decimals (clamped to 15).
    pub fn to_string_with_precision(&self, precision: usize) -> String {
        format!("{:.*}", precision, self)
    }
}

impl Mul<f64> for Point<f64> {
    type Output = Self;
    fn mul(self, factor: f64) -> Self {
        Point::new(self.x * factor, self.y * factor)
    }
}

/// Division follows IEEE semantics: a zero divisor yields infinities or NaN.
impl Div<f64> for Point<f64> {
    type Output = Self;
    fn div(self, divisor: f64) -> Self {
        Point::new(self.x / divisor, self.y / divisor)
    }
}

// --- Text ---

impl<T: Scalar> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, &[self.x, self.y])
    }
}

impl<T: Scalar> FromStr for Point<T> {
    type Err = GeometryParseError;

    /// Parses `(x, y)`, allowing whitespace around every token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut scanner = Scanner::new(s);
        let [x, y] = scanner.delimited::<T, 2>('(', ')')?;
        scanner.finish()?;
        Ok(Point::new(x, y))
    }
}
