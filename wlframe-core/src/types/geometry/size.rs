use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use num_traits::Num;
use serde::{Deserialize, Serialize};

use super::{round_ties_even_i32, write_tuple, Scalar, Scanner};
use crate::error::GeometryParseError;

/// Represents a 2D size (width and height) with generic dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize + Num + Copy",
    deserialize = "T: Deserialize<'de> + Num + Copy"
))]
pub struct Size<T: Num + Copy> {
    /// The width component of the size.
    pub width: T,
    /// The height component of the size.
    pub height: T,
}

impl<T: Num + Copy + Eq> Eq for Size<T> {}
impl<T: Num + Copy + std::hash::Hash> std::hash::Hash for Size<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.width.hash(state);
        self.height.hash(state);
    }
}

impl<T: Num + Copy> Size<T> {
    /// Creates a new size with the given width and height.
    pub const fn new(width: T, height: T) -> Self {
        Size { width, height }
    }

    /// Calculates the area of the size (width * height).
    pub fn area(&self) -> T {
        self.width * self.height
    }

    /// Checks if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width.is_zero() || self.height.is_zero()
    }

    /// Checks if both dimensions are strictly positive.
    pub fn is_valid(&self) -> bool
    where
        T: PartialOrd,
    {
        self.width > T::zero() && self.height > T::zero()
    }
}

impl<T: Num + Copy> Add for Size<T> {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Size::new(self.width + other.width, self.height + other.height)
    }
}

impl<T: Num + Copy> Sub for Size<T> {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Size::new(self.width - other.width, self.height - other.height)
    }
}

impl Size<i32> {
    /// A size of `(0, 0)`.
    pub const ZERO: Self = Size { width: 0, height: 0 };

    /// Multiplies both dimensions by `factor`, rounding ties to even.
    pub fn scale(&self, factor: f64) -> Self {
        Size::new(
            round_ties_even_i32(self.width as f64 * factor),
            round_ties_even_i32(self.height as f64 * factor),
        )
    }
}

impl From<Size<i32>> for Size<f64> {
    fn from(s: Size<i32>) -> Self {
        Size::new(s.width as f64, s.height as f64)
    }
}

impl Size<f64> {
    /// A size of `(0.0, 0.0)`.
    pub const ZERO: Self = Size { width: 0.0, height: 0.0 };

    /// Componentwise comparison with absolute tolerance `epsilon` (strict).
    pub fn nearly_equal(&self, other: &Self, epsilon: f64) -> bool {
        (self.width - other.width).abs() < epsilon && (self.height - other.height).abs() < epsilon
    }

    /// Rounds each dimension to the nearest integer, ties away from zero.
    pub fn round(&self) -> Size<i32> {
        Size::new(self.width.round() as i32, self.height.round() as i32)
    }

    /// Rounds each dimension towards negative infinity.
    pub fn floor(&self) -> Size<i32> {
        Size::new(self.width.floor() as i32, self.height.floor() as i32)
    }

    /// Rounds each dimension towards positive infinity.
    pub fn ceil(&self) -> Size<i32> {
        Size::new(self.width.ceil() as i32, self.height.ceil() as i32)
    }

    /// Formats the size with `precision` decimals (clamped to 15).
    pub fn to_string_with_precision(&self, precision: usize) -> String {
        format!("{:.*}", precision, self)
    }
}

impl Mul<f64> for Size<f64> {
    type Output = Self;
    fn mul(self, factor: f64) -> Self {
        Size::new(self.width * factor, self.height * factor)
    }
}

impl Div<f64> for Size<f64> {
    type Output = Self;
    fn div(self, divisor: f64) -> Self {
        Size::new(self.width / divisor, self.height / divisor)
    }
}

impl<T: Scalar> fmt::Display for Size<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, &[self.width, self.height])
    }
}

impl<T: Scalar> FromStr for Size<T> {
    type Err = GeometryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut scanner = Scanner::new(s);
        let [width, height] = scanner.delimited::<T, 2>('(', ')')?;
        scanner.finish()?;
        Ok(Size::new(width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use static_assertions::assert_impl_all;

    assert_impl_all!(Size<i32>: std::fmt::Debug, Clone, Copy, PartialEq, Eq, std::hash::Hash, Default, Serialize, Send, Sync);
    assert_impl_all!(Size<f64>: std::fmt::Debug, Clone, Copy, PartialEq, Default, Serialize, Send, Sync);

    #[test]
    fn size_area() {
        assert_eq!(Size::new(10, 5).area(), 50);
        assert_eq!(Size::new(10.0, 0.5).area(), 5.0);
    }

    #[rstest]
    #[case(Size::new(10, 10), true, false)]
    #[case(Size::new(0, 10), false, true)]
    #[case(Size::new(10, 0), false, true)]
    #[case(Size::new(-1, 10), false, false)]
    #[case(Size::new(0, 0), false, true)]
    fn size_validity(#[case] s: Size<i32>, #[case] valid: bool, #[case] empty: bool) {
        assert_eq!(s.is_valid(), valid);
        assert_eq!(s.is_empty(), empty);
    }

    #[test]
    fn size_add_sub_are_inverse() {
        let a = Size::new(30, 40);
        let b = Size::new(-5, 12);
        assert_eq!((a + b) - b, a);

        let a = Size::new(1.5, 2.5);
        let b = Size::new(0.25, 4.0);
        assert_eq!((a + b) - b, a);
    }

    #[test]
    fn size_scalar_arithmetic() {
        assert_eq!(Size::new(3, 5).scale(0.5), Size::new(2, 2)); // 1.5 -> 2, 2.5 -> 2
        assert_eq!(Size::new(3.0, 5.0) * 2.0, Size::new(6.0, 10.0));
        assert_eq!(Size::new(3.0, 5.0) / 2.0, Size::new(1.5, 2.5));
        assert_eq!(Size::<f64>::from(Size::new(3, 5)), Size::new(3.0, 5.0));
    }

    #[test]
    fn size_float_rounding() {
        let s = Size::new(2.5, 3.2);
        assert_eq!(s.round(), Size::new(3, 3));
        assert_eq!(s.floor(), Size::new(2, 3));
        assert_eq!(s.ceil(), Size::new(3, 4));
        assert!(s.nearly_equal(&Size::new(2.5000001, 3.2), 1e-6));
        assert!(!s.nearly_equal(&Size::new(2.6, 3.2), 1e-6));
    }

    #[test]
    fn size_text() {
        assert_eq!(Size::new(640, 480).to_string(), "(640, 480)");
        assert_eq!(Size::new(1.0, 2.5).to_string_with_precision(2), "(1.00, 2.50)");
        assert_eq!("( 640 ,480 )".parse::<Size<i32>>(), Ok(Size::new(640, 480)));
        assert!("(640, 480".parse::<Size<i32>>().is_err());
        assert_eq!("(0.5, 1e1)".parse::<Size<f64>>(), Ok(Size::new(0.5, 10.0)));
    }

    #[test]
    fn size_serde() {
        let s = Size::<u32>::new(3, 4);
        let serialized = serde_json::to_string(&s).unwrap();
        let deserialized: Size<u32> = serde_json::from_str(&serialized).unwrap();
        assert_eq!(s, deserialized);
    }
}
