//! Set-like operations on rectangles.

use num_traits::Num;

use super::Rect;

#[inline]
fn partial_min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

#[inline]
fn partial_max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

impl<T: Num + Copy + PartialOrd> Rect<T> {
    /// Checks whether two valid rectangles share a non-empty area.
    ///
    /// Rectangles that merely touch along an edge do not intersect. Returns
    /// `false` if either rectangle has a non-positive width or height.
    pub fn intersects(&self, other: &Self) -> bool {
        self.is_valid()
            && other.is_valid()
            && self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Calculates the overlapping area of two rectangles.
    ///
    /// Returns `None` exactly when [`Rect::intersects`] is `false`. Callers that
    /// want the zero rectangle in that case can use `unwrap_or_default()`.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }
        let left = partial_max(self.left(), other.left());
        let top = partial_max(self.top(), other.top());
        let right = partial_min(self.right(), other.right());
        let bottom = partial_min(self.bottom(), other.bottom());
        Some(Rect::from_coords(left, top, right - left, bottom - top))
    }

    /// Smallest rectangle containing both.
    ///
    /// An empty operand is not ignored: its origin still counts as a corner.
    pub fn union(&self, other: &Self) -> Self {
        let left = partial_min(self.left(), other.left());
        let top = partial_min(self.top(), other.top());
        let right = partial_max(self.right(), other.right());
        let bottom = partial_max(self.bottom(), other.bottom());
        Rect::from_coords(left, top, right - left, bottom - top)
    }

    /// Checks whether `other` lies entirely within this rectangle, edges included.
    pub fn contains_rect(&self, other: &Self) -> bool {
        other.left() >= self.left()
            && other.top() >= self.top()
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Point, RectF, RectInt};
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(RectInt::from_coords(0, 0, 10, 10), RectInt::from_coords(5, 5, 10, 10), Some(RectInt::from_coords(5, 5, 5, 5)))]
    #[case(RectInt::from_coords(0, 0, 10, 10), RectInt::from_coords(2, 2, 3, 3), Some(RectInt::from_coords(2, 2, 3, 3)))]
    #[case(RectInt::from_coords(0, 0, 10, 10), RectInt::from_coords(10, 0, 10, 10), None)] // edge touch
    #[case(RectInt::from_coords(0, 0, 10, 10), RectInt::from_coords(20, 20, 5, 5), None)]
    #[case(RectInt::from_coords(0, 0, 10, 10), RectInt::from_coords(2, 2, 0, 5), None)] // empty operand
    #[case(RectInt::from_coords(0, 0, 10, 10), RectInt::from_coords(2, 2, -5, 5), None)] // invalid operand
    fn test_intersection(#[case] a: RectInt, #[case] b: RectInt, #[case] expected: Option<RectInt>) {
        assert_eq!(a.intersection(&b), expected);
        assert_eq!(b.intersection(&a), expected);
        assert_eq!(a.intersects(&b), expected.is_some());
        assert_eq!(b.intersects(&a), expected.is_some());
    }

    #[test]
    fn test_disjoint_intersection_defaults_to_zero() {
        let a = RectF::from_coords(0.0, 0.0, 1.0, 1.0);
        let b = RectF::from_coords(5.0, 5.0, 1.0, 1.0);
        assert_eq!(a.intersection(&b).unwrap_or_default(), RectF::ZERO);
    }

    #[test]
    fn test_intersection_is_contained_in_both() {
        let a = RectF::from_coords(0.0, 0.0, 10.0, 10.0);
        let b = RectF::from_coords(2.5, -4.0, 20.0, 6.0);
        let i = a.intersection(&b).unwrap();
        assert_eq!(i, RectF::from_coords(2.5, 0.0, 7.5, 2.0));
        assert!(a.contains_rect(&i));
        assert!(b.contains_rect(&i));
    }

    #[test]
    fn test_intersection_is_idempotent() {
        let a = RectInt::from_coords(3, -7, 11, 4);
        assert_eq!(a.intersection(&a), Some(a));
        let f = RectF::from_coords(0.5, 0.25, 8.0, 2.0);
        assert_eq!(f.intersection(&f), Some(f));
    }

    #[test]
    fn test_intersection_is_associative() {
        let rects = [
            RectInt::from_coords(0, 0, 10, 10),
            RectInt::from_coords(5, -2, 10, 6),
            RectInt::from_coords(3, 1, 4, 20),
            RectInt::from_coords(20, 20, 1, 1),
        ];
        for a in &rects {
            for b in &rects {
                for c in &rects {
                    let left = a.intersection(b).and_then(|ab| ab.intersection(c));
                    let right = b.intersection(c).and_then(|bc| a.intersection(&bc));
                    assert_eq!(left, right, "{a} {b} {c}");
                }
            }
        }
    }

    #[rstest]
    #[case(RectInt::from_coords(0, 0, 10, 10), RectInt::from_coords(5, 5, 10, 10), RectInt::from_coords(0, 0, 15, 15))]
    #[case(RectInt::from_coords(0, 0, 10, 10), RectInt::from_coords(20, 20, 5, 5), RectInt::from_coords(0, 0, 25, 25))]
    #[case(RectInt::from_coords(-5, 3, 2, 2), RectInt::from_coords(0, 0, 1, 1), RectInt::from_coords(-5, 0, 6, 5))]
    fn test_union(#[case] a: RectInt, #[case] b: RectInt, #[case] expected: RectInt) {
        let u = a.union(&b);
        assert_eq!(u, expected);
        assert_eq!(b.union(&a), expected);
        assert!(u.contains_rect(&a));
        assert!(u.contains_rect(&b));
    }

    #[test]
    fn test_union_with_empty_rect_counts_its_origin() {
        let a = RectInt::from_coords(10, 10, 5, 5);
        assert_eq!(a.union(&RectInt::ZERO), RectInt::from_coords(0, 0, 15, 15));
    }

    #[test]
    fn test_contains_rect() {
        let outer = RectInt::from_coords(0, 0, 10, 10);
        assert!(outer.contains_rect(&outer));
        assert!(outer.contains_rect(&RectInt::from_coords(0, 0, 10, 5)));
        assert!(outer.contains_rect(&RectInt::from_coords(2, 2, 3, 3)));
        assert!(!outer.contains_rect(&RectInt::from_coords(5, 5, 10, 10)));
        assert!(!outer.contains_rect(&RectInt::from_coords(-1, 0, 2, 2)));
    }

    #[test]
    fn test_inflate_contains_original() {
        let r = RectInt::from_coords(10, 20, 30, 40);
        for d in [0, 1, 7, 100] {
            assert!(r.inflate(d, d).contains_rect(&r));
        }
        let f = RectF::from_coords(0.5, 0.5, 1.0, 1.0);
        assert!(f.inflate(0.25, 2.0).contains_rect(&f));
    }

    #[test]
    fn test_contained_points_are_in_containers() {
        let inner = RectInt::from_coords(2, 2, 3, 3);
        let outer = RectInt::from_coords(0, 0, 10, 10);
        for x in 2..5 {
            for y in 2..5 {
                let p = Point::new(x, y);
                assert!(inner.contains_point(&p));
                assert!(outer.contains_point(&p));
            }
        }
    }
}
