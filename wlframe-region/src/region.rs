//! The [`Region`] container and its set operations.
//!
//! A region is an ordered sequence of float rectangles. Its point set is the
//! union of the stored rectangles; overlaps and duplicates are allowed and never
//! merged. A bounding box over all rectangles is cached alongside the sequence.
//! Every stored component is finite, so the textual form always reads back.

use serde::{Deserialize, Serialize};
use wlframe_core::types::{PointF, RectF};

use crate::error::RegionError;

/// Number of rectangles a fresh region has room for.
pub const INITIAL_CAPACITY: usize = 4;

/// A set of points represented as a sequence of axis-aligned rectangles.
///
/// ```
/// use wlframe_core::types::RectF;
/// use wlframe_region::Region;
///
/// let mut damage = Region::new();
/// damage.add_rect(RectF::from_coords(0.0, 0.0, 100.0, 100.0)).unwrap();
/// damage.add_rect(RectF::from_coords(150.0, 150.0, 50.0, 50.0)).unwrap();
///
/// assert!(damage.contains_point(10.0, 10.0));
/// assert!(!damage.contains_point(125.0, 125.0));
/// assert_eq!(damage.extents(), Some(RectF::from_coords(0.0, 0.0, 200.0, 200.0)));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<RectF>", into = "Vec<RectF>")]
pub struct Region {
    /// Bounding box of `rects`; meaningless while `rects` is empty.
    extents: RectF,
    rects: Vec<RectF>,
}

impl Region {
    /// Creates a nil region with room for [`INITIAL_CAPACITY`] rectangles.
    pub fn new() -> Self {
        Self {
            extents: RectF::ZERO,
            rects: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Like [`Region::new`], but reports a failed initial allocation instead
    /// of aborting.
    pub fn try_new() -> Result<Self, RegionError> {
        let mut rects = Vec::new();
        rects
            .try_reserve_exact(INITIAL_CAPACITY)
            .map_err(|source| allocation_failed(INITIAL_CAPACITY, source))?;
        Ok(Self {
            extents: RectF::ZERO,
            rects,
        })
    }

    /// Returns `true` if the region stores no rectangles.
    pub fn is_nil(&self) -> bool {
        self.rects.is_empty()
    }

    /// Same as [`Region::is_nil`].
    pub fn is_empty(&self) -> bool {
        self.is_nil()
    }

    /// Number of stored rectangles.
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Number of rectangles the region can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.rects.capacity()
    }

    /// The stored rectangles, in insertion order.
    pub fn rects(&self) -> &[RectF] {
        &self.rects
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RectF> {
        self.rects.iter()
    }

    /// The bounding box of all stored rectangles, or `None` for a nil region.
    pub fn extents(&self) -> Option<RectF> {
        if self.is_nil() {
            None
        } else {
            Some(self.extents)
        }
    }

    /// Removes every rectangle, keeping the allocated storage.
    pub fn clear(&mut self) {
        self.rects.clear();
        self.extents = RectF::ZERO;
    }

    /// Appends `rect`, growing the storage if needed.
    ///
    /// Empty and duplicate rectangles are stored as given. A rectangle with an
    /// infinite or NaN component is rejected. On failure the region is left
    /// unchanged.
    pub fn add_rect(&mut self, rect: RectF) -> Result<(), RegionError> {
        check_finite(&rect, self.len())?;
        self.reserve_for(1)?;
        self.push_reserved(rect);
        Ok(())
    }

    /// Appends every rectangle of `iter` with [`Region::add_rect`] semantics.
    ///
    /// On failure the rectangles appended by this call are removed again, so
    /// the region is left as it was.
    pub fn try_extend<I>(&mut self, iter: I) -> Result<(), RegionError>
    where
        I: IntoIterator<Item = RectF>,
    {
        let len = self.rects.len();
        let extents = self.extents;
        for rect in iter {
            if let Err(err) = self.add_rect(rect) {
                self.rects.truncate(len);
                self.extents = extents;
                return Err(err);
            }
        }
        Ok(())
    }

    /// Appends every rectangle of `src`, in order, with [`Region::add_rect`]
    /// semantics.
    ///
    /// Room for all of `src` is reserved up front, so on failure `self` is
    /// unchanged.
    pub fn union(&mut self, src: &Region) -> Result<(), RegionError> {
        self.reserve_for(src.len())?;
        for rect in &src.rects {
            self.push_reserved(*rect);
        }
        Ok(())
    }

    /// Checks whether `(x, y)` lies in any stored rectangle (half-open).
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        let point = PointF::new(x, y);
        self.rects.iter().any(|r| r.contains_point(&point))
    }

    /// Checks whether any stored rectangle shares area with `rect`.
    pub fn intersects(&self, rect: &RectF) -> bool {
        self.rects.iter().any(|r| r.intersects(rect))
    }

    /// Clips every stored rectangle against `rect`.
    ///
    /// The result holds `r ∩ rect` for each stored `r` that meets `rect`, in
    /// storage order, and is nil iff none does.
    pub fn intersects_rect(&self, rect: &RectF) -> Result<Region, RegionError> {
        let mut result = Region::try_new()?;
        for clipped in self.rects.iter().filter_map(|r| r.intersection(rect)) {
            result.add_rect(clipped)?;
        }
        tracing::trace!(input = self.len(), output = result.len(), "clipped region against rect");
        Ok(result)
    }

    /// Pairwise intersection of two regions.
    ///
    /// The result holds every non-empty `a ∩ b` for `a` in `self` and `b` in
    /// `other`, iterating `self` in the outer loop. No merging is done, so a
    /// region intersected with itself has up to `len²` rectangles.
    pub fn intersect(&self, other: &Region) -> Result<Region, RegionError> {
        let mut result = Region::try_new()?;
        for a in &self.rects {
            for clipped in other.rects.iter().filter_map(|b| a.intersection(b)) {
                result.add_rect(clipped)?;
            }
        }
        tracing::trace!(
            lhs = self.len(),
            rhs = other.len(),
            output = result.len(),
            "intersected regions"
        );
        Ok(result)
    }

    /// Compares two regions rectangle by rectangle with tolerance `epsilon`.
    pub fn nearly_equal(&self, other: &Region, epsilon: f64) -> bool {
        self.len() == other.len()
            && self
                .rects
                .iter()
                .zip(&other.rects)
                .all(|(a, b)| a.nearly_equal(b, epsilon))
    }

    /// Makes room for `additional` more rectangles, doubling the capacity.
    fn reserve_for(&mut self, additional: usize) -> Result<(), RegionError> {
        let len = self.rects.len();
        let capacity = self.rects.capacity();
        let required = len.checked_add(additional).unwrap_or(usize::MAX);
        if required <= capacity {
            return Ok(());
        }

        let mut target = capacity.max(INITIAL_CAPACITY);
        while target < required {
            target = target.saturating_mul(2);
        }
        self.rects
            .try_reserve_exact(target - len)
            .map_err(|source| allocation_failed(target, source))?;
        tracing::trace!(from = capacity, to = self.rects.capacity(), "grew region storage");
        Ok(())
    }

    /// Pushes `rect` into already reserved storage and extends the extents.
    fn push_reserved(&mut self, rect: RectF) {
        self.extents = if self.rects.is_empty() {
            rect
        } else {
            self.extents.union(&rect)
        };
        self.rects.push(rect);
    }
}

fn check_finite(rect: &RectF, index: usize) -> Result<(), RegionError> {
    if rect.is_finite() {
        Ok(())
    } else {
        tracing::debug!(index, ?rect, "rejected non-finite rectangle");
        Err(RegionError::NonFinite { index })
    }
}

fn allocation_failed(requested: usize, source: std::collections::TryReserveError) -> RegionError {
    tracing::debug!(requested, error = %source, "region allocation failed");
    RegionError::Allocation { requested, source }
}

/// Left fold of rectangle union over `rects`, the same order
/// [`Region::add_rect`] applies it in.
fn envelope(rects: &[RectF]) -> RectF {
    let mut iter = rects.iter();
    match iter.next() {
        Some(first) => iter.fold(*first, |acc, r| acc.union(r)),
        None => RectF::ZERO,
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::new()
    }
}

/// Regions are equal when they store the same rectangles in the same order.
impl PartialEq for Region {
    fn eq(&self, other: &Self) -> bool {
        self.rects == other.rects
    }
}

/// Builds a region from a rectangle sequence, rejecting non-finite rectangles.
/// The storage keeps at least [`INITIAL_CAPACITY`] slots.
impl TryFrom<Vec<RectF>> for Region {
    type Error = RegionError;

    fn try_from(mut rects: Vec<RectF>) -> Result<Self, Self::Error> {
        for (index, rect) in rects.iter().enumerate() {
            check_finite(rect, index)?;
        }
        let missing = INITIAL_CAPACITY.saturating_sub(rects.len());
        rects
            .try_reserve_exact(missing)
            .map_err(|source| allocation_failed(INITIAL_CAPACITY, source))?;
        Ok(Self {
            extents: envelope(&rects),
            rects,
        })
    }
}

impl From<Region> for Vec<RectF> {
    fn from(region: Region) -> Self {
        region.rects
    }
}

impl TryFrom<RectF> for Region {
    type Error = RegionError;

    fn try_from(rect: RectF) -> Result<Self, Self::Error> {
        let mut region = Region::try_new()?;
        region.add_rect(rect)?;
        Ok(region)
    }
}

impl<'a> IntoIterator for &'a Region {
    type Item = &'a RectF;
    type IntoIter = std::slice::Iter<'a, RectF>;

    fn into_iter(self) -> Self::IntoIter {
        self.rects.iter()
    }
}
