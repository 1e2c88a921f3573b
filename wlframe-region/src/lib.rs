//! # wlframe regions (`wlframe-region`)
//!
//! A [`Region`] is a set of points in the plane stored as an ordered sequence
//! of axis-aligned float rectangles ([`RectF`]). It backs damage tracking,
//! input hit-testing and opaque-area bookkeeping.
//!
//! - Storage: append-only growth with a cached bounding box
//!   ([`Region::extents`]); allocation failures are reported as
//!   [`RegionError::Allocation`] and leave the region unchanged. Only finite
//!   rectangles are stored; anything else is [`RegionError::NonFinite`].
//! - Set operations: [`Region::add_rect`], [`Region::union`],
//!   [`Region::contains_point`], [`Region::intersects_rect`] and
//!   [`Region::intersect`]. Rectangles are never merged or split beyond
//!   clipping.
//! - Text: `Display` and `FromStr` round-trip the
//!   `{[x,y,w,h], [x,y,w,h]}` form.
//!
//! ```
//! use wlframe_core::types::RectF;
//! use wlframe_region::Region;
//!
//! let region: Region = "{[0,0,100,100], [150,150,50,50]}".parse().unwrap();
//! let hit = region.intersects_rect(&RectF::from_coords(90.0, 90.0, 20.0, 20.0)).unwrap();
//! assert_eq!(hit.to_string(), "{[90.000,90.000,10.000,10.000]}");
//! ```
//!
//! [`RectF`]: wlframe_core::types::RectF

pub mod error;
mod format;
pub mod region;

pub use error::RegionError;
pub use region::{Region, INITIAL_CAPACITY};
