//! Responsive gallery image sizing: dimension probing, constraint
//! profiles, and receding-carousel geometry.
//!
//! The geometry half ([`constraint`], [`profile`], [`carousel`],
//! [`style`]) is pure computation — aspect ratios in, concrete display
//! boxes out. The probing half ([`probe`], [`cache`], [`tracker`])
//! discovers intrinsic image dimensions at runtime over HTTP, memoizes
//! them process-wide, and exposes them through reactive state handles.
//!
//! # Modules
//!
//! - [`dimensions`] — intrinsic dimension records and load states
//! - [`probe`] — async dimension probing ([`HttpProber`] + the
//!   [`DimensionProber`] seam for tests)
//! - [`cache`] — process-wide memo store with in-flight coalescing
//! - [`tracker`] — single-resource and batch reactive trackers
//! - [`profile`] — viewport buckets and per-role constraint profiles
//! - [`constraint`] — optimal-size solver under min/max bounds
//! - [`carousel`] — receding side-image effect and masonry placement
//! - [`style`] — display-box and transform descriptors

#![forbid(unsafe_code)]

pub mod cache;
pub mod carousel;
pub mod constraint;
pub mod dimensions;
pub mod probe;
pub mod profile;
pub mod style;
pub mod tracker;

pub use cache::DimensionCache;
pub use carousel::{
    MASONRY_GAP, MasonryItem, MasonrySlot, SideImageLayout, SidePosition, compose_side,
    masonry_layout,
};
pub use constraint::{CalculatedSize, DEFAULT_MIN_EDGE, SizeConstraints, fit};
pub use dimensions::{ImageDimensions, LoadState};
pub use probe::{DimensionProber, HttpProber};
pub use profile::{LayoutProfile, Viewport, ViewportClass};
pub use style::{BoxStyle, Px, Transform, box_style};
pub use tracker::{BatchDimensionTracker, BatchDimensions, DimensionTracker};
