//! Receding-carousel and masonry-grid geometry.
//!
//! [`compose_side`] produces the deterministic receding effect for the
//! central carousel: flanking images shrink, fade, and drop in stacking
//! order as their offset from the focal image grows, independent of
//! which artworks occupy each slot. [`masonry_layout`] places grid items
//! into the shortest of N columns, waterfall style.
//!
//! # Example
//!
//! ```
//! use gallerysize::{LayoutProfile, SidePosition, compose_side};
//!
//! let profile = LayoutProfile::fallback();
//! let layout = compose_side(1.0, 1.0, 2, SidePosition::Left, &profile.central_side);
//!
//! assert_eq!(layout.transform.translate_x, -320);
//! assert_eq!(layout.opacity, 0.4);
//! assert_eq!(layout.z_index, 8);
//! ```

use crate::constraint::{CalculatedSize, SizeConstraints, fit};
use crate::style::Transform;

/// Which side of the focal image a neighbor sits on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SidePosition {
    Left,
    Right,
}

/// Concrete geometry for one side image: size, position, fade, stacking.
/// Ephemeral — recomputed on every render, never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct SideImageLayout {
    /// Display box from fitting the side image's aspect ratio into the
    /// central-side constraints.
    pub size: CalculatedSize,
    /// Horizontal displacement plus recede scale.
    pub transform: Transform,
    /// In `[0.1, 1.0]`; fades out by the third offset, never fully gone.
    pub opacity: f64,
    /// Nearer neighbors stack above farther ones, floored at 1.
    pub z_index: u32,
}

/// Nearest-neighbor displacement from the focal image, in CSS pixels.
const SIDE_BASE_OFFSET_PX: i32 = 200;
/// Additional displacement per offset step beyond the nearest.
const SIDE_STEP_PX: i32 = 120;

/// Compose the layout for a side image at `offset` slots from center
/// (offset 1 = nearest neighbor; 0 is clamped to 1).
///
/// The main image's aspect ratio is accepted alongside the side image's
/// for call-site symmetry, but the receding effect depends only on the
/// offset and position; sizing uses the side ratio alone.
pub fn compose_side(
    _main_aspect_ratio: f64,
    side_aspect_ratio: f64,
    offset: u32,
    position: SidePosition,
    side_constraints: &SizeConstraints,
) -> SideImageLayout {
    let offset = offset.max(1);
    let size = fit(side_aspect_ratio, side_constraints);

    let magnitude = SIDE_BASE_OFFSET_PX + (offset as i32 - 1) * SIDE_STEP_PX;
    let translate_x = match position {
        SidePosition::Left => -magnitude,
        SidePosition::Right => magnitude,
    };
    let scale = (1.0 - offset as f64 * 0.15).max(0.4);
    let opacity = (1.0 - offset as f64 * 0.3).max(0.1);
    let z_index = 10u32.saturating_sub(offset).max(1);

    SideImageLayout {
        size,
        transform: Transform { translate_x, scale },
        opacity,
        z_index,
    }
}

/// Vertical gap between stacked masonry items, in CSS pixels.
pub const MASONRY_GAP: f64 = 20.0;

/// One artwork entering masonry placement.
#[derive(Clone, Debug, PartialEq)]
pub struct MasonryItem {
    /// Caller's identifier for the artwork.
    pub id: String,
    /// Intrinsic aspect ratio (1.0 for unresolved images).
    pub aspect_ratio: f64,
}

/// One placed masonry item.
#[derive(Clone, Debug, PartialEq)]
pub struct MasonrySlot {
    pub id: String,
    pub size: CalculatedSize,
    /// Left edge within the container, in CSS pixels.
    pub x: f64,
    /// Top edge within the container, in CSS pixels.
    pub y: f64,
}

/// Waterfall placement: each item is fitted against the grid-item
/// constraints re-capped to 90% of the column width, dropped into the
/// currently shortest column, and centered horizontally within it.
pub fn masonry_layout(
    items: &[MasonryItem],
    container_width: f64,
    columns: usize,
    item_constraints: &SizeConstraints,
) -> Vec<MasonrySlot> {
    let columns = columns.max(1);
    let column_width = container_width / columns as f64;
    let mut column_heights = vec![0.0f64; columns];

    items
        .iter()
        .map(|item| {
            let adjusted = SizeConstraints {
                max_width: item_constraints.max_width.min(column_width * 0.9),
                ..*item_constraints
            };
            let size = fit(item.aspect_ratio, &adjusted);

            let col = shortest_column(&column_heights);
            let x = col as f64 * column_width + (column_width - size.width as f64) / 2.0;
            let y = column_heights[col];
            column_heights[col] += size.height as f64 + MASONRY_GAP;

            MasonrySlot {
                id: item.id.clone(),
                size,
                x,
                y,
            }
        })
        .collect()
}

fn shortest_column(heights: &[f64]) -> usize {
    let mut best = 0;
    for (i, h) in heights.iter().enumerate() {
        if *h < heights[best] {
            best = i;
        }
    }
    best
}
