//! Display-box and transform descriptors for the presentation layer.

use core::fmt;

use crate::constraint::CalculatedSize;

/// A whole-pixel length. Renders as `"123px"`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Px(pub u32);

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Minimal display-box description for one image element.
///
/// Minimums equal the computed dimensions so the box cannot be squeezed
/// by surrounding flex/grid layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoxStyle {
    pub width: Px,
    pub height: Px,
    pub min_width: Px,
    pub min_height: Px,
}

/// Materialize a computed size into a display-box description.
pub fn box_style(size: &CalculatedSize) -> BoxStyle {
    BoxStyle {
        width: Px(size.width),
        height: Px(size.height),
        min_width: Px(size.width),
        min_height: Px(size.height),
    }
}

/// Composed horizontal-translate + scale transform.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform {
    /// Horizontal displacement in CSS pixels, negative leftward.
    pub translate_x: i32,
    /// Uniform scale factor.
    pub scale: f64,
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translateX({}px) scale({})", self.translate_x, self.scale)
    }
}
