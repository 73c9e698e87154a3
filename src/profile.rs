//! Viewport-derived layout constraint profiles.
//!
//! Three discrete viewport buckets — mobile below 640px, tablet below
//! 1024px, desktop at or above — each define per-role constraint boxes:
//! viewport-proportional maximums capped at fixed pixel ceilings, with
//! fixed minimums. Pure computation: the caller samples the viewport on
//! resize and re-resolves; nothing here subscribes to anything.

use crate::constraint::SizeConstraints;

/// Live viewport dimensions in CSS pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Desktop-sized fallback used before the first real measurement.
    pub const FALLBACK: Viewport = Viewport {
        width: 1200.0,
        height: 800.0,
    };

    /// Create a viewport from sampled dimensions.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Which size bucket this viewport falls in.
    pub fn class(&self) -> ViewportClass {
        ViewportClass::of(self.width)
    }
}

/// Discrete viewport size bucket.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    /// Width below 640px.
    Mobile,
    /// Width in 640..1024px.
    Tablet,
    /// Width at or above 1024px.
    Desktop,
}

impl ViewportClass {
    /// Classify a viewport width.
    pub fn of(width: f64) -> Self {
        if width < 640.0 {
            Self::Mobile
        } else if width < 1024.0 {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }
}

/// Constraint boxes for every layout role at one viewport size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutProfile {
    /// Focal image of the central carousel.
    pub central_main: SizeConstraints,
    /// Flanking neighbors of the focal image.
    pub central_side: SizeConstraints,
    /// Carousel thumbnail strip.
    pub central_thumbnail: SizeConstraints,
    /// Tiled grid item.
    pub grid_item: SizeConstraints,
    /// Story-view main image.
    pub story_main: SizeConstraints,
    /// Story-view preview image.
    pub story_preview: SizeConstraints,
}

impl LayoutProfile {
    /// Derive the profile for a viewport. Pure function of its inputs;
    /// callers re-resolve whenever the viewport changes.
    pub fn resolve(viewport: Viewport) -> Self {
        let w = viewport.width;
        let h = viewport.height;
        match viewport.class() {
            ViewportClass::Mobile => Self {
                central_main: SizeConstraints::new((w * 0.85).min(320.0), (h * 0.45).min(400.0))
                    .min(250.0, 200.0),
                central_side: SizeConstraints::new(120.0, 160.0).min(80.0, 100.0),
                central_thumbnail: SizeConstraints::new(60.0, 80.0).min(50.0, 60.0),
                grid_item: SizeConstraints::new((w * 0.42).min(180.0), (h * 0.25).min(240.0))
                    .min(120.0, 150.0),
                story_main: SizeConstraints::new((w * 0.9).min(350.0), (h * 0.5).min(450.0))
                    .min(280.0, 200.0),
                story_preview: SizeConstraints::new(100.0, 130.0).min(70.0, 90.0),
            },
            ViewportClass::Tablet => Self {
                central_main: SizeConstraints::new((w * 0.6).min(450.0), (h * 0.55).min(550.0))
                    .min(350.0, 280.0),
                central_side: SizeConstraints::new(160.0, 200.0).min(120.0, 150.0),
                central_thumbnail: SizeConstraints::new(80.0, 100.0).min(60.0, 75.0),
                grid_item: SizeConstraints::new((w * 0.28).min(250.0), (h * 0.35).min(320.0))
                    .min(180.0, 220.0),
                story_main: SizeConstraints::new((w * 0.7).min(500.0), (h * 0.6).min(600.0))
                    .min(400.0, 300.0),
                story_preview: SizeConstraints::new(120.0, 150.0).min(90.0, 110.0),
            },
            ViewportClass::Desktop => Self {
                central_main: SizeConstraints::new((w * 0.4).min(520.0), (h * 0.65).min(650.0))
                    .min(400.0, 320.0),
                central_side: SizeConstraints::new(192.0, 256.0).min(150.0, 200.0),
                central_thumbnail: SizeConstraints::new(96.0, 120.0).min(70.0, 90.0),
                grid_item: SizeConstraints::new((w * 0.22).min(300.0), (h * 0.4).min(400.0))
                    .min(220.0, 280.0),
                story_main: SizeConstraints::new((w * 0.5).min(600.0), (h * 0.7).min(700.0))
                    .min(450.0, 350.0),
                story_preview: SizeConstraints::new(140.0, 180.0).min(100.0, 130.0),
            },
        }
    }

    /// Profile for the fallback viewport, used when no viewport is
    /// observable yet.
    pub fn fallback() -> Self {
        Self::resolve(Viewport::FALLBACK)
    }
}
