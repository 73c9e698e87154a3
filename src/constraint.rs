//! Optimal display-size computation under min/max bounds.
//!
//! Fits an aspect ratio into a constraint box: inside the maximums,
//! no smaller than the minimums, aspect ratio preserved. Pure geometry —
//! no I/O, no allocations.
//!
//! # Example
//!
//! ```
//! use gallerysize::{SizeConstraints, fit};
//!
//! let constraints = SizeConstraints::new(500.0, 200.0);
//! let size = fit(2.0, &constraints);
//!
//! // 2:1 landscape is height-bound at 200px → 400×200
//! assert_eq!((size.width, size.height), (400, 200));
//! assert_eq!(size.scale, 0.8);
//! ```

/// Default minimum edge length, applied when a profile doesn't set one.
pub const DEFAULT_MIN_EDGE: f64 = 100.0;

/// Min/max bounds for one layout role.
///
/// A well-formed profile keeps `min ≤ max` on both axes. When that is
/// violated, [`fit`] still terminates and resolves deterministically:
/// minimums win (see the algorithm notes on `fit`).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SizeConstraints {
    /// Upper bound on display width, in CSS pixels.
    pub max_width: f64,
    /// Upper bound on display height, in CSS pixels.
    pub max_height: f64,
    /// Lower bound on display width. Defaults to [`DEFAULT_MIN_EDGE`].
    pub min_width: f64,
    /// Lower bound on display height. Defaults to [`DEFAULT_MIN_EDGE`].
    pub min_height: f64,
}

impl SizeConstraints {
    /// Create constraints with the given maximums and default minimums.
    pub const fn new(max_width: f64, max_height: f64) -> Self {
        Self {
            max_width,
            max_height,
            min_width: DEFAULT_MIN_EDGE,
            min_height: DEFAULT_MIN_EDGE,
        }
    }

    /// Set explicit minimums.
    pub const fn min(mut self, min_width: f64, min_height: f64) -> Self {
        self.min_width = min_width;
        self.min_height = min_height;
        self
    }
}

/// A concrete display box computed by [`fit`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CalculatedSize {
    /// Display width in whole CSS pixels.
    pub width: u32,
    /// Display height in whole CSS pixels.
    pub height: u32,
    /// How far the box deviates from the max envelope:
    /// `min(width/max_width, height/max_height)`, rounded to 2 decimals.
    /// Diagnostic only — not used for further layout.
    pub scale: f64,
}

impl CalculatedSize {
    /// Width/height as a ratio. Returns 1.0 for a zero-height box.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f64 / self.height as f64
        }
    }
}

/// Fit an aspect ratio into a constraint box.
///
/// Landscape (`aspect_ratio > 1`) starts from `max_width` and derives the
/// height; if the height overflows `max_height`, the box is re-derived from
/// `max_height` instead. Portrait and square start from `max_height`,
/// symmetrically. Minimums are clamped last, so a minimum can push the other
/// axis back above its maximum: minimums take precedence when the two
/// conflict, since a box too small to read is worse than minor overflow.
/// That also resolves malformed profiles (`min > max`) deterministically.
///
/// Non-positive or non-finite aspect ratios are treated as 1.0 — the neutral
/// square a failed dimension probe reports.
///
/// Returned width/height are rounded to whole pixels.
pub fn fit(aspect_ratio: f64, constraints: &SizeConstraints) -> CalculatedSize {
    let aspect = if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
        aspect_ratio
    } else {
        1.0
    };
    let c = constraints;

    let mut width;
    let mut height;
    if aspect > 1.0 {
        width = c.max_width;
        height = width / aspect;
        if height > c.max_height {
            height = c.max_height;
            width = height * aspect;
        }
        if width < c.min_width {
            width = c.min_width;
            height = width / aspect;
        }
        if height < c.min_height {
            height = c.min_height;
            width = height * aspect;
        }
    } else {
        height = c.max_height;
        width = height * aspect;
        if width > c.max_width {
            width = c.max_width;
            height = width / aspect;
        }
        if height < c.min_height {
            height = c.min_height;
            width = height * aspect;
        }
        if width < c.min_width {
            width = c.min_width;
            height = width / aspect;
        }
    }

    let scale = (width / c.max_width).min(height / c.max_height);

    CalculatedSize {
        width: width.round() as u32,
        height: height.round() as u32,
        scale: round2(scale),
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(max_w: f64, max_h: f64, min_w: f64, min_h: f64) -> SizeConstraints {
        SizeConstraints::new(max_w, max_h).min(min_w, min_h)
    }

    // ── pinned scenarios ────────────────────────────────────────────────

    #[test]
    fn landscape_height_bound() {
        // 2:1 into 500×200 → width pass gives 500×250, height overflows,
        // re-derive from height: 400×200.
        let s = fit(2.0, &c(500.0, 200.0, 100.0, 100.0));
        assert_eq!((s.width, s.height), (400, 200));
        assert_eq!(s.scale, 0.8);
    }

    #[test]
    fn portrait_exact_max_width() {
        // 1:2 into 300×600 → height pass gives 300×600; width equals
        // max_width exactly, no reclamp.
        let s = fit(0.5, &c(300.0, 600.0, 100.0, 100.0));
        assert_eq!((s.width, s.height), (300, 600));
        assert_eq!(s.scale, 1.0);
    }

    #[test]
    fn square_fills_shorter_axis() {
        let s = fit(1.0, &c(400.0, 300.0, 100.0, 100.0));
        assert_eq!((s.width, s.height), (300, 300));
        assert_eq!(s.scale, 0.75);
    }

    // ── bounds and minimum precedence ───────────────────────────────────

    #[test]
    fn within_bounds_when_profile_is_sane() {
        for aspect in [0.25, 0.5, 0.75, 1.0, 1.5, 2.0, 3.0, 8.0] {
            let constraints = c(500.0, 400.0, 50.0, 50.0);
            let s = fit(aspect, &constraints);
            assert!(s.width as f64 <= constraints.max_width + 0.5, "{aspect}");
            assert!(s.height as f64 <= constraints.max_height + 0.5, "{aspect}");
            assert!(s.width as f64 >= constraints.min_width - 0.5, "{aspect}");
            assert!(s.height as f64 >= constraints.min_height - 0.5, "{aspect}");
        }
    }

    #[test]
    fn min_width_pushes_height_above_max() {
        // Extreme landscape: 10:1 into 500×200, min 300×100.
        // Width pass: 500×50 → height < min_height → 1000×100.
        // Width overflows max_width; minimums win.
        let s = fit(10.0, &c(500.0, 200.0, 300.0, 100.0));
        assert_eq!((s.width, s.height), (1000, 100));
    }

    #[test]
    fn min_height_pushes_width_above_max_portrait() {
        // Extreme portrait: 1:10 into 300×600, min 100×100.
        // Height pass: 60×600 → width < min_width → 100×1000.
        let s = fit(0.1, &c(300.0, 600.0, 100.0, 100.0));
        assert_eq!((s.width, s.height), (100, 1000));
    }

    #[test]
    fn malformed_profile_minimums_win() {
        // min_width > max_width: the minimum-priority rule still applies,
        // producing a box that exceeds the stated maximum. Intentional.
        let s = fit(1.0, &c(200.0, 200.0, 300.0, 100.0));
        assert_eq!((s.width, s.height), (300, 300));
    }

    // ── purity and aspect preservation ──────────────────────────────────

    #[test]
    fn idempotent() {
        let constraints = c(512.0, 384.0, 96.0, 96.0);
        let a = fit(1.7777, &constraints);
        let b = fit(1.7777, &constraints);
        assert_eq!(a, b);
        assert_eq!(a.scale.to_bits(), b.scale.to_bits());
    }

    #[test]
    fn preserves_aspect_within_a_pixel() {
        for aspect in [0.33, 0.5, 1.0, 1.25, 1.6180, 2.35] {
            let s = fit(aspect, &c(500.0, 400.0, 100.0, 100.0));
            let reconstructed = s.height as f64 * aspect;
            assert!(
                (reconstructed - s.width as f64).abs() <= 1.0,
                "aspect {aspect}: {}×{}",
                s.width,
                s.height
            );
        }
    }

    // ── degenerate inputs ───────────────────────────────────────────────

    #[test]
    fn non_positive_aspect_treated_as_square() {
        let constraints = c(400.0, 300.0, 100.0, 100.0);
        assert_eq!(fit(0.0, &constraints), fit(1.0, &constraints));
        assert_eq!(fit(-2.0, &constraints), fit(1.0, &constraints));
        assert_eq!(fit(f64::NAN, &constraints), fit(1.0, &constraints));
    }

    #[test]
    fn default_minimums_applied() {
        let constraints = SizeConstraints::new(400.0, 300.0);
        assert_eq!(constraints.min_width, DEFAULT_MIN_EDGE);
        assert_eq!(constraints.min_height, DEFAULT_MIN_EDGE);
    }

    #[test]
    fn aspect_ratio_accessor() {
        let s = fit(2.0, &c(500.0, 200.0, 100.0, 100.0));
        assert!((s.aspect_ratio() - 2.0).abs() < 0.01);
    }
}
