//! Intrinsic image dimension records.
//!
//! An [`ImageDimensions`] is the outcome of probing one image resource:
//! its natural pixel width/height and the derived aspect ratio, tagged
//! with where the probe stands. A failed probe degrades to a neutral
//! square (aspect ratio 1.0, zero dimensions) so layout never breaks on
//! a missing image.

/// Where a dimension probe stands for one tracked resource.
///
/// `Ready` and `Failed` are terminal for a given request generation;
/// re-tracking the resource restarts at `Pending`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LoadState {
    /// Nothing requested yet.
    Idle,
    /// A probe is in flight.
    Pending,
    /// Intrinsic dimensions are known.
    Ready,
    /// The probe failed; dimensions are the neutral square fallback.
    Failed,
}

/// Intrinsic pixel dimensions of one image resource.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageDimensions {
    /// Natural width in pixels. Zero unless `Ready`.
    pub width: u32,
    /// Natural height in pixels. Zero unless `Ready`.
    pub height: u32,
    /// `width / height` when `Ready`; 1.0 (neutral square) otherwise.
    pub aspect_ratio: f64,
    /// Probe state this record represents.
    pub load_state: LoadState,
    /// Human-readable failure detail, set only when `Failed`.
    pub error: Option<String>,
}

impl ImageDimensions {
    /// The initial record before anything has been tracked.
    pub fn idle() -> Self {
        Self {
            width: 0,
            height: 0,
            aspect_ratio: 1.0,
            load_state: LoadState::Idle,
            error: None,
        }
    }

    /// A probe is in flight; dimensions unknown.
    pub fn pending() -> Self {
        Self {
            load_state: LoadState::Pending,
            ..Self::idle()
        }
    }

    /// A successful probe. The aspect ratio is always recomputed from the
    /// measured dimensions; a degenerate zero height yields 1.0.
    pub fn ready(width: u32, height: u32) -> Self {
        let aspect_ratio = if height == 0 {
            1.0
        } else {
            width as f64 / height as f64
        };
        Self {
            width,
            height,
            aspect_ratio,
            load_state: LoadState::Ready,
            error: None,
        }
    }

    /// A failed probe: zero dimensions, neutral square aspect ratio.
    pub fn failed(detail: impl Into<String>) -> Self {
        Self {
            load_state: LoadState::Failed,
            error: Some(detail.into()),
            ..Self::idle()
        }
    }

    /// Whether dimensions were successfully measured.
    pub fn is_ready(&self) -> bool {
        self.load_state == LoadState::Ready
    }

    /// Whether the probe reached a terminal state (success or failure).
    pub fn is_terminal(&self) -> bool {
        matches!(self.load_state, LoadState::Ready | LoadState::Failed)
    }
}

impl Default for ImageDimensions {
    fn default() -> Self {
        Self::idle()
    }
}
