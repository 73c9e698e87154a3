//! Reactive dimension trackers.
//!
//! Trackers sit between consumers and the probe/cache pair. They own no
//! cache entries — only the identity of what is currently being watched —
//! and publish state through [`tokio::sync::watch`] channels so consumers
//! re-render on change instead of polling.
//!
//! [`DimensionTracker`] follows one resource at a time, last-request-wins:
//! a probe completion for a resource the tracker has moved past is
//! discarded, even if it arrives after the newer result. The guard is a
//! monotonic generation counter captured when the probe launches and
//! compared at completion — re-tracking the same URL in a new generation
//! is distinguishable from the original request.
//!
//! [`BatchDimensionTracker`] follows an ordered list concurrently and
//! accumulates results into a map, never re-probing anything it has
//! already resolved.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinSet;
use tracing::debug;

use crate::cache::DimensionCache;
use crate::dimensions::ImageDimensions;
use crate::probe::DimensionProber;

/// Follows the intrinsic dimensions of one resource at a time.
///
/// Must be used within a Tokio runtime: [`track`](Self::track) spawns the
/// probe task. Dropping the tracker invalidates any in-flight probe so a
/// late completion cannot touch defunct state.
pub struct DimensionTracker {
    cache: Arc<DimensionCache>,
    prober: Arc<dyn DimensionProber>,
    state: watch::Sender<ImageDimensions>,
    tracked: Mutex<Option<String>>,
    generation: Arc<AtomicU64>,
}

impl DimensionTracker {
    /// Tracker over the given cache and prober. Initial state is idle.
    pub fn new(cache: Arc<DimensionCache>, prober: Arc<dyn DimensionProber>) -> Self {
        let (state, _) = watch::channel(ImageDimensions::idle());
        Self {
            cache,
            prober,
            state,
            tracked: Mutex::new(None),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Begin tracking `url`.
    ///
    /// Tracking the URL already being tracked is a no-op. Otherwise the
    /// previous in-flight probe (if any) is superseded, a cache hit is
    /// reflected synchronously, and a miss publishes `Pending` and probes
    /// in the background.
    pub fn track(&self, url: &str) {
        let generation = {
            let mut tracked = self.tracked.lock();
            if tracked.as_deref() == Some(url) {
                return;
            }
            *tracked = Some(url.to_string());
            // Bumping under the lock orders generations with URL swaps.
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

            // Publish under the lock too: concurrent track() calls
            // serialize here, so a hit for a superseded URL cannot land
            // on top of the newer request's state.
            if let Some(hit) = self.cache.get(url) {
                self.state.send_replace(hit);
                return;
            }
            self.state.send_replace(ImageDimensions::pending());
            generation
        };

        let cache = self.cache.clone();
        let prober = self.prober.clone();
        let state = self.state.clone();
        let latest = self.generation.clone();
        let url = url.to_string();
        tokio::spawn(async move {
            let dims = cache.resolve(&url, prober.as_ref()).await;
            // Last-request-wins: apply only if no newer track() superseded
            // this probe and the tracker is still alive.
            if latest.load(Ordering::SeqCst) == generation {
                state.send_replace(dims);
            } else {
                debug!(url, "discarding stale probe result");
            }
        });
    }

    /// The latest published state.
    pub fn current(&self) -> ImageDimensions {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes. The receiver's
    /// [`changed`](watch::Receiver::changed) resolves on each update.
    pub fn subscribe(&self) -> watch::Receiver<ImageDimensions> {
        self.state.subscribe()
    }
}

impl Drop for DimensionTracker {
    fn drop(&mut self) {
        // Invalidate in-flight probes so their completions are discarded.
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

/// Accumulated state of a [`BatchDimensionTracker`].
#[derive(Clone, Debug, Default)]
pub struct BatchDimensions {
    /// Terminal results keyed by resource identifier.
    pub entries: HashMap<String, ImageDimensions>,
    /// Whether any probes are still in flight.
    pub loading: bool,
}

impl BatchDimensions {
    /// Result for `url`, if resolved.
    pub fn get(&self, url: &str) -> Option<&ImageDimensions> {
        self.entries.get(url)
    }
}

/// Probes an ordered list of resources concurrently and merges the
/// results into an accumulating map.
pub struct BatchDimensionTracker {
    cache: Arc<DimensionCache>,
    prober: Arc<dyn DimensionProber>,
    state: watch::Sender<BatchDimensions>,
    in_flight: Mutex<HashSet<String>>,
}

impl BatchDimensionTracker {
    /// Tracker over the given cache and prober.
    pub fn new(cache: Arc<DimensionCache>, prober: Arc<dyn DimensionProber>) -> Self {
        let (state, _) = watch::channel(BatchDimensions::default());
        Self {
            cache,
            prober,
            state,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Probe every URL in `urls` that this tracker has not already
    /// resolved or started. All fresh probes run concurrently, no cap —
    /// the catalog is bounded by a gallery's image count. Returns once
    /// every requested URL has a terminal entry in the map; individual
    /// results land incrementally as they arrive.
    ///
    /// Repeated calls with overlapping lists never repeat work: effort is
    /// idempotent per URL, not just outcome.
    pub async fn track_all<I, S>(&self, urls: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fresh: Vec<String> = {
            let resolved = self.state.borrow();
            let mut in_flight = self.in_flight.lock();
            urls.into_iter()
                .map(Into::into)
                .filter(|url| !resolved.entries.contains_key(url) && in_flight.insert(url.clone()))
                .collect()
        };
        if fresh.is_empty() {
            return;
        }
        debug!(count = fresh.len(), "launching batch dimension probes");
        self.state.send_modify(|s| s.loading = true);

        // URLs this call claimed but has not merged yet. If the future is
        // dropped mid-flight (consumer navigated away) or a probe task
        // panics, the guard hands them back so a later track_all can claim
        // them again instead of filtering them out as already started.
        let mut claimed = InFlightClaim {
            tracker: self,
            urls: fresh.iter().cloned().collect(),
        };

        let mut probes = JoinSet::new();
        for url in fresh {
            let cache = self.cache.clone();
            let prober = self.prober.clone();
            probes.spawn(async move {
                let dims = cache.resolve(&url, prober.as_ref()).await;
                (url, dims)
            });
        }

        // Single merge point: completions land in no particular order.
        while let Some(joined) = probes.join_next().await {
            // A panicked probe task yields Err with no URL attached; its
            // claim is released by the guard below.
            if let Ok((url, dims)) = joined {
                claimed.urls.remove(&url);
                self.in_flight.lock().remove(&url);
                self.state.send_modify(|s| {
                    s.entries.insert(url, dims);
                });
            }
        }

        drop(claimed);
        if self.in_flight.lock().is_empty() {
            self.state.send_modify(|s| s.loading = false);
        }
    }

    /// The latest accumulated state.
    pub fn current(&self) -> BatchDimensions {
        self.state.borrow().clone()
    }

    /// Subscribe to incremental merges.
    pub fn subscribe(&self) -> watch::Receiver<BatchDimensions> {
        self.state.subscribe()
    }
}

/// URLs a `track_all` call has claimed but not yet merged. Dropping the
/// claim — on cancellation, or after a panicked probe task — releases
/// them for re-probing and clears `loading` once nothing is in flight.
struct InFlightClaim<'a> {
    tracker: &'a BatchDimensionTracker,
    urls: HashSet<String>,
}

impl Drop for InFlightClaim<'_> {
    fn drop(&mut self) {
        if self.urls.is_empty() {
            return;
        }
        let mut in_flight = self.tracker.in_flight.lock();
        for url in self.urls.drain() {
            in_flight.remove(&url);
        }
        let idle = in_flight.is_empty();
        drop(in_flight);
        if idle {
            self.tracker.state.send_modify(|s| s.loading = false);
        }
    }
}
