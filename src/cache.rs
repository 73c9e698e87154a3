//! Process-wide dimension memo store.
//!
//! Keyed by resource identifier, shared by all probing requests. Entries
//! never expire: the artwork catalog is small and fixed per session, so
//! an append-only map stays bounded. Failures are cached too — a broken
//! URL is probed once, not on every render.
//!
//! Concurrent [`resolve`](DimensionCache::resolve) calls for the same
//! URL coalesce onto a single probe; late joiners wait on the in-flight
//! result instead of issuing a duplicate fetch.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::debug;

use crate::dimensions::ImageDimensions;
use crate::probe::DimensionProber;

enum Slot {
    /// Terminal result (success or failure).
    Ready(ImageDimensions),
    /// A probe is in flight; joiners wait on this channel.
    Pending(watch::Receiver<Option<ImageDimensions>>),
}

enum Claim {
    Hit(ImageDimensions),
    Wait(watch::Receiver<Option<ImageDimensions>>),
    Probe(watch::Sender<Option<ImageDimensions>>),
}

/// Memo store mapping resource identifiers to measured dimensions.
///
/// Constructible for test isolation; [`DimensionCache::global`] provides
/// the process-wide instance the application shares.
#[derive(Default)]
pub struct DimensionCache {
    slots: Mutex<HashMap<String, Slot>>,
}

impl DimensionCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide shared cache.
    pub fn global() -> Arc<DimensionCache> {
        static GLOBAL: OnceLock<Arc<DimensionCache>> = OnceLock::new();
        GLOBAL.get_or_init(|| Arc::new(DimensionCache::new())).clone()
    }

    /// Terminal entry for `url`, if one exists. In-flight probes are not
    /// visible here.
    pub fn get(&self, url: &str) -> Option<ImageDimensions> {
        match self.slots.lock().get(url) {
            Some(Slot::Ready(d)) => Some(d.clone()),
            _ => None,
        }
    }

    /// Record a terminal result, overwriting any prior entry for `url`.
    pub fn insert(&self, url: &str, dims: ImageDimensions) {
        self.slots.lock().insert(url.to_string(), Slot::Ready(dims));
    }

    /// Read-through resolve: a cached terminal entry returns immediately;
    /// otherwise probe once and write the result back, success or failure.
    ///
    /// Concurrent calls for the same URL share one probe. If the future
    /// that owns the in-flight probe is dropped mid-fetch, a waiter takes
    /// over and probes itself.
    pub async fn resolve(&self, url: &str, prober: &dyn DimensionProber) -> ImageDimensions {
        loop {
            let claim = {
                let mut slots = self.slots.lock();
                match slots.get(url) {
                    Some(Slot::Ready(d)) => Claim::Hit(d.clone()),
                    Some(Slot::Pending(rx)) => Claim::Wait(rx.clone()),
                    None => {
                        let (tx, rx) = watch::channel(None);
                        slots.insert(url.to_string(), Slot::Pending(rx));
                        Claim::Probe(tx)
                    }
                }
            };

            match claim {
                Claim::Hit(d) => {
                    debug!(url, "dimension cache hit");
                    return d;
                }
                Claim::Probe(tx) => {
                    let dims = prober.probe(url).await;
                    self.insert(url, dims.clone());
                    let _ = tx.send(Some(dims.clone()));
                    return dims;
                }
                Claim::Wait(mut rx) => {
                    debug!(url, "joining in-flight probe");
                    if let Some(d) = rx.borrow_and_update().as_ref().cloned() {
                        return d;
                    }
                    if rx.changed().await.is_ok()
                        && let Some(d) = rx.borrow().as_ref().cloned()
                    {
                        return d;
                    }
                    // The probing future was dropped without publishing.
                    // Clear the orphaned slot (unless a newer probe already
                    // replaced it) and retry from scratch.
                    let mut slots = self.slots.lock();
                    if let Some(Slot::Pending(cur)) = slots.get(url)
                        && cur.has_changed().is_err()
                    {
                        slots.remove(url);
                    }
                }
            }
        }
    }

    /// Explicit re-request: probe again and overwrite whatever is cached,
    /// including a prior failure. This is the only path that replaces an
    /// existing terminal entry.
    pub async fn refresh(&self, url: &str, prober: &dyn DimensionProber) -> ImageDimensions {
        let dims = prober.probe(url).await;
        self.insert(url, dims.clone());
        dims
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimensions::LoadState;

    #[test]
    fn get_misses_on_empty() {
        let cache = DimensionCache::new();
        assert!(cache.get("https://a/1.jpg").is_none());
    }

    #[test]
    fn insert_then_get_round_trips() {
        let cache = DimensionCache::new();
        cache.insert("https://a/1.jpg", ImageDimensions::ready(800, 600));
        let d = cache.get("https://a/1.jpg").unwrap();
        assert_eq!((d.width, d.height), (800, 600));
    }

    #[test]
    fn failures_are_cached_verbatim() {
        let cache = DimensionCache::new();
        let failure = ImageDimensions::failed("failed to load image https://a/404.jpg");
        cache.insert("https://a/404.jpg", failure.clone());
        assert_eq!(cache.get("https://a/404.jpg").unwrap(), failure);
    }

    #[test]
    fn insert_overwrites_failed_entry() {
        let cache = DimensionCache::new();
        cache.insert("https://a/1.jpg", ImageDimensions::failed("transient"));
        cache.insert("https://a/1.jpg", ImageDimensions::ready(100, 100));
        assert_eq!(
            cache.get("https://a/1.jpg").unwrap().load_state,
            LoadState::Ready
        );
    }

    #[test]
    fn global_is_shared() {
        let a = DimensionCache::global();
        let b = DimensionCache::global();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
