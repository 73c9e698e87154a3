//! Asynchronous intrinsic-dimension probing.
//!
//! A prober answers one question about a resource identifier: what are
//! the natural pixel dimensions behind it? [`HttpProber`] fetches the
//! bytes and reads the header-declared dimensions without a full decode.
//!
//! Probing never fails at the type level — transport and format errors
//! resolve to a [`ImageDimensions::failed`] record naming the URL, so a
//! broken image degrades to a neutral square instead of breaking layout.

use std::io::Cursor;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

use crate::dimensions::ImageDimensions;

/// Determines intrinsic dimensions for a resource identifier.
///
/// Implementations must resolve every call: on failure, return
/// [`ImageDimensions::failed`] rather than panicking or hanging by
/// contract. Trackers hold probers as trait objects so tests can
/// substitute deterministic fakes.
#[async_trait]
pub trait DimensionProber: Send + Sync {
    /// Probe one resource. At most one underlying fetch per call.
    async fn probe(&self, url: &str) -> ImageDimensions;
}

/// Why a single probe attempt failed. Internal taxonomy — always folded
/// into a `Failed` record at the probe boundary.
#[derive(Debug, Error)]
enum ProbeError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
    #[error("unreadable image data: {0}")]
    Unreadable(#[from] std::io::Error),
    #[error("undecodable image: {0}")]
    Undecodable(#[from] image::ImageError),
    #[error("unsupported url scheme")]
    Scheme,
}

/// Probes images over HTTP(S).
///
/// Fetches the resource bytes and sniffs the format header for
/// dimensions. No timeout is applied: a hung transfer leaves the caller
/// pending indefinitely, mirroring the platform image pipeline this
/// replaces. Callers wanting deadlines can supply a configured client
/// via [`HttpProber::with_client`].
pub struct HttpProber {
    client: reqwest::Client,
}

impl HttpProber {
    /// Prober with a default client.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Prober over a caller-configured client (proxies, timeouts, UA).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn fetch_dimensions(&self, url: &str) -> Result<(u32, u32), ProbeError> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ProbeError::Scheme);
        }
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::Status(status));
        }
        let bytes = response.bytes().await?;
        let reader = image::ImageReader::new(Cursor::new(bytes.as_ref())).with_guessed_format()?;
        Ok(reader.into_dimensions()?)
    }
}

impl Default for HttpProber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DimensionProber for HttpProber {
    async fn probe(&self, url: &str) -> ImageDimensions {
        match self.fetch_dimensions(url).await {
            Ok((width, height)) => {
                debug!(url, width, height, "probed intrinsic dimensions");
                ImageDimensions::ready(width, height)
            }
            Err(e) => {
                warn!(url, error = %e, "image probe failed");
                ImageDimensions::failed(format!("failed to load image {url}: {e}"))
            }
        }
    }
}
