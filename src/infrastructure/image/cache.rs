//! In-memory image cache with periodic full flush.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use tokio::sync::{RwLock, mpsc};
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};
use tracing::{debug, info, trace, warn};

use crate::domain::ports::{CacheError, ImageFetchPort};

/// Default interval between full cache flushes.
pub const DEFAULT_FLUSH_INTERVAL: Duration = Duration::from_secs(300);

/// Shortest accepted flush interval.
const MIN_FLUSH_INTERVAL: Duration = Duration::from_secs(1);

type EntryMap = HashMap<String, Arc<image::DynamicImage>>;

/// Message sent when a background resolution finishes.
#[derive(Debug, Clone)]
pub struct ImageResolved {
    /// URL that was requested. Compare it with what the target slot
    /// currently shows before applying `image`.
    pub url: String,
    /// The image, or `None` if it could not be obtained.
    pub image: Option<Arc<image::DynamicImage>>,
}

/// Statistics about cache usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Resolutions answered from the cache.
    pub hits: u64,
    /// Resolutions not found in the cache.
    pub misses: u64,
    /// Network fetches issued.
    pub fetches: u64,
    /// Current number of cached images.
    pub size: usize,
}

impl std::fmt::Display for CacheStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cache: {} images ({} hits, {} misses, {} fetches)",
            self.size, self.hits, self.misses, self.fetches
        )
    }
}

/// Maps image URLs to decoded images.
///
/// Entries are never evicted one by one. A background task started by the
/// constructor drops every entry once per flush interval and is stopped
/// when the cache is dropped. Concurrent requests for the same uncached URL
/// may each hit the network; the last one to finish wins the slot.
///
/// Must be constructed inside a Tokio runtime.
pub struct ImageCache {
    entries: Arc<RwLock<EntryMap>>,
    fetcher: Arc<dyn ImageFetchPort>,
    flush_task: JoinHandle<()>,
    hits: AtomicU64,
    misses: AtomicU64,
    fetches: AtomicU64,
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("hits", &self.hits.load(Ordering::Relaxed))
            .field("misses", &self.misses.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl ImageCache {
    /// Creates a cache that flushes every `flush_interval`.
    #[must_use]
    pub fn new(fetcher: Arc<dyn ImageFetchPort>, flush_interval: Duration) -> Self {
        let entries = Arc::new(RwLock::new(EntryMap::new()));
        let flush_task = Self::spawn_flush_task(
            Arc::downgrade(&entries),
            flush_interval.max(MIN_FLUSH_INTERVAL),
        );

        Self {
            entries,
            fetcher,
            flush_task,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            fetches: AtomicU64::new(0),
        }
    }

    /// Creates a cache with the default flush interval.
    #[must_use]
    pub fn with_default_interval(fetcher: Arc<dyn ImageFetchPort>) -> Self {
        Self::new(fetcher, DEFAULT_FLUSH_INTERVAL)
    }

    fn spawn_flush_task(entries: Weak<RwLock<EntryMap>>, period: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                let Some(entries) = entries.upgrade() else {
                    break;
                };
                let mut map = entries.write().await;
                let count = map.len();
                map.clear();
                info!(count, "Image cache flushed");
            }
        })
    }

    /// Resolves `url` to an image.
    ///
    /// Cached images are returned without touching the network. Malformed
    /// URLs and failed downloads resolve to `None`; errors are logged and
    /// never returned.
    pub async fn resolve(&self, url: &str) -> Option<Arc<image::DynamicImage>> {
        let cached = self.entries.read().await.get(url).cloned();
        if let Some(img) = cached {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(url = %url, "Image cache hit");
            return Some(img);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        trace!(url = %url, "Image cache miss");

        if let Err(e) = validate_url(url) {
            debug!(error = %e, "Skipping image with malformed URL");
            return None;
        }

        self.fetches.fetch_add(1, Ordering::Relaxed);
        match self.fetcher.fetch_image(url).await {
            Ok(decoded) => {
                let img = Arc::new(decoded);
                self.entries
                    .write()
                    .await
                    .insert(url.to_string(), Arc::clone(&img));
                debug!(url = %url, "Image stored in cache");
                Some(img)
            }
            Err(e) => {
                warn!(url = %url, error = %e, "Image fetch failed");
                None
            }
        }
    }

    /// Resolves `url` on a separate task and reports the outcome on `events`.
    pub fn resolve_in_background(
        self: &Arc<Self>,
        url: impl Into<String>,
        events: mpsc::UnboundedSender<ImageResolved>,
    ) {
        let cache = Arc::clone(self);
        let url = url.into();
        tokio::spawn(async move {
            let image = cache.resolve(&url).await;
            if events.send(ImageResolved { url, image }).is_err() {
                trace!("Image event receiver dropped");
            }
        });
    }

    /// Returns true if `url` is currently cached.
    pub async fn contains(&self, url: &str) -> bool {
        self.entries.read().await.contains_key(url)
    }

    /// Returns the number of cached images.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if nothing is cached.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Drops every cached image immediately.
    pub async fn flush(&self) {
        self.entries.write().await.clear();
        debug!("Image cache flushed on request");
    }

    /// Returns usage statistics.
    pub async fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            fetches: self.fetches.load(Ordering::Relaxed),
            size: self.len().await,
        }
    }

    #[cfg(test)]
    fn flush_task_finished(&self) -> bool {
        self.flush_task.is_finished()
    }
}

impl Drop for ImageCache {
    fn drop(&mut self) {
        self.flush_task.abort();
    }
}

fn validate_url(url: &str) -> Result<(), CacheError> {
    let parsed =
        reqwest::Url::parse(url).map_err(|e| CacheError::InvalidUrl(format!("{url}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(CacheError::InvalidUrl(format!(
            "{url}: unsupported scheme {other}"
        ))),
    }
}
