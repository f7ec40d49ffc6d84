//! Image handling infrastructure.
//!
//! This module provides:
//! - An in-memory URL-keyed cache with a periodic full flush
//! - An HTTP fetcher that downloads and decodes images

pub mod cache;
pub mod http_fetcher;

pub use cache::{CacheStats, DEFAULT_FLUSH_INTERVAL, ImageCache, ImageResolved};
pub use http_fetcher::HttpImageFetcher;
