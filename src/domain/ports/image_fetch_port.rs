//! Port definition for downloading images.

use async_trait::async_trait;

/// Result type for image fetch operations.
pub type CacheResult<T> = std::result::Result<T, CacheError>;

/// Errors that can occur while fetching an image.
/// The image cache never surfaces these to its callers.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CacheError {
    /// The URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// Failed to decode image.
    #[error("Decode error: {0}")]
    DecodeError(String),
    /// Network error during download.
    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Port for downloading and decoding a single image.
/// Implementations must be thread-safe.
#[async_trait]
pub trait ImageFetchPort: Send + Sync {
    /// Downloads the image at `url` and decodes it.
    async fn fetch_image(&self, url: &str) -> CacheResult<image::DynamicImage>;
}
