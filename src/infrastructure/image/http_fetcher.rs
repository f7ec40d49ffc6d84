//! Network image fetcher.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

use crate::domain::ports::{CacheError, CacheResult, ImageFetchPort};

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Downloads images over HTTP and decodes them off the async runtime.
#[derive(Debug, Clone)]
pub struct HttpImageFetcher {
    http_client: reqwest::Client,
}

impl HttpImageFetcher {
    /// Creates a fetcher with the given request timeout.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new(timeout_secs: u64) -> CacheResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| CacheError::NetworkError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http_client })
    }

    /// Creates a fetcher with the default timeout.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn with_defaults() -> CacheResult<Self> {
        Self::new(DEFAULT_TIMEOUT_SECS)
    }

    async fn download(&self, url: &str) -> CacheResult<Bytes> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| CacheError::NetworkError(format!("Request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(CacheError::NetworkError(format!(
                "HTTP {}: {}",
                response.status(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .bytes()
            .await
            .map_err(|e| CacheError::NetworkError(format!("Failed to read body: {e}")))
    }
}

#[async_trait]
impl ImageFetchPort for HttpImageFetcher {
    async fn fetch_image(&self, url: &str) -> CacheResult<image::DynamicImage> {
        debug!(url = %url, "Downloading image");

        let bytes = self.download(url).await?;
        if bytes.is_empty() {
            return Err(CacheError::DecodeError("Empty body".to_string()));
        }

        tokio::task::spawn_blocking(move || image::load_from_memory(&bytes))
            .await
            .map_err(|e| CacheError::DecodeError(format!("Decode task panicked: {e}")))?
            .map_err(|e| CacheError::DecodeError(format!("Failed to decode image: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetcher_creation() {
        assert!(HttpImageFetcher::with_defaults().is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let fetcher = HttpImageFetcher::new(5).unwrap();
        let result = fetcher.fetch_image("http://127.0.0.1:1/photo.jpg").await;
        assert!(matches!(result, Err(CacheError::NetworkError(_))));
    }
}
