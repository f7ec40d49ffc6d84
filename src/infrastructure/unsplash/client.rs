//! Photo search API HTTP client.

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, warn};

use super::dto::SearchResponse;
use crate::domain::entities::{AccessKey, Photo, SearchPage};
use crate::domain::errors::SearchError;
use crate::domain::ports::SearchPort;

/// Default API host.
pub const UNSPLASH_API_BASE: &str = "https://api.unsplash.com";
const SEARCH_PATH: &str = "/search/photos";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Search API client. Sends the access key as the `client_id` parameter.
pub struct UnsplashClient {
    client: Client,
    base_url: String,
    access_key: AccessKey,
}

impl std::fmt::Debug for UnsplashClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnsplashClient")
            .field("base_url", &self.base_url)
            .field("access_key", &self.access_key)
            .finish_non_exhaustive()
    }
}

impl UnsplashClient {
    /// Creates new client against the default API host.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(access_key: AccessKey) -> Result<Self, SearchError> {
        Self::with_base_url(UNSPLASH_API_BASE, access_key, DEFAULT_TIMEOUT_SECS)
    }

    /// Creates client with custom base URL and request timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(
        base_url: impl Into<String>,
        access_key: AccessKey,
        timeout_secs: u64,
    ) -> Result<Self, SearchError> {
        let client = Client::builder()
            .user_agent(concat!("photofeed/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| SearchError::network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            access_key,
        })
    }

    /// Builds the request URL for one page of `query`.
    ///
    /// # Errors
    /// Returns `InvalidUrl` if the base URL is malformed or paging arguments are zero.
    pub fn search_url(&self, query: &str, page: u32, per_page: u32) -> Result<Url, SearchError> {
        if page == 0 {
            return Err(SearchError::invalid_url("page must be at least 1"));
        }
        if per_page == 0 {
            return Err(SearchError::invalid_url("per_page must be positive"));
        }

        let base = self.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}{SEARCH_PATH}"))
            .map_err(|e| SearchError::invalid_url(format!("{}: {e}", self.base_url)))?;

        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("per_page", &per_page.to_string())
            .append_pair("query", query)
            .append_pair("client_id", self.access_key.as_str());

        Ok(url)
    }

    /// Fetches one page including the server-reported totals.
    ///
    /// # Errors
    /// Returns `Network` on transport failure or non-success status,
    /// `NoData` on an empty body and `Decode` on a malformed body.
    pub async fn fetch_page(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<SearchPage, SearchError> {
        let url = self.search_url(query, page, per_page)?;

        debug!(query = %query, page, per_page, "Requesting search page");

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(error = %e, "Failed to reach search API");
            if e.is_timeout() {
                SearchError::network("request timed out")
            } else if e.is_connect() {
                SearchError::network(format!("failed to connect: {e}"))
            } else {
                SearchError::network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::network(format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SearchError::network(format!("failed to read body: {e}")))?;

        if body.is_empty() {
            return Err(SearchError::NoData);
        }

        let envelope: SearchResponse = serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "Failed to parse search response");
            SearchError::decode(e.to_string())
        })?;

        debug!(
            query = %query,
            page,
            results = envelope.results.len(),
            total_pages = envelope.total_pages,
            "Search page received"
        );

        Ok(envelope.into())
    }
}

#[async_trait]
impl SearchPort for UnsplashClient {
    async fn search_photos(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Photo>, SearchError> {
        // TODO: expose total_pages to the feed once product decides whether
        // pagination should stop after the last reported page.
        self.fetch_page(query, page, per_page)
            .await
            .map(SearchPage::into_results)
    }
}
