//! Photo search port definition.

use async_trait::async_trait;

use crate::domain::entities::Photo;
use crate::domain::errors::SearchError;

/// Port for the paged photo search endpoint.
///
/// Calls may complete in any order relative to each other.
#[async_trait]
pub trait SearchPort: Send + Sync {
    /// Fetches one page of results for `query`.
    ///
    /// `page` starts at 1 and `per_page` must be positive. Only the photos
    /// of the page are returned; server-side totals are not consulted.
    async fn search_photos(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Photo>, SearchError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::VecDeque;

    use parking_lot::Mutex;

    /// Arguments of a recorded search call.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SearchCall {
        pub query: String,
        pub page: u32,
        pub per_page: u32,
    }

    /// Builds `count` photos with ids `{prefix}-0`, `{prefix}-1`, ...
    pub fn make_photos(prefix: &str, count: usize) -> Vec<Photo> {
        (0..count)
            .map(|i| {
                Photo::new(
                    format!("{prefix}-{i}"),
                    "2025-02-05T10:00:00Z",
                    format!("Author {i}"),
                    format!("https://images.example.com/{prefix}/{i}.jpg"),
                )
            })
            .collect()
    }

    /// Mock search port returning scripted responses in call order.
    /// Once the script runs out every call yields an empty page.
    #[derive(Default)]
    pub struct MockSearchPort {
        responses: Mutex<VecDeque<Result<Vec<Photo>, SearchError>>>,
        calls: Mutex<Vec<SearchCall>>,
    }

    impl MockSearchPort {
        /// Creates mock with no scripted responses.
        pub fn new() -> Self {
            Self::default()
        }

        /// Queues a successful page.
        pub fn push_page(&self, photos: Vec<Photo>) {
            self.responses.lock().push_back(Ok(photos));
        }

        /// Queues a failure.
        pub fn push_error(&self, error: SearchError) {
            self.responses.lock().push_back(Err(error));
        }

        /// Returns every call made so far.
        pub fn calls(&self) -> Vec<SearchCall> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl SearchPort for MockSearchPort {
        async fn search_photos(
            &self,
            query: &str,
            page: u32,
            per_page: u32,
        ) -> Result<Vec<Photo>, SearchError> {
            self.calls.lock().push(SearchCall {
                query: query.to_string(),
                page,
                per_page,
            });
            self.responses.lock().pop_front().unwrap_or_else(|| Ok(Vec::new()))
        }
    }
}
