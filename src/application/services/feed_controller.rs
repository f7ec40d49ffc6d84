//! Paginated, query-scoped photo feed.
//!
//! The controller is owned by a single task. Searches run on spawned tasks
//! and hand their results back over a channel; only the owner applies them,
//! through [`FeedController::next_event`] or [`FeedController::try_next_event`].

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, trace, warn};

use crate::domain::entities::Photo;
use crate::domain::errors::SearchError;
use crate::domain::ports::SearchPort;

/// Query used before the user searches for anything.
pub const DEFAULT_QUERY: &str = "blue";

/// Photos requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Describes how the feed changed after a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedDelta {
    /// Number of photos the fetch delivered. They are the last `count` items.
    pub count: usize,
    /// True if the feed was replaced rather than extended.
    pub reset: bool,
}

/// Outcome of a fetch, as seen by the feed owner.
#[derive(Debug)]
pub enum FeedEvent {
    /// New photos landed in the feed.
    Updated(FeedDelta),
    /// The fetch failed. Items and page are unchanged.
    Failed(SearchError),
}

#[derive(Debug)]
struct FetchCompletion {
    generation: u64,
    page: u32,
    reset: bool,
    result: Result<Vec<Photo>, SearchError>,
}

/// Owns the feed state: current query, page cursor, loading guard and items.
///
/// At most one fetch per query is in flight. Changing the query starts a new
/// generation; completions from an older generation are dropped on arrival.
/// Pagination never stops on its own, an empty page is reported like any
/// other.
///
/// Fetches are spawned with `tokio::spawn`, so the mutating methods must be
/// called inside a Tokio runtime.
pub struct FeedController {
    search: Arc<dyn SearchPort>,
    page_size: u32,
    query: String,
    page: u32,
    is_loading: bool,
    has_requested: bool,
    generation: u64,
    items: Vec<Photo>,
    completion_tx: mpsc::UnboundedSender<FetchCompletion>,
    completion_rx: mpsc::UnboundedReceiver<FetchCompletion>,
}

impl std::fmt::Debug for FeedController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedController")
            .field("query", &self.query)
            .field("page", &self.page)
            .field("is_loading", &self.is_loading)
            .field("items", &self.items.len())
            .finish_non_exhaustive()
    }
}

impl FeedController {
    /// Creates an idle feed for `query`. Nothing is fetched until asked.
    #[must_use]
    pub fn new(search: Arc<dyn SearchPort>, query: impl Into<String>, page_size: u32) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        Self {
            search,
            page_size: page_size.max(1),
            query: query.into(),
            page: 1,
            is_loading: false,
            has_requested: false,
            generation: 0,
            items: Vec::new(),
            completion_tx,
            completion_rx,
        }
    }

    /// Creates an idle feed for the default query and page size.
    #[must_use]
    pub fn with_defaults(search: Arc<dyn SearchPort>) -> Self {
        Self::new(search, DEFAULT_QUERY, DEFAULT_PAGE_SIZE)
    }

    /// Current search term.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Page of the most recent request, starting at 1.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Photos requested per page.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// True while a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Photos in display order.
    #[must_use]
    pub fn items(&self) -> &[Photo] {
        &self.items
    }

    /// Number of loaded photos.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no photos are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Photo at `index`, if loaded.
    #[must_use]
    pub fn photo_at(&self, index: usize) -> Option<&Photo> {
        self.items.get(index)
    }

    /// The `count` most recent photos, as described by an append delta.
    #[must_use]
    pub fn last_items(&self, count: usize) -> &[Photo] {
        let start = self.items.len().saturating_sub(count);
        &self.items[start..]
    }

    /// Switches to `query`: page back to 1, items cleared, fresh fetch.
    ///
    /// Runs even while another fetch is in flight; that fetch's result is
    /// discarded when it arrives.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        info!(query = %self.query, "Feed query changed");
        self.restart();
    }

    /// Reloads the current query from page 1.
    pub fn refresh(&mut self) {
        debug!(query = %self.query, "Refreshing feed");
        self.restart();
    }

    /// Fetches page 1 of the current query if nothing was requested yet.
    /// Returns true if a fetch was dispatched.
    pub fn load_initial(&mut self) -> bool {
        if self.has_requested {
            return false;
        }
        self.restart();
        true
    }

    /// Requests the next page and appends it when it lands.
    ///
    /// Dropped (returns false) while a fetch is in flight. The very first
    /// request for a query fetches page 1. A failed page is not retried:
    /// the next call moves on to the following page.
    pub fn load_next_page(&mut self) -> bool {
        if self.is_loading {
            trace!(page = self.page, "Fetch in flight, ignoring load more");
            return false;
        }
        if self.has_requested {
            self.page += 1;
        }
        self.dispatch(false);
        true
    }

    fn restart(&mut self) {
        self.generation += 1;
        self.page = 1;
        self.items.clear();
        self.dispatch(true);
    }

    fn dispatch(&mut self, reset: bool) {
        self.is_loading = true;
        self.has_requested = true;

        let search = Arc::clone(&self.search);
        let tx = self.completion_tx.clone();
        let query = self.query.clone();
        let generation = self.generation;
        let page = self.page;
        let per_page = self.page_size;

        debug!(query = %query, page, reset, generation, "Dispatching feed fetch");

        tokio::spawn(async move {
            let result = search.search_photos(&query, page, per_page).await;
            let completion = FetchCompletion {
                generation,
                page,
                reset,
                result,
            };
            if tx.send(completion).is_err() {
                trace!("Feed dropped before fetch completed");
            }
        });
    }

    /// Waits for the in-flight fetch and applies it.
    ///
    /// Returns `None` immediately when nothing is loading.
    pub async fn next_event(&mut self) -> Option<FeedEvent> {
        while self.is_loading {
            let completion = self.completion_rx.recv().await?;
            if let Some(event) = self.apply_completion(completion) {
                return Some(event);
            }
        }
        None
    }

    /// Applies a completion that has already arrived, without waiting.
    pub fn try_next_event(&mut self) -> Option<FeedEvent> {
        while let Ok(completion) = self.completion_rx.try_recv() {
            if let Some(event) = self.apply_completion(completion) {
                return Some(event);
            }
        }
        None
    }

    fn apply_completion(&mut self, completion: FetchCompletion) -> Option<FeedEvent> {
        if completion.generation != self.generation {
            debug!(
                page = completion.page,
                stale = completion.generation,
                current = self.generation,
                "Discarding stale feed result"
            );
            return None;
        }

        self.is_loading = false;

        match completion.result {
            Ok(photos) => {
                let delta = FeedDelta {
                    count: photos.len(),
                    reset: completion.reset,
                };
                if completion.reset {
                    self.items = photos;
                } else {
                    self.items.extend(photos);
                }
                if delta.count == 0 {
                    debug!(page = completion.page, "Empty page received");
                }
                debug!(
                    page = completion.page,
                    count = delta.count,
                    reset = delta.reset,
                    total = self.items.len(),
                    "Feed updated"
                );
                Some(FeedEvent::Updated(delta))
            }
            Err(e) => {
                warn!(page = completion.page, error = %e, "Feed fetch failed");
                Some(FeedEvent::Failed(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::{MockSearchPort, SearchCall, make_photos};

    fn make_feed() -> (Arc<MockSearchPort>, FeedController) {
        let search = Arc::new(MockSearchPort::new());
        let feed = FeedController::with_defaults(search.clone());
        (search, feed)
    }

    fn expect_delta(event: Option<FeedEvent>) -> FeedDelta {
        match event {
            Some(FeedEvent::Updated(delta)) => delta,
            other => panic!("expected update, got {other:?}"),
        }
    }

    fn pages(search: &MockSearchPort) -> Vec<u32> {
        search.calls().iter().map(|c| c.page).collect()
    }

    #[tokio::test]
    async fn test_reset_then_append_scenario() {
        let (search, mut feed) = make_feed();
        search.push_page(make_photos("p1", 20));
        search.push_page(make_photos("p2", 5));

        feed.set_query("blue");
        let delta = expect_delta(feed.next_event().await);
        assert_eq!(delta, FeedDelta { count: 20, reset: true });
        assert_eq!(feed.len(), 20);

        assert!(feed.load_next_page());
        let delta = expect_delta(feed.next_event().await);
        assert_eq!(delta, FeedDelta { count: 5, reset: false });
        assert_eq!(feed.len(), 25);
        assert_eq!(feed.last_items(5)[0].id().as_str(), "p2-0");

        assert_eq!(
            search.calls(),
            vec![
                SearchCall { query: "blue".into(), page: 1, per_page: 20 },
                SearchCall { query: "blue".into(), page: 2, per_page: 20 },
            ]
        );
    }

    #[tokio::test]
    async fn test_set_query_resets_page_and_items() {
        let (search, mut feed) = make_feed();
        search.push_page(make_photos("a", 3));
        search.push_page(make_photos("b", 3));
        search.push_page(make_photos("red", 2));

        feed.load_initial();
        feed.next_event().await;
        feed.load_next_page();
        feed.next_event().await;
        assert_eq!(feed.page(), 2);
        assert_eq!(feed.len(), 6);

        feed.set_query("red");
        assert_eq!(feed.query(), "red");
        assert_eq!(feed.page(), 1);
        assert!(feed.is_empty());
        assert!(feed.is_loading());

        let delta = expect_delta(feed.next_event().await);
        assert!(delta.reset);
        assert_eq!(feed.len(), 2);
        assert_eq!(search.calls()[2].query, "red");
        assert_eq!(search.calls()[2].page, 1);
    }

    #[tokio::test]
    async fn test_load_next_page_while_loading_is_dropped() {
        let (search, mut feed) = make_feed();
        search.push_page(make_photos("a", 20));

        feed.set_query("blue");
        assert!(feed.is_loading());
        assert!(!feed.load_next_page());
        assert!(!feed.load_next_page());
        assert_eq!(feed.page(), 1);

        feed.next_event().await;
        assert!(!feed.is_loading());
        assert_eq!(search.calls().len(), 1);
        assert!(feed.next_event().await.is_none());
    }

    #[tokio::test]
    async fn test_first_load_next_page_stays_on_page_one() {
        let (search, mut feed) = make_feed();
        search.push_page(make_photos("a", 4));

        assert!(feed.load_next_page());
        assert_eq!(feed.page(), 1);

        let delta = expect_delta(feed.next_event().await);
        assert_eq!(delta, FeedDelta { count: 4, reset: false });
        assert_eq!(pages(&search), vec![1]);
    }

    #[tokio::test]
    async fn test_failed_load_more_keeps_items_and_consumes_page() {
        let (search, mut feed) = make_feed();
        search.push_page(make_photos("a", 3));
        search.push_error(SearchError::network("connection reset"));
        search.push_page(make_photos("c", 2));

        feed.load_initial();
        feed.next_event().await;

        feed.load_next_page();
        match feed.next_event().await {
            Some(FeedEvent::Failed(e)) => assert!(e.is_network_error()),
            other => panic!("expected failure, got {other:?}"),
        }
        assert!(!feed.is_loading());
        assert_eq!(feed.len(), 3);
        assert_eq!(feed.page(), 2);

        feed.load_next_page();
        expect_delta(feed.next_event().await);
        assert_eq!(pages(&search), vec![1, 2, 3]);
        assert_eq!(feed.len(), 5);
    }

    #[tokio::test]
    async fn test_failed_reset_keeps_cleared_items() {
        let (search, mut feed) = make_feed();
        search.push_page(make_photos("a", 3));
        search.push_error(SearchError::decode("bad json"));

        feed.load_initial();
        feed.next_event().await;

        feed.set_query("cats");
        assert!(matches!(
            feed.next_event().await,
            Some(FeedEvent::Failed(SearchError::Decode { .. }))
        ));
        assert!(feed.is_empty());
        assert_eq!(feed.page(), 1);
    }

    #[tokio::test]
    async fn test_empty_pages_never_stop_pagination() {
        let (search, mut feed) = make_feed();
        search.push_page(make_photos("a", 2));

        feed.load_initial();
        feed.next_event().await;

        for _ in 0..3 {
            assert!(feed.load_next_page());
            let delta = expect_delta(feed.next_event().await);
            assert_eq!(delta, FeedDelta { count: 0, reset: false });
        }

        assert_eq!(pages(&search), vec![1, 2, 3, 4]);
        assert_eq!(feed.len(), 2);
    }

    #[tokio::test]
    async fn test_stale_result_is_discarded() {
        let (search, mut feed) = make_feed();
        search.push_page(make_photos("old", 3));
        search.push_page(make_photos("new", 4));

        feed.set_query("old");
        feed.set_query("new");

        let delta = expect_delta(feed.next_event().await);
        assert_eq!(delta, FeedDelta { count: 4, reset: true });
        assert!(feed.items().iter().all(|p| p.id().as_str().starts_with("new-")));
        assert!(!feed.is_loading());
        assert!(feed.try_next_event().is_none());
        assert_eq!(search.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_load_initial_only_once() {
        let (search, mut feed) = make_feed();
        search.push_page(make_photos("a", 1));

        assert!(feed.load_initial());
        feed.next_event().await;
        assert!(!feed.load_initial());
        assert_eq!(search.calls().len(), 1);
        assert_eq!(search.calls()[0].query, DEFAULT_QUERY);
    }

    #[tokio::test]
    async fn test_refresh_replaces_items() {
        let (search, mut feed) = make_feed();
        search.push_page(make_photos("a", 3));
        search.push_page(make_photos("b", 3));
        search.push_page(make_photos("fresh", 1));

        feed.load_initial();
        feed.next_event().await;
        feed.load_next_page();
        feed.next_event().await;

        feed.refresh();
        let delta = expect_delta(feed.next_event().await);
        assert!(delta.reset);
        assert_eq!(feed.len(), 1);
        assert_eq!(feed.page(), 1);
        assert_eq!(search.calls()[2].query, DEFAULT_QUERY);
    }

    #[tokio::test]
    async fn test_try_next_event_without_fetch() {
        let (_search, mut feed) = make_feed();
        assert!(feed.try_next_event().is_none());
        assert!(feed.next_event().await.is_none());
    }

    #[tokio::test]
    async fn test_photo_at_out_of_range() {
        let (search, mut feed) = make_feed();
        search.push_page(make_photos("a", 2));
        feed.load_initial();
        feed.next_event().await;

        assert_eq!(feed.photo_at(1).map(|p| p.id().as_str()), Some("a-1"));
        assert!(feed.photo_at(2).is_none());
    }
}
