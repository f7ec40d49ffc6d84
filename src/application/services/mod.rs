//! Application services.

pub mod favorites;
pub mod feed_controller;
pub mod photo_details;

pub use favorites::FavoritesStore;
pub use feed_controller::{
    DEFAULT_PAGE_SIZE, DEFAULT_QUERY, FeedController, FeedDelta, FeedEvent,
};
pub use photo_details::PhotoDetails;
