//! Application layer with the feed, favorites and use cases.

/// Data transfer objects.
pub mod dto;
/// Feed, favorites and detail services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{KeySource, ResolvedAccessKey};
pub use services::{FavoritesStore, FeedController, FeedDelta, FeedEvent, PhotoDetails};
pub use use_cases::ResolveAccessKeyUseCase;
