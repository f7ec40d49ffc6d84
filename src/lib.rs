//! Photofeed - a paginated photo search feed.
//!
//! This crate provides the core of a photo browsing client with clean
//! architecture: a search API client, a paginated feed, an image cache with
//! periodic flushing and an in-memory favorites list.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the feed, favorites and use cases.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "photofeed";
