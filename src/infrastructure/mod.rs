//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Image fetching and caching.
pub mod image;
/// Access key storage adapters.
pub mod storage;
/// Photo search API client.
pub mod unsplash;

pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, StorageManager};
pub use self::image::{CacheStats, HttpImageFetcher, ImageCache, ImageResolved};
pub use storage::KeyringKeyStorage;
pub use unsplash::UnsplashClient;
