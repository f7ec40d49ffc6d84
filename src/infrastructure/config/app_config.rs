//! Application configuration.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use super::args::CliArgs;
use crate::application::services::{DEFAULT_PAGE_SIZE, DEFAULT_QUERY};
use crate::infrastructure::image::DEFAULT_FLUSH_INTERVAL;
use crate::infrastructure::unsplash::UNSPLASH_API_BASE;

const APP_NAME: &str = "photofeed";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "photofeed";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl LogLevel {
    /// Converts to tracing level.
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, loaded from TOML and overridden by CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Feed configuration.
    #[serde(default)]
    pub feed: FeedConfig,

    /// Search API configuration.
    #[serde(default)]
    pub api: ApiConfig,

    /// Image cache configuration.
    #[serde(default)]
    pub image_cache: ImageCacheConfig,
}

/// Feed configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Query shown before the user searches.
    #[serde(default = "default_query")]
    pub default_query: String,

    /// Photos requested per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            default_query: default_query(),
            page_size: default_page_size(),
        }
    }
}

/// Search API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API host, without the search path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Image cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageCacheConfig {
    /// Seconds between full cache flushes.
    #[serde(default = "default_flush_interval_secs")]
    pub flush_interval_secs: u64,

    /// Image download timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ImageCacheConfig {
    /// Flush interval as a `Duration`.
    #[must_use]
    pub const fn flush_interval(&self) -> Duration {
        Duration::from_secs(self.flush_interval_secs)
    }
}

impl Default for ImageCacheConfig {
    fn default() -> Self {
        Self {
            flush_interval_secs: default_flush_interval_secs(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_query() -> String {
    DEFAULT_QUERY.to_string()
}

const fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_base_url() -> String {
    UNSPLASH_API_BASE.to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_flush_interval_secs() -> u64 {
    DEFAULT_FLUSH_INTERVAL.as_secs()
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(config_path) = &args.config {
            self.config = Some(config_path.clone());
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(query) = args.query.as_ref().filter(|q| !q.trim().is_empty()) {
            self.feed.default_query = query.clone();
        }
        if let Some(page_size) = args.page_size {
            self.feed.page_size = page_size;
        }
        if let Some(base_url) = &args.base_url {
            self.api.base_url = base_url.clone();
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("photofeed.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            feed: FeedConfig::default(),
            api: ApiConfig::default(),
            image_cache: ImageCacheConfig::default(),
        }
    }
}
