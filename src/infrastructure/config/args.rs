//! Command-line arguments.

use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command-line overrides for the configuration file.
#[derive(Debug, Parser)]
#[command(
    name = "photofeed",
    version,
    about = "Browse a paginated photo search feed",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Search query. Defaults to the configured query.
    #[arg(short, long)]
    pub query: Option<String>,

    /// Additional pages to load after the first one.
    #[arg(long, default_value_t = 0)]
    pub more_pages: u32,

    /// Photos per page.
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Search API host.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Search API access key. Used when none is stored in the keyring.
    #[arg(long, env = "PHOTOFEED_ACCESS_KEY", hide_env_values = true)]
    pub access_key: Option<String>,

    /// Store the access key in the system keyring.
    #[arg(long)]
    pub save_key: bool,

    /// Remove the access key from the system keyring and exit.
    #[arg(long, conflicts_with = "save_key")]
    pub forget_key: bool,

    /// Mark the first photo of the feed as a favorite.
    #[arg(long)]
    pub like_first: bool,
}
