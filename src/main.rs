use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use photofeed::application::{
    FavoritesStore, FeedController, FeedEvent, KeySource, PhotoDetails, ResolveAccessKeyUseCase,
};
use photofeed::domain::AccessKeyStoragePort;
use photofeed::infrastructure::{
    AppConfig, CliArgs, HttpImageFetcher, ImageCache, KeyringKeyStorage, StorageManager,
    UnsplashClient,
};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(config.log_level.to_tracing_level()).into())
        .from_env_lossy();

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<AppConfig> {
    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

async fn print_next_update(feed: &mut FeedController) {
    match feed.next_event().await {
        Some(FeedEvent::Updated(delta)) => {
            println!(
                "-- page {} of \"{}\": {} photos{}",
                feed.page(),
                feed.query(),
                delta.count,
                if delta.reset { " (new feed)" } else { "" }
            );
            for photo in feed.last_items(delta.count) {
                println!(
                    "{:<14} {:<28} {:<26} {}",
                    photo.id(),
                    photo.author_name(),
                    photo.created_at(),
                    photo.image_url()
                );
            }
        }
        Some(FeedEvent::Failed(e)) => eprintln!(
            "Failed to load photos: {e}{}",
            if e.is_recoverable() { " (try again later)" } else { "" }
        ),
        None => {}
    }
}

async fn run(args: CliArgs, config: AppConfig) -> Result<()> {
    let key_storage = Arc::new(KeyringKeyStorage::new());
    if args.forget_key {
        key_storage.delete_key().await?;
        println!("Stored access key removed");
        return Ok(());
    }

    let resolver = ResolveAccessKeyUseCase::new(key_storage);
    let resolved = resolver.execute(args.access_key.clone()).await?;

    if args.save_key && resolved.source == KeySource::CommandLine {
        if let Err(e) = resolver.persist(&resolved.key).await {
            warn!(error = %e, "Access key not saved");
        }
    }

    let client = Arc::new(UnsplashClient::with_base_url(
        config.api.base_url.clone(),
        resolved.key,
        config.api.timeout_secs,
    )?);
    let fetcher = Arc::new(HttpImageFetcher::new(config.image_cache.timeout_secs)?);
    let cache = Arc::new(ImageCache::new(fetcher, config.image_cache.flush_interval()));
    let mut favorites = FavoritesStore::new();
    let mut feed = FeedController::new(
        client,
        config.feed.default_query.clone(),
        config.feed.page_size,
    );

    feed.load_initial();
    print_next_update(&mut feed).await;

    for _ in 0..args.more_pages {
        if feed.load_next_page() {
            print_next_update(&mut feed).await;
        }
    }

    if let Some(first) = feed.photo_at(0).cloned() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        cache.resolve_in_background(first.image_url(), tx);

        if let Some(resolved) = rx.recv().await
            && resolved.url == first.image_url()
        {
            match resolved.image {
                Some(img) => println!(
                    "Thumbnail for {}: {}x{}",
                    first.id(),
                    img.width(),
                    img.height()
                ),
                None => println!("Thumbnail for {} unavailable", first.id()),
            }
        }

        if args.like_first {
            let details = PhotoDetails::new(first);
            let liked = details.toggle_favorite(&mut favorites);
            println!("{}\nFavorite: {liked} ({} total)", details.summary(), favorites.len());
        }
    }

    info!(stats = %cache.stats().await, "Session finished");

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();
    let config = load_config(&args)?;

    init_logging(&config)?;

    info!(version = photofeed::VERSION, "Starting {}", photofeed::NAME);

    run(args, config).await
}
