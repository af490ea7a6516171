use clap::Parser;
use news_pipeline::{
    spawn_worker, ArticleStore, FetchConfig, Fetcher, Pipeline, RssFeedSource,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

const DEFAULT_FEEDS: &[&str] = &[
    "http://rss.cnn.com/rss/cnn_topstories.rss",
    "http://qz.com/feed",
    "http://feeds.foxnews.com/foxnews/politics",
    "http://feeds.reuters.com/reuters/businessNews",
    "http://feeds.feedburner.com/NewshourWorld",
    "https://feeds.bbci.co.uk/news/world/asia/india/rss.xml",
];

#[derive(Parser, Debug)]
#[command(name = "news-pipeline", about = "Ingest, classify and store news feeds")]
struct Cli {
    /// Path to the SQLite database file
    #[arg(long, default_value = "news_articles.db")]
    database: PathBuf,

    /// Feed URL to ingest; repeatable. Defaults to the built-in source list.
    #[arg(long = "feed")]
    feeds: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    info!("Starting news pipeline (database: {})", cli.database.display());

    let store = ArticleStore::connect(&cli.database).await.map_err(|e| {
        error!(
            "Failed to open article store at {}: {}",
            cli.database.display(),
            e
        );
        e
    })?;

    let (jobs, worker) = spawn_worker(store.clone());

    let fetcher = Arc::new(Fetcher::new(FetchConfig::default()));
    let mut pipeline = Pipeline::new(store, jobs);

    let feed_urls: Vec<String> = if cli.feeds.is_empty() {
        DEFAULT_FEEDS.iter().map(|s| s.to_string()).collect()
    } else {
        cli.feeds
    };

    for url in feed_urls {
        match RssFeedSource::new(url.clone(), fetcher.clone()) {
            Ok(source) => pipeline.add_source(Box::new(source)),
            Err(e) => error!("Skipping feed {}: {}", url, e),
        }
    }

    let summary = pipeline.run().await?;
    info!(
        "Run complete: {} fetched, {} stored, {} duplicates skipped",
        summary.fetched, summary.inserted, summary.duplicates
    );

    // Dropping the pipeline closes the job channel; the worker drains any
    // queued jobs before it exits.
    drop(pipeline);
    worker.await?;

    Ok(())
}
