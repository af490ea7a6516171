use crate::classifier::classify;
use crate::jobs::{Job, JobQueue};
use crate::sources::FeedSource;
use crate::store::ArticleStore;
use crate::types::{Article, Result};
use tracing::{error, info};

#[derive(Debug, Clone, Copy, Default)]
pub struct RunSummary {
    pub fetched: usize,
    pub inserted: usize,
    pub duplicates: usize,
}

/// Sequences one ingestion run: fetch all sources, store the combined
/// result, enqueue the reprocess sweep without waiting for it.
pub struct Pipeline {
    sources: Vec<Box<dyn FeedSource>>,
    store: ArticleStore,
    jobs: JobQueue,
}

impl Pipeline {
    pub fn new(store: ArticleStore, jobs: JobQueue) -> Self {
        Self {
            sources: Vec::new(),
            store,
            jobs,
        }
    }

    pub fn add_source(&mut self, source: Box<dyn FeedSource>) {
        info!("Adding source to pipeline: {}", source.url());
        self.sources.push(source);
    }

    /// Fetch every configured source in order, classifying each entry at
    /// extraction time. A failure for one source is logged and yields zero
    /// articles for that source; the remaining sources still run.
    pub async fn fetch_all(&self) -> Vec<Article> {
        let mut articles = Vec::new();

        for source in &self.sources {
            match source.entries().await {
                Ok(entries) => {
                    info!("Fetched {} entries from {}", entries.len(), source.url());
                    for entry in entries {
                        let category = classify(&entry.title, &entry.description);
                        articles.push(Article {
                            title: entry.title,
                            description: entry.description,
                            link: entry.link,
                            published_date: entry.published,
                            source: source.url().to_string(),
                            category: Some(category),
                        });
                    }
                }
                Err(e) => {
                    error!("Failed to fetch feed {}: {}", source.url(), e);
                }
            }
        }

        articles
    }

    /// One full run: fetch, store, enqueue the reprocess job. Success is
    /// determined solely by the fetch and store outcomes; job completion is
    /// decoupled and asynchronous.
    pub async fn run(&self) -> Result<RunSummary> {
        let articles = self.fetch_all().await;
        let fetched = articles.len();

        let stored = self.store.store_all(&articles).await?;

        self.jobs.enqueue(Job::Reprocess)?;

        Ok(RunSummary {
            fetched,
            inserted: stored.inserted,
            duplicates: stored.duplicates,
        })
    }
}
