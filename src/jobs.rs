use crate::classifier::classify;
use crate::store::ArticleStore;
use crate::types::{PipelineError, Result};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

/// A named unit of asynchronous work. The caller never observes a return
/// value; execution is at-least-once on the worker side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    Reprocess,
}

/// Handle for enqueueing jobs. Enqueue failures are reported as
/// [`PipelineError::JobDispatch`] so callers can tell them apart from
/// store failures.
#[derive(Clone)]
pub struct JobQueue {
    sender: mpsc::UnboundedSender<Job>,
}

impl JobQueue {
    pub fn enqueue(&self, job: Job) -> Result<()> {
        self.sender
            .send(job)
            .map_err(|e| PipelineError::JobDispatch(e.to_string()))
    }
}

/// Spawn the background worker that drains the job channel.
///
/// The worker owns its store handle and communicates with the enqueueing
/// side only through the channel and the shared store. It exits once every
/// `JobQueue` clone has been dropped and the channel is drained.
pub fn spawn_worker(store: ArticleStore) -> (JobQueue, JoinHandle<()>) {
    let (sender, mut receiver) = mpsc::unbounded_channel();

    let handle = tokio::spawn(async move {
        while let Some(job) = receiver.recv().await {
            debug!("Running job: {:?}", job);
            match job {
                Job::Reprocess => match reprocess_unclassified(&store).await {
                    Ok(updated) => info!("Reprocess job updated {} articles", updated),
                    Err(e) => error!("Reprocess job failed: {}", e),
                },
            }
        }
        debug!("Job channel closed, worker exiting");
    });

    (JobQueue { sender }, handle)
}

/// Backfill categories for rows that were inserted without one.
///
/// Idempotent: classified rows never reappear in the unclassified query, so
/// a second run over the same state does nothing. This sweep exists as a
/// safety net for ingestion paths that leave `category` unset; the current
/// fetch path always classifies eagerly.
pub async fn reprocess_unclassified(store: &ArticleStore) -> Result<usize> {
    let articles = store.find_unclassified().await?;

    for article in &articles {
        let category = classify(&article.title, &article.description);
        store
            .update_category(&article.title, &article.source, category)
            .await?;
    }

    Ok(articles.len())
}
