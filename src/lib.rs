pub mod classifier;
pub mod fetcher;
pub mod jobs;
pub mod parser;
pub mod pipeline;
pub mod sources;
pub mod store;
pub mod types;

pub use classifier::classify;
pub use fetcher::Fetcher;
pub use jobs::{reprocess_unclassified, spawn_worker, Job, JobQueue};
pub use pipeline::{Pipeline, RunSummary};
pub use sources::{FeedSource, RssFeedSource};
pub use store::{ArticleStore, InsertOutcome, StoreSummary};
pub use types::*;
