use crate::fetcher::Fetcher;
use crate::parser;
use crate::types::{PipelineError, RawEntry, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use url::Url;

/// A configured feed source: one URL and a way to pull its current entries.
///
/// The pipeline only sees this trait, so tests can substitute stub or
/// failing sources without touching the network.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// The feed URL; recorded as `source` on every article it yields.
    fn url(&self) -> &str;

    /// Retrieve the source's current entries, in feed order.
    async fn entries(&self) -> Result<Vec<RawEntry>>;
}

/// Production source: fetch the document over HTTP and parse it as RSS/Atom.
pub struct RssFeedSource {
    url: String,
    fetcher: Arc<Fetcher>,
}

impl RssFeedSource {
    pub fn new(url: impl Into<String>, fetcher: Arc<Fetcher>) -> Result<Self> {
        let url = url.into();
        let parsed = Url::parse(&url)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(PipelineError::General(format!(
                "unsupported feed scheme '{}' in {}",
                parsed.scheme(),
                url
            )));
        }

        Ok(Self { url, fetcher })
    }
}

#[async_trait]
impl FeedSource for RssFeedSource {
    fn url(&self) -> &str {
        &self.url
    }

    async fn entries(&self) -> Result<Vec<RawEntry>> {
        info!("Pulling feed entries from {}", self.url);
        let body = self.fetcher.fetch_body(&self.url).await?;
        parser::parse_entries(&body)
    }
}
