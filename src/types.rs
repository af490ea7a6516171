use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical record for one feed entry after extraction and classification.
///
/// The (title, source) pair is the natural key; the store enforces
/// uniqueness on it rather than on a surrogate id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub description: String,
    pub link: String,
    /// Free-form date string as the feed reported it; never parsed.
    pub published_date: String,
    /// The feed URL this article was fetched from.
    pub source: String,
    /// `None` models a row that was inserted without a classification.
    /// The fetch path always classifies eagerly, so it only produces `Some`.
    pub category: Option<Category>,
}

/// Topic label produced by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Terrorism/protest/political unrest/riot")]
    Unrest,
    #[serde(rename = "Positive/Uplifting")]
    Uplifting,
    #[serde(rename = "Natural Disasters")]
    NaturalDisaster,
    #[serde(rename = "Others")]
    Others,
}

impl Category {
    /// Stable string form, also used as the column value in the store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Unrest => "Terrorism/protest/political unrest/riot",
            Category::Uplifting => "Positive/Uplifting",
            Category::NaturalDisaster => "Natural Disasters",
            Category::Others => "Others",
        }
    }

    pub fn parse(label: &str) -> Option<Category> {
        match label {
            "Terrorism/protest/political unrest/riot" => Some(Category::Unrest),
            "Positive/Uplifting" => Some(Category::Uplifting),
            "Natural Disasters" => Some(Category::NaturalDisaster),
            "Others" => Some(Category::Others),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One feed entry as extracted from the wire, before classification.
/// Absent fields degrade to empty strings rather than causing failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEntry {
    pub title: String,
    pub description: String,
    pub link: String,
    pub published: String,
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub max_retries: u32,
    pub retry_delay_seconds: u64,
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "news-pipeline/1.0".to_string(),
            timeout_seconds: 30,
            max_retries: 3,
            retry_delay_seconds: 5,
            max_redirects: 5,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("feed parse error: {0}")]
    Parse(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Job-queue failures stay distinct from store failures: they affect
    /// only the asynchronous backfill path, not the ingestion result.
    #[error("job dispatch failed: {0}")]
    JobDispatch(String),

    #[error("{0}")]
    General(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
