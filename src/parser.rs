use crate::types::{PipelineError, RawEntry, Result};
use feed_rs::parser;
use tracing::{debug, info};

/// Parse a raw RSS/Atom document into normalized entries.
///
/// Every entry the feed carries is returned: a malformed or sparse entry
/// degrades to empty-string fields instead of being skipped.
pub fn parse_entries(content: &str) -> Result<Vec<RawEntry>> {
    debug!("Parsing feed content ({} bytes)", content.len());

    let feed = parser::parse(content.as_bytes())
        .map_err(|e| PipelineError::Parse(format!("Failed to parse feed: {}", e)))?;

    let entries: Vec<RawEntry> = feed.entries.into_iter().map(extract_entry).collect();

    info!("Parsed feed with {} entries", entries.len());
    Ok(entries)
}

fn extract_entry(entry: feed_rs::model::Entry) -> RawEntry {
    let title = entry.title.map(|t| t.content).unwrap_or_default();
    let description = entry.summary.map(|s| s.content).unwrap_or_default();
    let link = entry
        .links
        .first()
        .map(|l| l.href.clone())
        .unwrap_or_default();
    let published = entry
        .published
        .map(|dt| dt.to_rfc2822())
        .unwrap_or_default();

    RawEntry {
        title,
        description,
        link,
        published,
    }
}
