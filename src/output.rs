use crate::error::ScrapeError;
use crate::wonderville::model::Event;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved { count: usize, path: PathBuf },
    NothingToSave,
}

/// Writes the events as pretty-printed JSON, replacing any existing file.
/// Nothing is written when there are no events.
#[tracing::instrument(skip(events), fields(count = events.len()))]
pub async fn save_events(events: &[Event], path: &Path) -> Result<SaveOutcome, ScrapeError> {
    if events.is_empty() {
        info!("No data to save.");
        return Ok(SaveOutcome::NothingToSave);
    }

    info!("Writing {} events to file", events.len());

    let json = serde_json::to_string_pretty(events)?;

    tokio::fs::write(path, json)
        .await
        .map_err(|source| ScrapeError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Data saved to {}", path.display());

    Ok(SaveOutcome::Saved {
        count: events.len(),
        path: path.to_path_buf(),
    })
}
