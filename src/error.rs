use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// Date text that isn't `<Weekday>, <Mon> <Day>, <Year>`
    #[error("Unrecognized event date '{0}'")]
    MalformedDate(String),
    #[error("Failed to serialize events: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
