use crate::config::model::Config;
use crate::error::ScrapeError;
use crate::output::{save_events, SaveOutcome};
use crate::wonderville::api::{PageFetcher, WondervilleAPI};
use tracing::{debug, error, info};

#[derive(strum::Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetching,
    Extracting,
    Writing,
}

/// Fetches the events page, extracts its events and saves them to the configured output.
///
/// A fetch failure aborts the run before anything is written.
#[tracing::instrument(skip_all, fields(url = %config.source_url))]
pub async fn run<F: PageFetcher>(fetcher: &F, config: &Config) -> Result<SaveOutcome, ScrapeError> {
    info!("Scraping data from {} ...", config.source_url);

    debug!(stage = %Stage::Fetching, "Entering stage");
    let html = fetcher
        .fetch_html(&config.source_url)
        .await
        .inspect_err(|err| error!("Failed to fetch HTML content: {}", err))?;

    debug!(stage = %Stage::Extracting, "Entering stage");
    let mut events = WondervilleAPI::parse_events(&html);

    if let Some(limit) = config.debug_config.event_limit {
        if events.len() > limit {
            info!("Keeping only the first {} events", limit);
            events.truncate(limit);
        }
    }

    debug!(stage = %Stage::Writing, "Entering stage");
    save_events(&events, &config.output_path).await
}
