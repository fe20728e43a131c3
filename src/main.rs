use std::process::ExitCode;
use tracing::{error, info};
use wonderville_scraper::api::run;
use wonderville_scraper::config::env_loader::load_config;
use wonderville_scraper::logging::setup_logging;
use wonderville_scraper::output::SaveOutcome;
use wonderville_scraper::wonderville::api::WondervilleAPI;

#[tokio::main]
async fn main() -> ExitCode {
    let loki = setup_logging().await;
    let config = load_config();

    let exit_code = match run(&WondervilleAPI, &config).await {
        Ok(SaveOutcome::Saved { .. }) => {
            info!("Closing program. Have a nice day.");
            ExitCode::SUCCESS
        }
        Ok(SaveOutcome::NothingToSave) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Scrape aborted: {}", err);
            ExitCode::FAILURE
        }
    };

    if let Some(loki) = loki {
        loki.shutdown().await;
    }

    exit_code
}
