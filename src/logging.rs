use lazy_static::lazy_static;
use std::{env, io};
use tokio::task::JoinHandle;
use tracing::{info, warn, Level};
use tracing_loki::url::Url;
use tracing_loki::{BackgroundTask, BackgroundTaskController};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{filter, fmt};

const SERVICE_NAME: &str = "wonderville_scraper";

lazy_static! {
    static ref LOKI_URL: Option<String> = env::var("LOKI_URL").ok();
}

pub struct LokiHandle {
    controller: BackgroundTaskController,
    task: JoinHandle<()>,
}

impl LokiHandle {
    /// Flushes pending logs and waits for the background task to end
    pub async fn shutdown(self) {
        self.controller.shutdown().await;

        if let Err(err) = self.task.await {
            eprintln!("Loki background task failed: {}", err);
        }
    }
}

fn build_loki_layer(
    base_url: Url,
) -> Result<(tracing_loki::Layer, BackgroundTaskController, BackgroundTask), tracing_loki::Error> {
    tracing_loki::builder()
        .label("service", SERVICE_NAME)?
        .build_controller_url(base_url)
}

/// Logs to stdout, and also to Loki when `LOKI_URL` is set and reachable.
pub async fn setup_logging() -> Option<LokiHandle> {
    let filter = filter::Targets::new()
        .with_target(SERVICE_NAME, Level::TRACE)
        .with_default(Level::WARN);

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stdout));

    let Some(base_url) = LOKI_URL.as_ref() else {
        registry.init();
        warn!("Loki URL not provided. Continuing without it.");
        return None;
    };

    let base_url: Url = match base_url.parse() {
        Ok(url) => url,
        Err(err) => {
            registry.init();
            warn!("Invalid Loki URL '{}' ({}). Continuing without it.", base_url, err);
            return None;
        }
    };

    if reqwest::get(base_url.clone()).await.is_err() {
        registry.init();
        warn!("Couldn't connect to Loki. Continuing without it.");
        return None;
    }

    match build_loki_layer(base_url) {
        Ok((layer, controller, task)) => {
            registry.with(layer).init();
            let task = tokio::spawn(task);

            info!("Loki initialized");

            Some(LokiHandle { controller, task })
        }
        Err(err) => {
            registry.init();
            warn!("Failed to build Loki layer ({}). Continuing without it.", err);
            None
        }
    }
}
