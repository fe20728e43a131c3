use crate::config::model::{Config, DebugConfig, DEFAULT_OUTPUT_PATH};
use crate::wonderville::api::WONDERVILLE_EVENTS_URL;
use std::env;
use std::path::PathBuf;

pub fn load_config() -> Config {
    let source_url = load_string_config("WONDERVILLE_URL", WONDERVILLE_EVENTS_URL);
    let output_path = PathBuf::from(load_string_config("OUTPUT_PATH", DEFAULT_OUTPUT_PATH));

    let debug_event_limit = load_usize_config("DEBUG_EVENT_LIMIT");

    Config {
        debug_config: DebugConfig {
            event_limit: debug_event_limit,
        },
        source_url,
        output_path,
    }
}

fn load_string_config(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn load_usize_config(name: &str) -> Option<usize> {
    match env::var(name) {
        Ok(value) => Some(value.parse().unwrap_or_else(|_| {
            panic!(
                "Invalid config '{}'. Expected a non-negative integer number.",
                name
            )
        })),
        Err(_) => None,
    }
}
