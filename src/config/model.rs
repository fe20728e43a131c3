use crate::wonderville::api::WONDERVILLE_EVENTS_URL;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_PATH: &str = "events.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub debug_config: DebugConfig,
    pub source_url: String,
    pub output_path: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct DebugConfig {
    /// Keep only the first events found
    pub event_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug_config: DebugConfig::default(),
            source_url: WONDERVILLE_EVENTS_URL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}
