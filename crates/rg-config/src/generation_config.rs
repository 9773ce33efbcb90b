use crate::{DEFAULT_GENERATION_ENDPOINT, DEFAULT_GENERATION_MODEL, DEFAULT_GENERATION_TIMEOUT_SECS};

use serde::Deserialize;

/// Text-generation service settings.
///
/// One attempt per request; `timeout_secs` is a transport-level safety
/// margin, not a retry budget.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from(DEFAULT_GENERATION_ENDPOINT),
            api_key: String::new(),
            model: String::from(DEFAULT_GENERATION_MODEL),
            timeout_secs: DEFAULT_GENERATION_TIMEOUT_SECS,
        }
    }
}
