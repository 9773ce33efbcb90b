use crate::{DEFAULT_APP_ID, DEFAULT_DATABASE_FILENAME};

use serde::Deserialize;

/// Profile store settings.
///
/// `app_id` is the static deployment identifier used as the first segment of
/// every document path; changing it orphans previously saved settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub app_id: String,
    /// Database file, relative to the config directory.
    pub database_path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            app_id: String::from(DEFAULT_APP_ID),
            database_path: String::from(DEFAULT_DATABASE_FILENAME),
        }
    }
}
