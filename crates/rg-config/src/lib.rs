mod config;
mod error;
mod generation_config;
mod identity_config;
mod log_level;
mod logging_config;
mod store_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use generation_config::GenerationConfig;
pub use identity_config::IdentityConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use store_config::StoreConfig;

const DEFAULT_IDENTITY_ENDPOINT: &str = "https://identitytoolkit.googleapis.com";
const DEFAULT_GENERATION_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_GENERATION_MODEL: &str = "gemini-2.5-flash-preview-05-20";
const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 30;
const DEFAULT_APP_ID: &str = "replygen";
const DEFAULT_DATABASE_FILENAME: &str = "profile.db";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
