use crate::{
    ConfigError, ConfigErrorResult, GenerationConfig, IdentityConfig, LoggingConfig, StoreConfig,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub identity: IdentityConfig,
    pub store: StoreConfig,
    pub generation: GenerationConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. Check for RG_CONFIG_DIR env var, else use ./.replygen/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply RG_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: RG_CONFIG_DIR env var > ./.replygen/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("RG_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".replygen"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.identity.endpoint.trim().is_empty() {
            return Err(ConfigError::identity("identity.endpoint must not be empty"));
        }

        if self.store.app_id.trim().is_empty() {
            return Err(ConfigError::store("store.app_id must not be empty"));
        }

        if self.generation.endpoint.trim().is_empty() {
            return Err(ConfigError::generation(
                "generation.endpoint must not be empty",
            ));
        }

        if self.generation.model.trim().is_empty() {
            return Err(ConfigError::generation("generation.model must not be empty"));
        }

        if self.generation.timeout_secs == 0 {
            return Err(ConfigError::generation(
                "generation.timeout_secs must be at least 1",
            ));
        }

        // Validate database path doesn't escape config dir
        let db_path = std::path::Path::new(&self.store.database_path);
        if db_path.is_absolute() || self.store.database_path.contains("..") {
            return Err(ConfigError::store(
                "store.database_path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get absolute path to the profile database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.store.database_path))
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  identity: {} (credential: {})",
            self.identity.endpoint,
            if self.identity.credential.is_some() {
                "pre-issued token"
            } else {
                "anonymous"
            }
        );
        info!(
            "  store: app_id={}, database={}",
            self.store.app_id, self.store.database_path
        );
        info!(
            "  generation: {} model={} timeout={}s",
            self.generation.endpoint, self.generation.model, self.generation.timeout_secs
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Identity
        Self::apply_env_string("RG_IDENTITY_ENDPOINT", &mut self.identity.endpoint);
        Self::apply_env_string("RG_IDENTITY_API_KEY", &mut self.identity.api_key);
        Self::apply_env_option_string("RG_IDENTITY_CREDENTIAL", &mut self.identity.credential);

        // Store
        Self::apply_env_string("RG_STORE_APP_ID", &mut self.store.app_id);
        Self::apply_env_string("RG_DATABASE_PATH", &mut self.store.database_path);

        // Generation
        Self::apply_env_string("RG_GENERATION_ENDPOINT", &mut self.generation.endpoint);
        Self::apply_env_string("RG_GENERATION_API_KEY", &mut self.generation.api_key);
        Self::apply_env_string("RG_GENERATION_MODEL", &mut self.generation.model);
        Self::apply_env_parse(
            "RG_GENERATION_TIMEOUT_SECS",
            &mut self.generation.timeout_secs,
        );

        // Logging
        Self::apply_env_parse("RG_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("RG_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("RG_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
