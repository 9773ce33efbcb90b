use crate::DEFAULT_IDENTITY_ENDPOINT;

use serde::Deserialize;

/// Identity provider settings.
///
/// `credential` is an optional pre-issued sign-in token. When absent,
/// sign-in is anonymous. The `RG_IDENTITY_CREDENTIAL` env override is how
/// environment-injected deployments supply it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    pub endpoint: String,
    pub api_key: String,
    pub credential: Option<String>,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from(DEFAULT_IDENTITY_ENDPOINT),
            api_key: String::new(),
            credential: None,
        }
    }
}
