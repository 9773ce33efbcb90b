use crate::{IdentityError, IdentityProvider, Result as IdentityResult, SignedInIdentity};

use rg_core::{Identity, IdentityMode};

use async_trait::async_trait;
use log::{info, warn};
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};

/// Identity provider backed by a Firebase-Auth-style REST API.
pub struct RestIdentityProvider {
    base_url: String,
    api_key: String,
    client: ReqwestClient,
}

#[derive(Serialize)]
struct SignUpRequest {
    #[serde(rename = "returnSecureToken")]
    return_secure_token: bool,
}

#[derive(Serialize)]
struct TokenSignInRequest<'a> {
    token: &'a str,
    #[serde(rename = "returnSecureToken")]
    return_secure_token: bool,
}

#[derive(Deserialize)]
struct SignInResponse {
    #[serde(rename = "localId", default)]
    local_id: String,
}

impl RestIdentityProvider {
    /// Create a new provider
    ///
    /// # Arguments
    /// * `base_url` - Auth endpoint (e.g., "https://identitytoolkit.googleapis.com")
    /// * `api_key` - Deployment API key appended as the `key` query parameter
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Sign in without a credential; the provider mints a fresh identity.
    pub async fn sign_in_anonymously(&self) -> IdentityResult<Identity> {
        let url = format!(
            "{}/v1/accounts:signUp?key={}",
            self.base_url, self.api_key
        );
        let body = SignUpRequest {
            return_secure_token: true,
        };

        self.execute(self.client.post(&url).json(&body)).await
    }

    /// Sign in with a pre-issued custom token.
    pub async fn sign_in_with_token(&self, token: &str) -> IdentityResult<Identity> {
        let url = format!(
            "{}/v1/accounts:signInWithCustomToken?key={}",
            self.base_url, self.api_key
        );
        let body = TokenSignInRequest {
            token,
            return_secure_token: true,
        };

        self.execute(self.client.post(&url).json(&body)).await
    }

    /// Execute a sign-in request and extract the identity.
    async fn execute(&self, req: reqwest::RequestBuilder) -> IdentityResult<Identity> {
        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("error")
                        .and_then(|e| e.get("message"))
                        .and_then(|m| m.as_str())
                        .map(String::from)
                })
                .unwrap_or_else(|| String::from("sign-in rejected"));
            return Err(IdentityError::rejected(status.as_u16(), message));
        }

        let body: SignInResponse = response.json().await?;
        if body.local_id.is_empty() {
            return Err(IdentityError::malformed("response is missing localId"));
        }

        Ok(Identity::new(body.local_id))
    }
}

#[async_trait]
impl IdentityProvider for RestIdentityProvider {
    async fn sign_in(&self, credential: Option<&str>) -> IdentityResult<SignedInIdentity> {
        if let Some(token) = credential {
            match self.sign_in_with_token(token).await {
                Ok(identity) => {
                    info!("Signed in with pre-issued credential: {identity}");
                    return Ok(SignedInIdentity {
                        identity,
                        mode: IdentityMode::Token,
                    });
                }
                Err(e) => {
                    // Fallback identity owns a different settings namespace,
                    // so the mode makes the switch visible to callers.
                    warn!("Credential sign-in failed ({e}), falling back to anonymous");
                    let identity = self.sign_in_anonymously().await?;
                    info!("Signed in anonymously after fallback: {identity}");
                    return Ok(SignedInIdentity {
                        identity,
                        mode: IdentityMode::AnonymousFallback,
                    });
                }
            }
        }

        let identity = self.sign_in_anonymously().await?;
        info!("Signed in anonymously: {identity}");
        Ok(SignedInIdentity {
            identity,
            mode: IdentityMode::Anonymous,
        })
    }
}
