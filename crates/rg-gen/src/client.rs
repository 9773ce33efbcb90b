use crate::{GenError, GenerateRequest, GenerateResponse, Result as GenResult};

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, ClientBuilder};

/// Black-box function from prompt to generated text.
#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn generate(&self, prompt: &str) -> GenResult<String>;
}

/// HTTP client for the vendor text-generation endpoint.
pub struct HttpGenerationClient {
    base_url: String,
    api_key: String,
    model: String,
    client: ReqwestClient,
}

impl HttpGenerationClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Service URL (e.g., "https://generativelanguage.googleapis.com")
    /// * `api_key` - Deployment API key appended as the `key` query parameter
    /// * `model` - Model identifier in the request path
    /// * `timeout` - Transport timeout for the single attempt
    pub fn new(base_url: &str, api_key: &str, model: &str, timeout: Duration) -> GenResult<Self> {
        let client = ClientBuilder::new().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            client,
        })
    }
}

#[async_trait]
impl GenerationService for HttpGenerationClient {
    async fn generate(&self, prompt: &str) -> GenResult<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let body = GenerateRequest::user(prompt);

        debug!("Generation request: model={} prompt={}B", self.model, prompt.len());

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(GenError::service(status.as_u16()));
        }

        let parsed: GenerateResponse = response.json().await?;
        parsed.extract_text().ok_or_else(GenError::empty_result)
    }
}
