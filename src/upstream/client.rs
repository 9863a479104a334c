//! Chat-completion client used by the relay.

use super::types::{ChatCompletionRequest, ChatCompletionResponse, UpstreamErrorBody};
use crate::types::Message;
use crate::{Error, ErrorContext, Result};
use std::time::Duration;
use tracing::{debug, error};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_ENDPOINT_PATH: &str = "/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_MAX_TOKENS: u32 = 300;
pub const DEFAULT_TEMPERATURE: f64 = 0.8;

/// Message used when the upstream error body carries no `error.message`.
pub const UPSTREAM_FALLBACK_MESSAGE: &str = "OpenAI API request failed";

/// Failure of a single completion call.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Upstream answered with a non-success status.
    #[error("upstream HTTP {status}: {message}")]
    Status {
        status: u16,
        message: String,
        kind: Option<String>,
    },

    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for one chat-completion endpoint with fixed generation parameters.
pub struct CompletionClient {
    http_client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
    max_tokens: u32,
    temperature: f64,
}

impl CompletionClient {
    pub fn builder() -> CompletionClientBuilder {
        CompletionClientBuilder::new()
    }

    /// Send `messages` and return the trimmed text of the first choice.
    ///
    /// Single attempt; a non-success status is returned as
    /// [`UpstreamError::Status`] with the upstream status untouched.
    pub async fn complete(&self, messages: &[Message]) -> std::result::Result<String, UpstreamError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };
        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            // A non-JSON error page still passes the status through.
            let parsed: UpstreamErrorBody = serde_json::from_slice(&bytes).unwrap_or_default();
            let detail = parsed.error.unwrap_or_default();
            error!(
                http_status = status.as_u16(),
                error_type = detail.kind.as_deref().unwrap_or(""),
                body = %String::from_utf8_lossy(&bytes),
                "chat completion request failed"
            );
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                message: detail
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| UPSTREAM_FALLBACK_MESSAGE.to_string()),
                kind: detail.kind,
            });
        }

        let parsed: ChatCompletionResponse = serde_json::from_slice(&bytes)?;
        let text = parsed.first_text();
        debug!(chars = text.chars().count(), "chat completion succeeded");
        Ok(text)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

pub struct CompletionClientBuilder {
    model: Option<String>,
    api_key: Option<String>,
    base_url: Option<String>,
    endpoint_path: Option<String>,
    max_tokens: u32,
    temperature: f64,
    timeout: Duration,
}

impl CompletionClientBuilder {
    pub fn new() -> Self {
        Self {
            model: None,
            api_key: None,
            base_url: None,
            endpoint_path: None,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(30),
        }
    }
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }
    pub fn endpoint_path(mut self, path: impl Into<String>) -> Self {
        self.endpoint_path = Some(path.into());
        self
    }
    pub fn max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = max.max(1);
        self
    }
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<CompletionClient> {
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| Error::configuration("API key required"))?;
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let endpoint_path = self
            .endpoint_path
            .unwrap_or_else(|| DEFAULT_ENDPOINT_PATH.to_string());
        let endpoint_path = if endpoint_path.starts_with('/') {
            endpoint_path
        } else {
            format!("/{}", endpoint_path)
        };
        let endpoint = format!("{}{}", base_url.trim_end_matches('/'), endpoint_path);
        url::Url::parse(&endpoint).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid upstream URL: {}", e),
                ErrorContext::new()
                    .with_field_path("OPENAI_BASE_URL")
                    .with_details(endpoint.clone()),
            )
        })?;
        let http_client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;
        Ok(CompletionClient {
            http_client,
            endpoint,
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        })
    }
}

impl Default for CompletionClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
