use crate::types::{GenerationRequest, WordSet};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::{json, Value};
use tracing::{debug, error};

use super::DiaryGenerator;

/// Message used when a failed relay response has no usable `error` field.
pub const FALLBACK_ERROR_MESSAGE: &str = "エラーが発生しました";

/// Thin client for the relay endpoint.
///
/// One POST per call; no retries. The only timeout is the one configured
/// on the underlying HTTP client.
pub struct DiaryClient {
    pub(crate) http_client: reqwest::Client,
    pub(crate) endpoint: String,
}

impl DiaryClient {
    pub fn builder() -> super::DiaryClientBuilder {
        super::DiaryClientBuilder::new()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Generate a diary entry from already-validated words.
    ///
    /// Returns the relay's `text` (or `""` when it is not a string). Any
    /// non-success status becomes one [`Error::Relay`] whose message is the
    /// envelope's `error`, followed by ` (detail)` when a detail is present.
    pub async fn generate_diary(&self, words: &[String]) -> Result<String> {
        let request = GenerationRequest {
            words: words.to_vec(),
        };
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(endpoint = self.endpoint.as_str(), error = %e, "relay request failed");
                Error::Transport(e)
            })?;

        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.contains("application/json"))
            .unwrap_or(false);
        let raw = response.text().await?;
        let envelope = read_envelope(&raw, is_json);

        if !status.is_success() {
            let message = compose_error_message(&envelope);
            error!(
                http_status = status.as_u16(),
                error = message.as_str(),
                "relay returned an error"
            );
            return Err(Error::Relay {
                status: status.as_u16(),
                message,
            });
        }

        let text = envelope
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        debug!(chars = text.chars().count(), "diary entry received");
        Ok(text)
    }
}

#[async_trait]
impl DiaryGenerator for DiaryClient {
    async fn generate(&self, words: &WordSet) -> Result<String> {
        self.generate_diary(&words.filled()).await
    }
}

/// JSON bodies are parsed; anything else (or JSON that fails to parse)
/// becomes `{"error": <raw body>}`.
fn read_envelope(raw: &str, is_json: bool) -> Value {
    if is_json {
        if let Ok(value) = serde_json::from_str::<Value>(raw) {
            return value;
        }
    }
    json!({ "error": raw })
}

fn compose_error_message(envelope: &Value) -> String {
    let non_empty = |key: &str| {
        envelope
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    };
    let base = non_empty("error").unwrap_or(FALLBACK_ERROR_MESSAGE);
    match non_empty("detail") {
        Some(detail) => format!("{} ({})", base, detail),
        None => base.to_string(),
    }
}
