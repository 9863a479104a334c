//! The relay operation: word list in, diary text or error envelope out.

use super::config::RelayConfig;
use super::error::RelayError;
use super::prompt;
use crate::types::GenerationResponse;
use crate::upstream::CompletionClient;
use crate::Result;
use axum::http::Method;
use serde_json::Value;
use tracing::{info, warn};

/// Stateless relay. Holds only immutable configuration and a pooled HTTP
/// client, so one instance can serve any number of concurrent calls.
pub struct RelayService {
    upstream: Option<CompletionClient>,
}

impl RelayService {
    pub fn new(config: &RelayConfig) -> Result<Self> {
        let upstream = config.completion_client()?;
        if upstream.is_none() {
            warn!("OPENAI_API_KEY is not set; every generation call will answer 500");
        }
        Ok(Self { upstream })
    }

    pub fn has_credentials(&self) -> bool {
        self.upstream.is_some()
    }

    /// Run one invocation.
    ///
    /// Checks run in a fixed order: method, credential, body, words. The
    /// first two do not look at the body at all.
    pub async fn handle(
        &self,
        method: &Method,
        body: &[u8],
    ) -> std::result::Result<GenerationResponse, RelayError> {
        if method != Method::POST {
            return Err(RelayError::MethodNotAllowed);
        }
        let upstream = self.upstream.as_ref().ok_or(RelayError::MissingApiKey)?;
        let words = parse_words(body)?;

        let messages = prompt::build_messages(&words);
        let text = upstream.complete(&messages).await?;
        info!(
            words = words.len(),
            chars = text.chars().count(),
            "diary entry generated"
        );
        Ok(GenerationResponse { text })
    }
}

/// Extract `words` from a request body.
///
/// Unparseable JSON is an internal failure (500); a parseable body with a
/// missing, empty, non-array, or non-string `words` is invalid input (400).
pub fn parse_words(body: &[u8]) -> std::result::Result<Vec<String>, RelayError> {
    let value: Value = serde_json::from_slice(body).map_err(RelayError::internal)?;
    let items = value
        .get("words")
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
        .ok_or(RelayError::InvalidInput)?;
    items
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect::<Option<Vec<_>>>()
        .ok_or(RelayError::InvalidInput)
}
