//! Chat-completion wire types (OpenAI-compatible).

use crate::types::Message;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
    pub max_tokens: u32,
    pub temperature: f64,
}

/// Success body, kept as raw JSON. Only `/choices/0/message/content` is
/// read, and any shape that does not lead to a string there means "no text".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ChatCompletionResponse(pub Value);

impl ChatCompletionResponse {
    const CONTENT_POINTER: &'static str = "/choices/0/message/content";

    /// Trimmed content of the first choice, or `""` when the path is missing.
    pub fn first_text(&self) -> String {
        self.0
            .pointer(Self::CONTENT_POINTER)
            .and_then(Value::as_str)
            .map(str::trim)
            .unwrap_or_default()
            .to_string()
    }
}

/// Error body: `{"error": {"message": ..., "type": ...}}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamErrorBody {
    #[serde(default)]
    pub error: Option<UpstreamErrorDetail>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}
