//! Wire bodies exchanged between the client and the relay.

use serde::{Deserialize, Serialize};

/// Body of `POST <relay>`: the words to weave into a diary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub words: Vec<String>,
}

/// Success body of the relay. `text` may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub text: String,
}

/// Failure body of the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_is_omitted_when_absent() {
        let json = serde_json::to_value(ErrorEnvelope::new("Method Not Allowed")).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Method Not Allowed"}));
    }

    #[test]
    fn empty_detail_is_kept_on_the_wire() {
        let json = serde_json::to_value(ErrorEnvelope::new("quota").with_detail("")).unwrap();
        assert_eq!(json, serde_json::json!({"error": "quota", "detail": ""}));
    }
}
