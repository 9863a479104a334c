use crate::client::core::DiaryClient;
use crate::{Error, ErrorContext, Result};
use std::time::Duration;

pub const DEFAULT_RELAY_URL: &str = "http://localhost:8888/.netlify/functions/generate";

/// Builder for [`DiaryClient`].
///
/// Keep this surface area small: an endpoint and a timeout.
pub struct DiaryClientBuilder {
    endpoint: Option<String>,
    timeout: Duration,
}

impl DiaryClientBuilder {
    pub fn new() -> Self {
        Self {
            endpoint: None,
            timeout: Duration::from_secs(60),
        }
    }

    /// Relay URL. Defaults to `WORD_DIARY_RELAY_URL`, then [`DEFAULT_RELAY_URL`].
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<DiaryClient> {
        let endpoint = self
            .endpoint
            .or_else(|| {
                std::env::var("WORD_DIARY_RELAY_URL")
                    .ok()
                    .filter(|s| !s.trim().is_empty())
            })
            .unwrap_or_else(|| DEFAULT_RELAY_URL.to_string());
        let parsed = url::Url::parse(&endpoint).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid relay URL: {}", e),
                ErrorContext::new()
                    .with_field_path("WORD_DIARY_RELAY_URL")
                    .with_details(endpoint.clone()),
            )
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::configuration_with_context(
                format!("relay URL must be http or https, got {}", parsed.scheme()),
                ErrorContext::new().with_field_path("WORD_DIARY_RELAY_URL"),
            ));
        }

        let http_client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;
        Ok(DiaryClient {
            http_client,
            endpoint,
        })
    }
}

impl Default for DiaryClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_endpoint_is_kept() {
        let client = DiaryClientBuilder::new()
            .endpoint("http://127.0.0.1:3000/generate")
            .build()
            .unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:3000/generate");
    }

    #[test]
    fn non_http_endpoint_is_rejected() {
        let err = DiaryClientBuilder::new()
            .endpoint("ftp://example.com/generate")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, Error::Configuration { .. }));
        assert!(DiaryClientBuilder::new().endpoint("::::").build().is_err());
    }
}
