//! Relay configuration, read from the process environment.

use crate::upstream::{
    CompletionClient, DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
};
use crate::{Error, ErrorContext, Result};
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_RELAY_PATH: &str = "/.netlify/functions/generate";
pub const DEFAULT_BIND: &str = "127.0.0.1:8888";

#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Upstream credential. `None` keeps the relay up but every call answers 500.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub timeout: Duration,
    pub bind: SocketAddr,
    pub path: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(30),
            bind: SocketAddr::from(([127, 0, 0, 1], 8888)),
            path: DEFAULT_RELAY_PATH.to_string(),
        }
    }
}

impl RelayConfig {
    /// Environment variables:
    /// - `OPENAI_API_KEY` (required for generation)
    /// - `OPENAI_BASE_URL` (default `https://api.openai.com`)
    /// - `WORD_DIARY_MODEL` (default `gpt-3.5-turbo`)
    /// - `WORD_DIARY_HTTP_TIMEOUT_SECS` (default 30)
    /// - `WORD_DIARY_BIND` (default `127.0.0.1:8888`)
    /// - `WORD_DIARY_RELAY_PATH` (default `/.netlify/functions/generate`)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`RelayConfig::from_env`] with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind = match non_empty("WORD_DIARY_BIND") {
            Some(raw) => raw.trim().parse::<SocketAddr>().map_err(|e| {
                Error::configuration_with_context(
                    format!("invalid bind address: {}", e),
                    ErrorContext::new()
                        .with_field_path("WORD_DIARY_BIND")
                        .with_details(raw.clone()),
                )
            })?,
            None => defaults.bind,
        };

        let timeout = non_empty("WORD_DIARY_HTTP_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        let path = non_empty("WORD_DIARY_RELAY_PATH")
            .map(|p| if p.starts_with('/') { p } else { format!("/{}", p) })
            .unwrap_or(defaults.path);

        Ok(Self {
            api_key: non_empty("OPENAI_API_KEY"),
            base_url: non_empty("OPENAI_BASE_URL").unwrap_or(defaults.base_url),
            model: non_empty("WORD_DIARY_MODEL").unwrap_or(defaults.model),
            timeout,
            bind,
            path,
            ..defaults
        })
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Upstream client for this configuration, or `None` when no key is set.
    pub(crate) fn completion_client(&self) -> Result<Option<CompletionClient>> {
        let Some(key) = self.api_key.as_deref().filter(|k| !k.trim().is_empty()) else {
            return Ok(None);
        };
        CompletionClient::builder()
            .api_key(key)
            .base_url(&self.base_url)
            .model(&self.model)
            .max_tokens(self.max_tokens)
            .temperature(self.temperature)
            .timeout(self.timeout)
            .build()
            .map(Some)
    }
}
