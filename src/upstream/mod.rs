//! Upstream module: the external chat-completion API the relay forwards prompts to.
//!
//! Only the non-streaming chat-completion call is implemented: one request,
//! one response, no retries.

mod client;
mod types;

pub use client::{
    CompletionClient, CompletionClientBuilder, UpstreamError, DEFAULT_BASE_URL,
    DEFAULT_ENDPOINT_PATH, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
    UPSTREAM_FALLBACK_MESSAGE,
};
pub use types::{
    ChatCompletionRequest, ChatCompletionResponse, UpstreamErrorBody, UpstreamErrorDetail,
};
