//! Shared fixtures: a mock chat-completion upstream and relay wiring.

#![allow(dead_code)]

use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use word_diary::relay::{self, RelayConfig, RelayService};

pub const TEST_KEY: &str = "sk-test";
pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Mock upstream plus a relay pointed at it.
pub struct UpstreamFixture {
    pub server: ServerGuard,
}

impl UpstreamFixture {
    pub async fn new() -> Self {
        Self {
            server: Server::new_async().await,
        }
    }

    pub fn config(&self) -> RelayConfig {
        RelayConfig::default()
            .with_api_key(TEST_KEY)
            .with_base_url(self.server.url())
    }

    pub fn service(&self) -> RelayService {
        RelayService::new(&self.config()).expect("relay service")
    }

    /// Successful completion whose first choice carries `content`, expected
    /// to be hit exactly `hits` times.
    pub async fn mock_completion(&mut self, content: &str, hits: usize) -> Mock {
        self.server
            .mock("POST", COMPLETIONS_PATH)
            .match_header("authorization", format!("Bearer {}", TEST_KEY).as_str())
            .expect(hits)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "id": "chatcmpl-test",
                    "object": "chat.completion",
                    "choices": [{
                        "index": 0,
                        "message": {"role": "assistant", "content": content},
                        "finish_reason": "stop"
                    }]
                })
                .to_string(),
            )
            .create_async()
            .await
    }

    /// Upstream failure with an OpenAI-style error body.
    pub async fn mock_error(&mut self, status: usize, message: &str, kind: &str) -> Mock {
        self.server
            .mock("POST", COMPLETIONS_PATH)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(json!({"error": {"message": message, "type": kind}}).to_string())
            .create_async()
            .await
    }

    pub async fn mock_raw(&mut self, status: usize, body: &str) -> Mock {
        self.server
            .mock("POST", COMPLETIONS_PATH)
            .match_body(Matcher::Any)
            .with_status(status)
            .with_body(body)
            .create_async()
            .await
    }
}

/// Serve `service` on an ephemeral port and return the bound address.
pub async fn spawn_relay(service: RelayService) -> SocketAddr {
    let app = relay::router(Arc::new(service), relay::DEFAULT_RELAY_PATH);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("relay server");
    });
    addr
}

pub fn words(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
