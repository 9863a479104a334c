//! Client request wrapper against a mock relay.

mod common;

use common::words;
use mockito::{Matcher, Server};
use serde_json::json;
use word_diary::client::FALLBACK_ERROR_MESSAGE;
use word_diary::{DiaryClient, Error};

const RELAY_PATH: &str = "/.netlify/functions/generate";

fn client_for(server: &mockito::ServerGuard) -> DiaryClient {
    DiaryClient::builder()
        .endpoint(format!("{}{}", server.url(), RELAY_PATH))
        .build()
        .unwrap()
}

#[tokio::test]
async fn success_returns_text_exactly() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", RELAY_PATH)
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"words": ["海", "スイカ", "花火"]})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"text":"日記"}"#)
        .create_async()
        .await;

    let text = client_for(&server)
        .generate_diary(&words(&["海", "スイカ", "花火"]))
        .await
        .unwrap();
    assert_eq!(text, "日記");
    mock.assert_async().await;
}

#[tokio::test]
async fn non_string_text_becomes_empty() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", RELAY_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"text":42}"#)
        .create_async()
        .await;

    let text = client_for(&server)
        .generate_diary(&words(&["a", "b", "c"]))
        .await
        .unwrap();
    assert_eq!(text, "");
}

#[tokio::test]
async fn error_and_detail_are_composed() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", RELAY_PATH)
        .with_status(500)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error":"x","detail":"y"}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .generate_diary(&words(&["a", "b", "c"]))
        .await
        .unwrap_err();
    match &err {
        Error::Relay { status, message } => {
            assert_eq!(*status, 500);
            assert!(message.contains('x') && message.contains('y'));
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(err.to_string(), "x (y)");
}

#[tokio::test]
async fn non_json_error_body_becomes_message() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", RELAY_PATH)
        .with_status(502)
        .with_header("content-type", "text/html")
        .with_body("Bad Gateway")
        .create_async()
        .await;

    let err = client_for(&server)
        .generate_diary(&words(&["a", "b", "c"]))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Relay { status: 502, .. }));
    assert_eq!(err.to_string(), "Bad Gateway");
}

#[tokio::test]
async fn missing_error_field_uses_fallback() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", RELAY_PATH)
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let err = client_for(&server)
        .generate_diary(&words(&["a", "b", "c"]))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), FALLBACK_ERROR_MESSAGE);
}

#[tokio::test]
async fn unreachable_relay_is_a_transport_error() {
    let client = DiaryClient::builder()
        .endpoint("http://127.0.0.1:1/generate")
        .build()
        .unwrap();
    let err = client
        .generate_diary(&words(&["a", "b", "c"]))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}
