//! # Relay HTTP hosting
//!
//! Axum router and server loop around [`RelayService`].

use super::config::RelayConfig;
use super::service::RelayService;
use crate::Result;
use axum::extract::State;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use axum::{Json, Router};
use bytes::Bytes;
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Alias path kept for clients that do not use the Netlify-style path.
pub const ALIAS_PATH: &str = "/generate";

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Every method on the relay path reaches the handler so that non-POST
/// requests get the JSON 405 envelope.
pub fn router(service: Arc<RelayService>, path: &str) -> Router {
    let mut router = Router::new()
        .route(path, any(relay_handler))
        .route("/health", get(health));
    if path != ALIAS_PATH {
        router = router.route(ALIAS_PATH, any(relay_handler));
    }
    router.with_state(service)
}

async fn relay_handler(
    State(service): State<Arc<RelayService>>,
    method: Method,
    body: Bytes,
) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let started = std::time::Instant::now();

    let mut response = match service.handle(&method, &body).await {
        Ok(generated) => {
            info!(
                request_id = request_id.as_str(),
                duration_ms = started.elapsed().as_millis() as u64,
                "relay call succeeded"
            );
            (StatusCode::OK, Json(generated)).into_response()
        }
        Err(err) => {
            let status = err.status_code();
            if status.is_server_error() {
                error!(
                    request_id = request_id.as_str(),
                    http_status = status.as_u16(),
                    error = %err,
                    detail = err.envelope().detail.as_deref().unwrap_or(""),
                    "relay call failed"
                );
            } else {
                warn!(
                    request_id = request_id.as_str(),
                    http_status = status.as_u16(),
                    method = %method,
                    error = %err,
                    "relay call rejected"
                );
            }
            err.into_response()
        }
    };

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Bind `config.bind` and serve until Ctrl-C.
pub async fn serve(config: RelayConfig) -> Result<()> {
    let service = Arc::new(RelayService::new(&config)?);
    let app = router(service, &config.path);
    let listener = TcpListener::bind(config.bind).await?;
    info!(
        addr = %listener.local_addr()?,
        path = config.path.as_str(),
        model = config.model.as_str(),
        "word-diary relay listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("word-diary relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
