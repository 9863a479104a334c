//! # Relay Error Types
//!
//! Every relay failure becomes an HTTP status plus an [`ErrorEnvelope`] body.
//! Nothing escapes the handler as a bare transport error.

use crate::types::ErrorEnvelope;
use crate::upstream::UpstreamError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

pub const MISSING_KEY_DETAIL: &str =
    "Please set OPENAI_API_KEY in the relay environment (or a .env file loaded by your process manager)";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("OPENAI_API_KEY is missing")]
    MissingApiKey,

    #[error("Invalid input: words must be a non-empty array.")]
    InvalidInput,

    /// Upstream answered with a non-success status; passed through as-is.
    #[error("{message}")]
    Upstream {
        status: u16,
        message: String,
        detail: String,
    },

    #[error("Failed to generate diary entry.")]
    Internal { detail: String },
}

impl RelayError {
    pub fn internal(detail: impl ToString) -> Self {
        Self::Internal {
            detail: detail.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RelayError::MissingApiKey | RelayError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            RelayError::InvalidInput => StatusCode::BAD_REQUEST,
            RelayError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        let envelope = ErrorEnvelope::new(self.to_string());
        match self {
            RelayError::MissingApiKey => envelope.with_detail(MISSING_KEY_DETAIL),
            RelayError::Upstream { detail, .. } => envelope.with_detail(detail.clone()),
            RelayError::Internal { detail } => envelope.with_detail(detail.clone()),
            RelayError::MethodNotAllowed | RelayError::InvalidInput => envelope,
        }
    }
}

impl From<UpstreamError> for RelayError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Status {
                status,
                message,
                kind,
            } => RelayError::Upstream {
                status,
                message,
                detail: kind.unwrap_or_default(),
            },
            other => RelayError::internal(other),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.envelope())).into_response()
    }
}
