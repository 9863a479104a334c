//! # Relay Service
//!
//! Stateless translation between a simplified client request
//! (`{"words": [...]}`) and one chat-completion call upstream.
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`RelayService`] | The operation itself: validate, build prompt, call upstream, normalize |
//! | [`RelayConfig`] | Environment-driven configuration |
//! | [`RelayError`] | Failure taxonomy with HTTP status and envelope mapping |
//! | [`router`] / [`serve`] | Axum hosting |
//!
//! ## Contract
//!
//! | Condition | Status | Body |
//! |-----------|--------|------|
//! | method is not POST | 405 | `{"error":"Method Not Allowed"}` |
//! | no API key configured | 500 | `{"error":..., "detail": how to set it}` |
//! | body is not JSON | 500 | `{"error":..., "detail": parse error}` |
//! | `words` missing / empty / not an array of strings | 400 | `{"error":...}` |
//! | upstream non-success | upstream status | `{"error": message, "detail": type}` |
//! | success | 200 | `{"text": ...}` |

mod config;
mod error;
pub mod prompt;
mod server;
mod service;

pub use config::{RelayConfig, DEFAULT_BIND, DEFAULT_RELAY_PATH};
pub use error::{RelayError, MISSING_KEY_DETAIL};
pub use server::{router, serve, ALIAS_PATH, REQUEST_ID_HEADER};
pub use service::{parse_words, RelayService};
