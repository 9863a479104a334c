//! # word-diary
//!
//! 単語日記：3・5・7個の単語から短い日記を生成する。
//!
//! Enter three, five, or seven words; a relay forwards them to a
//! chat-completion model and returns a short first-person Japanese diary
//! entry that uses all of them.
//!
//! ## Overview
//!
//! Two components sit on either side of a network boundary:
//!
//! - **Relay** ([`relay`]): a stateless HTTP handler. Validates the word list,
//!   builds the prompt, calls the upstream API once, and normalizes the
//!   result into `{"text"}` or `{"error", "detail"?}`.
//! - **Client** ([`client`] + [`orchestrator`]): posts words to the relay and
//!   routes the outcome to the result view, the local draft slot, speech
//!   output, and the clipboard.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use word_diary::{DiaryClient, Orchestrator, WordCount};
//!
//! #[tokio::main]
//! async fn main() -> word_diary::Result<()> {
//!     let client = DiaryClient::builder()
//!         .endpoint("http://localhost:8888/.netlify/functions/generate")
//!         .build()?;
//!     let app = Orchestrator::builder(Arc::new(client))
//!         .word_count(WordCount::Three)
//!         .build();
//!
//!     for (i, w) in ["海", "スイカ", "花火"].iter().enumerate() {
//!         app.set_word(i, *w)?;
//!     }
//!     let status = app.generate().await;
//!     println!("{status}\n{}", app.result());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`relay`] | Relay service, configuration, error taxonomy, axum hosting |
//! | [`upstream`] | Chat-completion client used by the relay |
//! | [`client`] | Client request wrapper for the relay |
//! | [`orchestrator`] | Screen state and user actions |
//! | [`draft`] | Single-slot draft persistence |
//! | [`speech`] | Speech output capability |
//! | [`clipboard`] | Clipboard capability |
//! | [`types`] | Word sets, wire envelopes, chat messages |

pub mod client;
pub mod clipboard;
pub mod draft;
pub mod orchestrator;
pub mod relay;
pub mod speech;
pub mod types;
pub mod upstream;

// Re-export main types for convenience
pub use client::{DiaryClient, DiaryClientBuilder, DiaryGenerator};
pub use orchestrator::{Orchestrator, OrchestratorBuilder, Status};
pub use relay::{RelayConfig, RelayError, RelayService};
pub use types::{ErrorEnvelope, GenerationRequest, GenerationResponse, WordCount, WordSet};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
