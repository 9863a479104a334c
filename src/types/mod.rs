//! Core data types shared by the relay, the client, and the orchestrator.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`WordCount`] | Allowed number of words (3, 5, 7) |
//! | [`WordSet`] | Word slots sized to the selected count |
//! | [`GenerationRequest`] / [`GenerationResponse`] | Relay request and success bodies |
//! | [`ErrorEnvelope`] | Relay failure body |
//! | [`Message`] | Role-tagged chat message sent upstream |

pub mod envelope;
pub mod message;
pub mod words;

pub use envelope::{ErrorEnvelope, GenerationRequest, GenerationResponse};
pub use message::{Message, MessageRole};
pub use words::{WordCount, WordSet};
