//! Client request wrapper around the relay.
//!
//! Presents one success/failure contract to the rest of the client:
//! a `String` on success, a single [`crate::Error`] otherwise.

pub mod builder;
pub mod core;

pub use self::builder::{DiaryClientBuilder, DEFAULT_RELAY_URL};
pub use self::core::{DiaryClient, FALLBACK_ERROR_MESSAGE};

use crate::types::WordSet;
use crate::Result;
use async_trait::async_trait;

/// Something that turns a complete word set into diary text.
///
/// [`DiaryClient`] is the production implementation; the orchestrator only
/// depends on this trait.
#[async_trait]
pub trait DiaryGenerator: Send + Sync {
    async fn generate(&self, words: &WordSet) -> Result<String>;
}
