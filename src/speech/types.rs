//! Speech output types.

use crate::Result;
use std::sync::Arc;

/// Language tag used for diary read-back.
pub const DEFAULT_LANG: &str = "ja-JP";

/// One request to speak.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    /// Monotonic id assigned by the controller; events carry it back.
    pub id: u64,
    pub text: String,
    pub lang: String,
}

/// Asynchronous notifications from a synthesizer about one utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    Started,
    Ended,
    Error(String),
}

/// Receiver of [`SpeechEvent`]s. Synthesizers may call it from any thread.
pub trait SpeechEvents: Send + Sync {
    fn notify(&self, utterance_id: u64, event: SpeechEvent);
}

/// Text-to-speech engine capability.
pub trait SpeechSynthesizer: Send + Sync {
    fn is_available(&self) -> bool;

    /// Queue `utterance`; progress is reported through `events`.
    fn speak(&self, utterance: Utterance, events: Arc<dyn SpeechEvents>) -> Result<()>;

    /// Stop whatever is speaking or queued.
    fn cancel(&self);
}
