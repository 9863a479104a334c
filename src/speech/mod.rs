//! Speech output: read the diary entry aloud.
//!
//! The engine is a [`SpeechSynthesizer`]; [`SpeechController`] keeps the
//! `is_speaking` flag in sync with the engine's start/end/error events.

mod backends;
mod controller;
mod types;

pub use backends::{NullSpeech, RecordingSpeech};
pub use controller::SpeechController;
pub use types::{SpeechEvent, SpeechEvents, SpeechSynthesizer, Utterance, DEFAULT_LANG};
