use super::types::{SpeechEvent, SpeechEvents, SpeechSynthesizer, Utterance, DEFAULT_LANG};
use crate::{Error, ErrorContext, Result};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

/// Tracks which utterance is current and whether it is audible.
#[derive(Default)]
struct SpeakingState {
    current: AtomicU64,
    speaking: AtomicBool,
}

impl SpeechEvents for SpeakingState {
    fn notify(&self, utterance_id: u64, event: SpeechEvent) {
        // Events for a replaced or stopped utterance are ignored.
        if utterance_id != self.current.load(Ordering::Acquire) {
            return;
        }
        match event {
            SpeechEvent::Started => self.speaking.store(true, Ordering::Release),
            SpeechEvent::Ended => self.speaking.store(false, Ordering::Release),
            SpeechEvent::Error(reason) => {
                debug!(utterance_id, reason = reason.as_str(), "speech ended with error");
                self.speaking.store(false, Ordering::Release);
            }
        }
    }
}

/// Owns a synthesizer and the derived `is_speaking` flag.
pub struct SpeechController {
    synth: Arc<dyn SpeechSynthesizer>,
    state: Arc<SpeakingState>,
    next_id: AtomicU64,
    lang: String,
}

impl SpeechController {
    pub fn new(synth: Arc<dyn SpeechSynthesizer>) -> Self {
        Self {
            synth,
            state: Arc::new(SpeakingState::default()),
            next_id: AtomicU64::new(1),
            lang: DEFAULT_LANG.to_string(),
        }
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn is_available(&self) -> bool {
        self.synth.is_available()
    }

    pub fn is_speaking(&self) -> bool {
        self.state.speaking.load(Ordering::Acquire)
    }

    /// Speak `text`, cancelling anything already speaking.
    pub fn speak(&self, text: &str) -> Result<()> {
        if !self.synth.is_available() {
            warn!("speech synthesis is not available");
            return Err(Error::capability_with_context(
                "speech synthesis is not available",
                ErrorContext::new().with_source("speech"),
            ));
        }
        self.synth.cancel();
        self.state.speaking.store(false, Ordering::Release);

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.state.current.store(id, Ordering::Release);
        let utterance = Utterance {
            id,
            text: text.to_string(),
            lang: self.lang.clone(),
        };
        let events: Arc<dyn SpeechEvents> = self.state.clone();
        if let Err(e) = self.synth.speak(utterance, events) {
            self.state.current.store(0, Ordering::Release);
            return Err(e);
        }
        Ok(())
    }

    /// Cancel speech and clear the flag immediately.
    pub fn stop(&self) {
        if !self.synth.is_available() {
            return;
        }
        self.synth.cancel();
        self.state.current.store(0, Ordering::Release);
        self.state.speaking.store(false, Ordering::Release);
    }
}
