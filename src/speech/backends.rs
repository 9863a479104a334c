//! Synthesizer implementations that need no audio device.

use super::types::{SpeechEvent, SpeechEvents, SpeechSynthesizer, Utterance};
use crate::{Error, ErrorContext, Result};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Stand-in for environments without speech output.
pub struct NullSpeech;

impl SpeechSynthesizer for NullSpeech {
    fn is_available(&self) -> bool {
        false
    }

    fn speak(&self, _: Utterance, _: Arc<dyn SpeechEvents>) -> Result<()> {
        Err(Error::capability_with_context(
            "speech synthesis is not available",
            ErrorContext::new().with_source("null_speech"),
        ))
    }

    fn cancel(&self) {}
}

#[derive(Default)]
struct Recorded {
    utterances: Vec<Utterance>,
    cancels: usize,
    active: Option<(u64, Arc<dyn SpeechEvents>)>,
}

/// In-memory synthesizer that records utterances and lets the caller drive
/// the event sequence.
#[derive(Default)]
pub struct RecordingSpeech {
    inner: Mutex<Recorded>,
    auto_start: bool,
}

impl RecordingSpeech {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `Started` as soon as an utterance is queued.
    pub fn auto_start(mut self, enabled: bool) -> Self {
        self.auto_start = enabled;
        self
    }

    fn lock(&self) -> MutexGuard<'_, Recorded> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn utterances(&self) -> Vec<Utterance> {
        self.lock().utterances.clone()
    }

    pub fn cancel_count(&self) -> usize {
        self.lock().cancels
    }

    /// Send `event` for any utterance id, current or not.
    pub fn emit(&self, utterance_id: u64, event: SpeechEvent) {
        let sink = self.lock().active.as_ref().map(|(_, sink)| sink.clone());
        if let Some(sink) = sink {
            sink.notify(utterance_id, event);
        }
    }

    /// Report the active utterance as started.
    pub fn start(&self) {
        self.notify_active(SpeechEvent::Started, false);
    }

    /// Report the active utterance as finished.
    pub fn finish(&self) {
        self.notify_active(SpeechEvent::Ended, true);
    }

    /// Report the active utterance as failed.
    pub fn fail(&self, reason: &str) {
        self.notify_active(SpeechEvent::Error(reason.to_string()), true);
    }

    fn notify_active(&self, event: SpeechEvent, release: bool) {
        let active = {
            let mut inner = self.lock();
            if release {
                inner.active.take()
            } else {
                inner.active.clone()
            }
        };
        if let Some((id, sink)) = active {
            sink.notify(id, event);
        }
    }
}

impl SpeechSynthesizer for RecordingSpeech {
    fn is_available(&self) -> bool {
        true
    }

    fn speak(&self, utterance: Utterance, events: Arc<dyn SpeechEvents>) -> Result<()> {
        let id = utterance.id;
        {
            let mut inner = self.lock();
            inner.utterances.push(utterance);
            inner.active = Some((id, events.clone()));
        }
        if self.auto_start {
            events.notify(id, SpeechEvent::Started);
        }
        Ok(())
    }

    fn cancel(&self) {
        let interrupted = {
            let mut inner = self.lock();
            inner.cancels += 1;
            inner.active.take()
        };
        if let Some((id, sink)) = interrupted {
            sink.notify(id, SpeechEvent::Error("interrupted".to_string()));
        }
    }
}
