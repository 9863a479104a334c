//! # Client Orchestrator
//!
//! UI-independent state behind the diary screen: the selected word count,
//! the word slots, the generated (and user-editable) passage, the status
//! line, and the "generation in progress" flag.
//!
//! Every collaborator is a capability trait so a front end (or a test) can
//! plug in its own:
//!
//! | Capability | Trait | Defaults |
//! |------------|-------|----------|
//! | Generation | [`DiaryGenerator`] | required |
//! | Draft slot | [`DraftStore`] | [`MemoryDraftStore`] |
//! | Speech | [`SpeechSynthesizer`] | [`NullSpeech`] |
//! | Clipboard | [`Clipboard`] | [`NullClipboard`] |
//!
//! No action ever panics or returns an error to the caller for a
//! collaborator failure; failures become a [`Status`].

mod status;

#[cfg(test)]
mod tests;

pub use status::Status;

use crate::client::DiaryGenerator;
use crate::clipboard::{Clipboard, NullClipboard};
use crate::draft::{Draft, DraftStore, MemoryDraftStore};
use crate::speech::{NullSpeech, SpeechController, SpeechSynthesizer};
use crate::types::{WordCount, WordSet};
use crate::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{error, info, warn};

/// Snapshot of what a front end renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub words: WordSet,
    pub result: String,
    pub status: Option<Status>,
}

/// Held while a generation is in flight; clears the flag on every exit path,
/// including a dropped (cancelled) future.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct Orchestrator {
    generator: Arc<dyn DiaryGenerator>,
    drafts: Arc<dyn DraftStore>,
    speech: SpeechController,
    clipboard: Arc<dyn Clipboard>,
    view: Mutex<View>,
    generating: AtomicBool,
}

impl Orchestrator {
    pub fn builder(generator: Arc<dyn DiaryGenerator>) -> OrchestratorBuilder {
        OrchestratorBuilder::new(generator)
    }

    fn view(&self) -> MutexGuard<'_, View> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_status(&self, status: Status) -> Status {
        self.view().status = Some(status.clone());
        status
    }

    pub fn snapshot(&self) -> View {
        self.view().clone()
    }

    pub fn word_count(&self) -> WordCount {
        self.view().words.count()
    }

    pub fn words(&self) -> WordSet {
        self.view().words.clone()
    }

    pub fn result(&self) -> String {
        self.view().result.clone()
    }

    pub fn status(&self) -> Option<Status> {
        self.view().status.clone()
    }

    /// Replace the word slots with `count` blanks and clear the status.
    pub fn set_word_count(&self, count: WordCount) {
        let mut view = self.view();
        view.words = WordSet::blank(count);
        view.status = None;
    }

    pub fn set_word(&self, index: usize, value: impl Into<String>) -> Result<()> {
        self.view().words.set(index, value)
    }

    /// User edit of the generated passage.
    pub fn set_result(&self, text: impl Into<String>) {
        self.view().result = text.into();
    }

    pub fn is_generating(&self) -> bool {
        self.generating.load(Ordering::Acquire)
    }

    pub fn can_generate(&self) -> bool {
        !self.is_generating()
    }

    fn has_text(&self) -> bool {
        !self.view().result.trim().is_empty()
    }

    pub fn can_copy(&self) -> bool {
        self.has_text() && self.clipboard.is_available()
    }

    pub fn can_speak(&self) -> bool {
        self.has_text() && self.speech.is_available()
    }

    pub fn can_stop(&self) -> bool {
        self.speech.is_speaking()
    }

    /// Ask the generator for a diary entry built from the current words.
    ///
    /// On failure the previous result stays untouched.
    pub async fn generate(&self) -> Status {
        let Some(_in_flight) = InFlight::acquire(&self.generating) else {
            return self.set_status(Status::Busy);
        };
        let words = self.words();
        if !words.is_complete() {
            return self.set_status(Status::MissingWords(words.count()));
        }
        self.set_status(Status::Generating);

        match self.generator.generate(&words).await {
            Ok(text) => {
                let status = if text.trim().is_empty() {
                    Status::GeneratedEmpty
                } else {
                    Status::Generated
                };
                info!(
                    words = words.len(),
                    chars = text.chars().count(),
                    "diary generated"
                );
                let mut view = self.view();
                view.result = text;
                view.status = Some(status.clone());
                status
            }
            Err(e) => {
                error!(error = %e, "diary generation failed");
                self.set_status(Status::GenerationFailed {
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Copy the trimmed passage. `None` when there is nothing to copy.
    pub async fn copy(&self) -> Option<Status> {
        let text = self.view().result.trim().to_string();
        if text.is_empty() {
            return None;
        }
        let status = match self.clipboard.write_text(&text).await {
            Ok(()) => Status::Copied,
            Err(e) => {
                warn!(error = %e, "clipboard write failed");
                Status::CopyFailed
            }
        };
        Some(self.set_status(status))
    }

    /// Read the trimmed passage aloud. `None` when there is nothing to read.
    pub fn speak(&self) -> Option<Status> {
        let text = self.view().result.trim().to_string();
        if text.is_empty() {
            return None;
        }
        let status = match self.speech.speak(&text) {
            Ok(()) => Status::Speaking,
            Err(e) => {
                warn!(error = %e, "speech failed");
                Status::SpeechFailed
            }
        };
        Some(self.set_status(status))
    }

    pub fn stop(&self) -> Status {
        self.speech.stop();
        self.set_status(Status::SpeechStopped)
    }

    pub fn save_draft(&self) -> Status {
        let draft = {
            let view = self.view();
            Draft::new(&view.words, view.result.clone())
        };
        let status = match self.drafts.save(&draft) {
            Ok(()) => Status::DraftSaved,
            Err(e) => {
                warn!(store = self.drafts.name(), error = %e, "draft save failed");
                Status::DraftSaveFailed
            }
        };
        self.set_status(status)
    }

    /// Restore the saved draft; see [`crate::draft::StoredDraft::restore`]
    /// for how loosely-typed records are reconciled.
    pub fn load_draft(&self) -> Status {
        let selected = self.word_count();
        let status = match self.drafts.load() {
            Ok(None) => Status::NoDraft,
            Ok(Some(stored)) => {
                let draft = stored.restore(selected);
                let mut view = self.view();
                view.words = draft.word_set();
                view.result = draft.result;
                Status::DraftRestored
            }
            Err(e) => {
                warn!(store = self.drafts.name(), error = %e, "draft load failed");
                Status::DraftLoadFailed
            }
        };
        self.set_status(status)
    }

    pub fn clear_draft(&self) -> Status {
        let status = match self.drafts.clear() {
            Ok(()) => Status::DraftCleared,
            Err(e) => {
                warn!(store = self.drafts.name(), error = %e, "draft clear failed");
                Status::DraftClearFailed
            }
        };
        self.set_status(status)
    }
}

/// Builder for [`Orchestrator`]. Only the generator is required.
pub struct OrchestratorBuilder {
    generator: Arc<dyn DiaryGenerator>,
    drafts: Option<Arc<dyn DraftStore>>,
    speech: Option<Arc<dyn SpeechSynthesizer>>,
    clipboard: Option<Arc<dyn Clipboard>>,
    word_count: WordCount,
    lang: Option<String>,
}

impl OrchestratorBuilder {
    pub fn new(generator: Arc<dyn DiaryGenerator>) -> Self {
        Self {
            generator,
            drafts: None,
            speech: None,
            clipboard: None,
            word_count: WordCount::default(),
            lang: None,
        }
    }

    pub fn drafts(mut self, store: Arc<dyn DraftStore>) -> Self {
        self.drafts = Some(store);
        self
    }

    pub fn speech(mut self, synth: Arc<dyn SpeechSynthesizer>) -> Self {
        self.speech = Some(synth);
        self
    }

    pub fn clipboard(mut self, clipboard: Arc<dyn Clipboard>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    pub fn word_count(mut self, count: WordCount) -> Self {
        self.word_count = count;
        self
    }

    /// Speech language tag; defaults to `ja-JP`.
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn build(self) -> Orchestrator {
        let synth = self
            .speech
            .unwrap_or_else(|| Arc::new(NullSpeech) as Arc<dyn SpeechSynthesizer>);
        let mut speech = SpeechController::new(synth);
        if let Some(lang) = self.lang {
            speech = speech.with_lang(lang);
        }
        Orchestrator {
            generator: self.generator,
            drafts: self
                .drafts
                .unwrap_or_else(|| Arc::new(MemoryDraftStore::new()) as Arc<dyn DraftStore>),
            speech,
            clipboard: self
                .clipboard
                .unwrap_or_else(|| Arc::new(NullClipboard) as Arc<dyn Clipboard>),
            view: Mutex::new(View {
                words: WordSet::blank(self.word_count),
                result: String::new(),
                status: None,
            }),
            generating: AtomicBool::new(false),
        }
    }
}
