//! Draft store backends.

use super::record::{Draft, StoredDraft};
use crate::{Error, ErrorContext, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::debug;

/// Fixed record name. Bump the suffix if the record shape ever changes.
pub const DRAFT_KEY: &str = "word-diary-draft-v1";

/// Single-slot draft persistence.
///
/// Records are written and read whole; the last save wins.
pub trait DraftStore: Send + Sync {
    fn save(&self, draft: &Draft) -> Result<()>;
    /// `Ok(None)` when nothing has been saved (or the slot was cleared).
    fn load(&self) -> Result<Option<StoredDraft>>;
    /// Removing an absent record is not an error.
    fn clear(&self) -> Result<()>;
    fn name(&self) -> &'static str;
}

fn encode(draft: &Draft) -> Result<String> {
    Ok(serde_json::to_string(draft)?)
}

fn decode(raw: &str) -> Result<Option<StoredDraft>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    let value: Value = serde_json::from_str(raw)?;
    if value.is_null() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_value(value)?))
}

fn poisoned(source: &'static str) -> Error {
    Error::capability_with_context("draft slot lock poisoned", ErrorContext::new().with_source(source))
}

/// In-memory slot holding the serialized record, like a browser's local storage.
#[derive(Default)]
pub struct MemoryDraftStore {
    slot: RwLock<Option<String>>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored text, for inspection.
    pub fn raw(&self) -> Option<String> {
        self.slot.read().ok().and_then(|s| s.clone())
    }

    /// Overwrite the raw stored text, e.g. to simulate a record written by
    /// another version.
    pub fn put_raw(&self, raw: impl Into<String>) -> Result<()> {
        *self.slot.write().map_err(|_| poisoned("memory_draft_store"))? = Some(raw.into());
        Ok(())
    }
}

impl DraftStore for MemoryDraftStore {
    fn save(&self, draft: &Draft) -> Result<()> {
        let raw = encode(draft)?;
        self.put_raw(raw)
    }

    fn load(&self) -> Result<Option<StoredDraft>> {
        let slot = self.slot.read().map_err(|_| poisoned("memory_draft_store"))?;
        match slot.as_deref() {
            Some(raw) => decode(raw),
            None => Ok(None),
        }
    }

    fn clear(&self) -> Result<()> {
        *self.slot.write().map_err(|_| poisoned("memory_draft_store"))? = None;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

/// One JSON file, `<dir>/word-diary-draft-v1.json`.
///
/// Saves go through a temporary sibling and a rename so a reader never sees
/// half a record.
pub struct FileDraftStore {
    path: PathBuf,
}

impl FileDraftStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", DRAFT_KEY)),
        }
    }

    /// Directory from `WORD_DIARY_DRAFT_DIR`, else the current directory.
    pub fn from_env() -> Self {
        let dir = std::env::var("WORD_DIARY_DRAFT_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl DraftStore for FileDraftStore {
    fn save(&self, draft: &Draft) -> Result<()> {
        let raw = encode(draft)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp = self.tmp_path();
        std::fs::write(&tmp, raw)?;
        if let Err(e) = std::fs::rename(&tmp, &self.path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(e.into());
        }
        debug!(path = %self.path.display(), "draft saved");
        Ok(())
    }

    fn load(&self) -> Result<Option<StoredDraft>> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => decode(&raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "draft cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
