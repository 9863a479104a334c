//! Local draft persistence: one named record holding `{count, words, result}`.
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`DraftStore`] | Trait for the single draft slot |
//! | [`MemoryDraftStore`] | In-memory slot (tests, ephemeral sessions) |
//! | [`FileDraftStore`] | JSON file on disk |
//! | [`Draft`] / [`StoredDraft`] | Typed record and its loosely-typed stored form |

mod record;
mod store;

pub use record::{Draft, StoredDraft};
pub use store::{DraftStore, FileDraftStore, MemoryDraftStore, DRAFT_KEY};
