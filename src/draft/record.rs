//! Draft record and its lenient restoration.

use crate::types::{WordCount, WordSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Single saved draft: the selected count, the word slots, and the passage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub count: WordCount,
    pub words: Vec<String>,
    pub result: String,
}

impl Draft {
    pub fn new(words: &WordSet, result: impl Into<String>) -> Self {
        Self {
            count: words.count(),
            words: words.as_slice().to_vec(),
            result: result.into(),
        }
    }

    pub fn word_set(&self) -> WordSet {
        WordSet::fitted(self.count, self.words.clone())
    }
}

/// A draft as read back from storage, before any field is trusted.
///
/// Stored records may come from an older build or be hand-edited, so every
/// field stays loosely typed until [`StoredDraft::restore`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredDraft {
    #[serde(default)]
    pub count: Value,
    #[serde(default)]
    pub words: Value,
    #[serde(default)]
    pub result: Value,
}

impl StoredDraft {
    /// Turn the stored record into a consistent [`Draft`].
    ///
    /// The stored count wins when it is 3, 5 or 7; otherwise `selected` is
    /// kept. Words are always fitted to that one effective count, and a
    /// non-string result becomes empty.
    pub fn restore(&self, selected: WordCount) -> Draft {
        let count = WordCount::from_json(&self.count).unwrap_or(selected);
        let words = match &self.words {
            Value::Array(items) => items
                .iter()
                .map(|w| w.as_str().unwrap_or_default().to_string())
                .collect(),
            _ => Vec::new(),
        };
        let words = WordSet::fitted(count, words).as_slice().to_vec();
        let result = self.result.as_str().unwrap_or_default().to_string();
        Draft {
            count,
            words,
            result,
        }
    }
}

impl From<&Draft> for StoredDraft {
    fn from(draft: &Draft) -> Self {
        Self {
            count: Value::from(u32::from(draft.count)),
            words: Value::from(draft.words.clone()),
            result: Value::from(draft.result.clone()),
        }
    }
}
