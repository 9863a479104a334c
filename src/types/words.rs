//! Word count and word set: the user's input to a generation.

use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of words in a diary prompt. Only 3, 5 and 7 are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum WordCount {
    #[default]
    Three,
    Five,
    Seven,
}

impl WordCount {
    pub const ALL: [WordCount; 3] = [WordCount::Three, WordCount::Five, WordCount::Seven];

    pub fn get(self) -> usize {
        match self {
            Self::Three => 3,
            Self::Five => 5,
            Self::Seven => 7,
        }
    }

    /// Lenient conversion used when restoring stored drafts, where the count
    /// may have been written as a number or a numeric string.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .and_then(|n| Self::try_from(n).ok()),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl TryFrom<u32> for WordCount {
    type Error = Error;

    fn try_from(n: u32) -> Result<Self> {
        match n {
            3 => Ok(Self::Three),
            5 => Ok(Self::Five),
            7 => Ok(Self::Seven),
            other => Err(Error::validation_with_context(
                format!("word count must be 3, 5 or 7, got {}", other),
                ErrorContext::new().with_field_path("count"),
            )),
        }
    }
}

impl From<WordCount> for u32 {
    fn from(c: WordCount) -> u32 {
        c.get() as u32
    }
}

impl FromStr for WordCount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let n: u32 = s.parse().map_err(|_| {
            Error::validation_with_context(
                format!("word count is not a number: {:?}", s),
                ErrorContext::new().with_field_path("count"),
            )
        })?;
        Self::try_from(n)
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Ordered word slots whose length always equals the selected [`WordCount`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSet {
    count: WordCount,
    words: Vec<String>,
}

impl WordSet {
    /// All slots empty.
    pub fn blank(count: WordCount) -> Self {
        Self {
            count,
            words: vec![String::new(); count.get()],
        }
    }

    /// Build from a complete list. The list length decides the count.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let count = u32::try_from(words.len())
            .map_err(|_| Error::validation("too many words"))
            .and_then(WordCount::try_from)?;
        Ok(Self { count, words })
    }

    /// Pad with blanks or truncate so the set matches `count`.
    pub fn fitted(count: WordCount, mut words: Vec<String>) -> Self {
        words.resize(count.get(), String::new());
        Self { count, words }
    }

    pub fn count(&self) -> WordCount {
        self.count
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn set(&mut self, index: usize, value: impl Into<String>) -> Result<()> {
        let len = self.words.len();
        let slot = self.words.get_mut(index).ok_or_else(|| {
            Error::validation_with_context(
                format!("word slot {} out of range (0..{})", index, len),
                ErrorContext::new().with_field_path(format!("words[{}]", index)),
            )
        })?;
        *slot = value.into();
        Ok(())
    }

    /// Trimmed, non-empty entries in slot order.
    pub fn filled(&self) -> Vec<String> {
        self.words
            .iter()
            .map(|w| w.trim())
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// True when every slot has text after trimming.
    pub fn is_complete(&self) -> bool {
        self.filled().len() == self.count.get()
    }
}
