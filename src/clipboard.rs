//! Clipboard capability.

use crate::{Error, ErrorContext, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

#[async_trait]
pub trait Clipboard: Send + Sync {
    fn is_available(&self) -> bool;
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// Keeps the last written text in memory.
#[derive(Default)]
pub struct MemoryClipboard {
    contents: RwLock<Option<String>>,
    failing: AtomicBool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.read().ok().and_then(|c| c.clone())
    }

    /// Make subsequent writes fail, e.g. to mimic a denied permission.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::Relaxed);
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    fn is_available(&self) -> bool {
        true
    }

    async fn write_text(&self, text: &str) -> Result<()> {
        let ctx = || ErrorContext::new().with_source("memory_clipboard");
        if self.failing.load(Ordering::Relaxed) {
            return Err(Error::capability_with_context("clipboard write denied", ctx()));
        }
        let mut contents = self
            .contents
            .write()
            .map_err(|_| Error::capability_with_context("clipboard lock poisoned", ctx()))?;
        *contents = Some(text.to_string());
        Ok(())
    }
}

/// No clipboard at all.
pub struct NullClipboard;

#[async_trait]
impl Clipboard for NullClipboard {
    fn is_available(&self) -> bool {
        false
    }

    async fn write_text(&self, _: &str) -> Result<()> {
        Err(Error::capability_with_context(
            "clipboard is not available",
            ErrorContext::new().with_source("null_clipboard"),
        ))
    }
}
