//! Host clipboard abstraction.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors a clipboard write can report.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClipboardError {
    #[error("Clipboard permission denied")]
    PermissionDenied,

    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Somewhere the order text can be written for the user to paste.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Keeps the last written text in memory. Clones share the contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last text written, if any.
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut guard = self
            .contents
            .lock()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        *guard = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_clipboard_keeps_last_write() {
        let clipboard = MemoryClipboard::new();
        let view = clipboard.clone();
        assert_eq!(view.contents(), None);

        clipboard.write_text("first").await.unwrap();
        clipboard.write_text("second").await.unwrap();
        assert_eq!(view.contents().as_deref(), Some("second"));
    }
}
