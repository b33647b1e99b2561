//! Clipboard access for copying the generated reply.

use arboard::Clipboard;
use thiserror::Error;

/// Errors from the system clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(#[source] arboard::Error),

    #[error("failed to set clipboard text: {0}")]
    Write(#[source] arboard::Error),
}

/// Destination for copied text.
pub trait ClipboardWriter {
    /// Write text to the clipboard. The copy is acknowledged only on `Ok`.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Handler for the system clipboard.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    /// Create a new clipboard handler.
    pub fn new() -> Result<Self, ClipboardError> {
        let clipboard = Clipboard::new().map_err(ClipboardError::Unavailable)?;
        Ok(Self { clipboard })
    }
}

impl ClipboardWriter for ClipboardHandler {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard
            .set_text(text.to_string())
            .map_err(ClipboardError::Write)
    }
}
