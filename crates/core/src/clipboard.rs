use crate::error::{AppError, Result};

/// Destination for copied share text.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The platform clipboard via `arboard`.
///
/// A fresh handle is opened for each write; some platforms drop ownership
/// of the clipboard contents when the handle is kept across event loop turns.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| AppError::clipboard(format!("Could not access clipboard: {}", e)))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| AppError::clipboard(format!("Failed to copy to clipboard: {}", e)))
    }
}
