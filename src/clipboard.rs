// SPDX-License-Identifier: MPL-2.0
//! Clipboard access used to hand fatal-error details to the user.

use thiserror::Error;

/// Maximum clipboard content size in bytes (10 MB).
pub const MAX_CLIPBOARD_SIZE_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// The platform clipboard could not be opened or written.
    #[error("clipboard error: {0}")]
    Access(String),

    /// Content exceeds [`MAX_CLIPBOARD_SIZE_BYTES`].
    #[error("content too large for clipboard: {size} bytes exceeds {max_size} bytes")]
    ContentTooLarge { size: usize, max_size: usize },

    /// No clipboard in this environment.
    #[error("no clipboard available")]
    Unavailable,
}

/// Anything that can receive text for the user to paste elsewhere.
pub trait Clipboard: Send + Sync {
    /// Replaces the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns a [`ClipboardError`] if the text could not be stored.
    fn set_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard, opened anew for every write.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        if text.len() > MAX_CLIPBOARD_SIZE_BYTES {
            return Err(ClipboardError::ContentTooLarge {
                size: text.len(),
                max_size: MAX_CLIPBOARD_SIZE_BYTES,
            });
        }

        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Access(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Access(e.to_string()))
    }
}

/// A clipboard that rejects every write, for headless environments.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn set_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_clipboard_rejects_writes() {
        assert_eq!(NoClipboard.set_text("x"), Err(ClipboardError::Unavailable));
    }

    #[test]
    fn oversized_text_is_rejected_before_touching_the_clipboard() {
        let text = "x".repeat(MAX_CLIPBOARD_SIZE_BYTES + 1);
        assert!(matches!(
            SystemClipboard.set_text(&text),
            Err(ClipboardError::ContentTooLarge { .. })
        ));
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = ClipboardError::ContentTooLarge {
            size: 20,
            max_size: 10,
        };
        assert!(err.to_string().contains("20 bytes exceeds 10 bytes"));
    }
}
