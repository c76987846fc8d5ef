//! clipboard
//!
//! Clipboard collaborator: OSC 52 terminal clipboard writes.
//!
//! # Design
//!
//! The clipboard is the tool's only external resource. Writes are
//! fire-and-forget: the session reports success or failure as a notice,
//! and the outcome never touches table state.
//!
//! OSC 52 asks the hosting terminal to set the system clipboard, which
//! works across SSH and needs no display server. The payload is
//! base64-encoded and size-capped; terminals silently truncate or drop
//! oversized sequences, so an oversized write fails loudly here instead.

use std::io::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

/// Maximum text size accepted for one clipboard write, before encoding.
/// Common terminal OSC 52 buffers cap the whole sequence near 100 KB.
pub const MAX_TEXT_LEN: usize = 74_994;

/// Errors from clipboard operations.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The text exceeds the OSC 52 payload cap.
    #[error("text too large for clipboard ({len} bytes, max {max})")]
    TooLarge { len: usize, max: usize },

    /// Writing the escape sequence failed.
    #[error("clipboard write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A destination that can receive copied text.
pub trait Clipboard {
    /// Copy text to the clipboard.
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard backed by an OSC 52 escape sequence written to a terminal.
///
/// # Example
///
/// ```
/// use rowforge::clipboard::{Clipboard, Osc52Clipboard};
///
/// let mut sink = Vec::new();
/// Osc52Clipboard::new(&mut sink).copy("hello").unwrap();
/// assert_eq!(sink, b"\x1b]52;c;aGVsbG8=\x07");
/// ```
#[derive(Debug)]
pub struct Osc52Clipboard<W: Write> {
    writer: W,
}

impl<W: Write> Osc52Clipboard<W> {
    /// Create a clipboard writing to the given terminal stream.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        if text.len() > MAX_TEXT_LEN {
            return Err(ClipboardError::TooLarge {
                len: text.len(),
                max: MAX_TEXT_LEN,
            });
        }
        let payload = STANDARD.encode(text.as_bytes());
        write!(self.writer, "\x1b]52;c;{}\x07", payload)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_osc52_sequence() {
        let mut sink = Vec::new();
        Osc52Clipboard::new(&mut sink).copy("hi").unwrap();
        let written = String::from_utf8(sink).unwrap();
        assert!(written.starts_with("\x1b]52;c;"));
        assert!(written.ends_with('\x07'));
        assert!(written.contains("aGk="));
    }

    #[test]
    fn empty_text_is_allowed() {
        let mut sink = Vec::new();
        Osc52Clipboard::new(&mut sink).copy("").unwrap();
        assert_eq!(sink, b"\x1b]52;c;\x07");
    }

    #[test]
    fn oversized_text_rejected_before_writing() {
        let mut sink = Vec::new();
        let huge = "x".repeat(MAX_TEXT_LEN + 1);
        let err = Osc52Clipboard::new(&mut sink).copy(&huge).unwrap_err();
        assert!(matches!(err, ClipboardError::TooLarge { .. }));
        assert!(sink.is_empty());
    }

    #[test]
    fn io_failure_surfaces() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("pipe closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let err = Osc52Clipboard::new(Broken).copy("hi").unwrap_err();
        assert!(matches!(err, ClipboardError::Io(_)));
    }
}
