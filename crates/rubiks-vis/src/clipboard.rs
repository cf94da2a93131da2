//! Plain-text clipboard sinks.

use std::sync::{Arc, Mutex};

use crate::error::{Error, Result};

/// Where revealed vertex indices are copied to.
pub trait ClipboardSink: Send + 'static {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// In-memory clipboard. Clones share one buffer, so a caller can keep a handle
/// and read back what the session copied.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    buffer: Arc<Mutex<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently copied text.
    pub fn contents(&self) -> Option<String> {
        self.buffer.lock().ok().and_then(|buffer| buffer.clone())
    }
}

impl ClipboardSink for MemoryClipboard {
    /// Empty strings leave the clipboard as it was.
    fn write_text(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        let mut buffer = self
            .buffer
            .lock()
            .map_err(|_| Error::Clipboard("buffer lock poisoned".into()))?;
        *buffer = Some(text.to_string());
        Ok(())
    }
}
