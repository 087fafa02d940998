use crate::{Error, Result};
use std::sync::{Arc, Mutex};

pub trait ClipboardSink: Send + Sync {
    fn set_text(&self, text: &str) -> Result<()>;
}

/// System clipboard via `arboard`. A handle is opened per copy so a missing
/// display only fails that copy.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| Error::Clipboard(e.to_string()))?;
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MockClipboard {
    copied: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose every write fails.
    pub fn failing() -> Self {
        Self {
            copied: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    pub fn copied(&self) -> Vec<String> {
        self.copied.lock().unwrap().clone()
    }
}

impl ClipboardSink for MockClipboard {
    fn set_text(&self, text: &str) -> Result<()> {
        if self.fail {
            return Err(Error::Clipboard("clipboard unavailable".to_string()));
        }
        self.copied.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
