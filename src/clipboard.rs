use std::sync::{Arc, Mutex};

/// Destination for the calculated result. Copying is best effort: `copy`
/// reports whether the text landed, and callers surface that in the UI
/// instead of treating a miss as an error.
pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> bool;
}

/// System clipboard via arboard. The handle is opened once at startup; on
/// headless machines (no display server) it simply never opens and every
/// copy reports false.
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self {
            inner: arboard::Clipboard::new().ok(),
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> bool {
        match self.inner.as_mut() {
            Some(clipboard) => clipboard.set_text(text.to_owned()).is_ok(),
            None => false,
        }
    }
}

/// In-memory sink for tests. Clones share the same store, so a test can
/// hand one clone to the app and inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    texts: Arc<Mutex<Vec<String>>>,
}

impl MemoryClipboard {
    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().map(|texts| texts.clone()).unwrap_or_default()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn copy(&mut self, text: &str) -> bool {
        if let Ok(mut texts) = self.texts.lock() {
            texts.push(text.to_string());
        }
        true
    }
}
