// # Memory Clipboard
//
// In-memory implementation of Clipboard.
//
// Keeps every copied text in order. Useful for tests and for running the
// CLI where no desktop clipboard exists.

use std::sync::{Arc, Mutex};

use crate::Error;
use crate::traits::Clipboard;

/// In-memory clipboard
///
/// Clones share the same contents.
///
/// # Example
///
/// ```rust
/// use ddns_admin_core::clipboard::MemoryClipboard;
/// use ddns_admin_core::traits::Clipboard;
///
/// let clipboard = MemoryClipboard::new();
/// clipboard.copy("http://u:p@example.com/update?hostname=h").unwrap();
///
/// assert_eq!(
///     clipboard.contents().as_deref(),
///     Some("http://u:p@example.com/update?hostname=h")
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    history: Arc<Mutex<Vec<String>>>,
}

impl MemoryClipboard {
    /// Create an empty clipboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clipboard contents
    pub fn contents(&self) -> Option<String> {
        let history = self.history.lock().unwrap_or_else(|e| e.into_inner());
        history.last().cloned()
    }

    /// Every text copied so far, oldest first
    pub fn history(&self) -> Vec<String> {
        self.history.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&self, text: &str) -> Result<(), Error> {
        let mut history = self.history.lock().unwrap_or_else(|e| e.into_inner());
        history.push(text.to_string());
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}
