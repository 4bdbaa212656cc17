// # Clipboard Trait
//
// Defines the interface for placing text on the system clipboard.
//
// ## Implementations
//
// - `MemoryClipboard`: keeps the text in memory (tests, headless use)
// - `CommandClipboard`: pipes the text into a native clipboard tool
//
// Implementations write the text directly. Selection-based copy tricks
// (focus an element, select it, issue a copy command) are not used.

/// Trait for clipboard implementations
///
/// # Thread Safety
///
/// Implementations must be safe to share between threads.
pub trait Clipboard: Send + Sync {
    /// Replace the clipboard contents with `text`
    ///
    /// # Returns
    ///
    /// - `Ok(())`: The text is on the clipboard
    /// - `Err(Error)`: No clipboard backend accepted the text
    fn copy(&self, text: &str) -> Result<(), crate::Error>;

    /// Name of the backend (for logging)
    fn backend_name(&self) -> &str;
}
