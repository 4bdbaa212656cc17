// # Clipboard Implementations
//
// This module provides implementations of the Clipboard trait for
// different environments.

pub mod command;
pub mod memory;

pub use command::CommandClipboard;
pub use memory::MemoryClipboard;

use crate::config::ClipboardConfig;
use crate::traits::Clipboard;

/// Create the clipboard backend described by `config`
pub fn create_clipboard(config: &ClipboardConfig) -> Result<Box<dyn Clipboard>, crate::Error> {
    config.validate()?;

    let clipboard: Box<dyn Clipboard> = match config {
        ClipboardConfig::Command => Box::new(CommandClipboard::detect()),
        ClipboardConfig::Program { program, args } => {
            Box::new(CommandClipboard::with_program(program.clone(), args.clone()))
        }
        ClipboardConfig::Memory => Box::new(MemoryClipboard::new()),
    };

    tracing::debug!("Using {} clipboard", clipboard.backend_name());
    Ok(clipboard)
}
