// # Command Clipboard
//
// Clipboard implementation that pipes text into a native clipboard tool.
//
// ## Detection Order
//
// - macOS: `pbcopy`
// - Windows: `clip`
// - Others: `wl-copy` (Wayland sessions first), `xclip`, `xsel`
//
// The first tool that can be spawned is used for each copy; tools that are
// not installed are skipped.

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use crate::Error;
use crate::traits::Clipboard;

/// A clipboard tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardCommand {
    /// Executable to run
    pub program: String,
    /// Arguments passed to the executable
    pub args: Vec<String>,
}

impl ClipboardCommand {
    fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Clipboard backed by external clipboard tools
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    name: String,
    candidates: Vec<ClipboardCommand>,
}

impl CommandClipboard {
    /// Use the native tools for the current platform
    pub fn detect() -> Self {
        Self {
            name: "command".to_string(),
            candidates: platform_candidates(),
        }
    }

    /// Use one specific program
    pub fn with_program(program: impl Into<String>, args: Vec<String>) -> Self {
        let program = program.into();
        Self {
            name: program.clone(),
            candidates: vec![ClipboardCommand { program, args }],
        }
    }

    /// Tools tried on each copy, in order
    pub fn candidates(&self) -> &[ClipboardCommand] {
        &self.candidates
    }
}

fn platform_candidates() -> Vec<ClipboardCommand> {
    if cfg!(target_os = "macos") {
        return vec![ClipboardCommand::new("pbcopy", &[])];
    }
    if cfg!(windows) {
        return vec![ClipboardCommand::new("clip", &[])];
    }

    let mut candidates = Vec::new();
    let wayland = std::env::var_os("WAYLAND_DISPLAY").is_some();
    if wayland {
        candidates.push(ClipboardCommand::new("wl-copy", &[]));
    }
    candidates.push(ClipboardCommand::new("xclip", &["-selection", "clipboard"]));
    candidates.push(ClipboardCommand::new("xsel", &["--clipboard", "--input"]));
    if !wayland {
        candidates.push(ClipboardCommand::new("wl-copy", &[]));
    }
    candidates
}

/// Run one tool; `Ok(false)` means it is not installed
fn pipe_into(command: &ClipboardCommand, text: &str) -> Result<bool, Error> {
    let mut child = match Command::new(&command.program)
        .args(&command.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e.into()),
    };

    // A tool that exits early is reported through its exit status below.
    if let Some(mut stdin) = child.stdin.take() {
        match stdin.write_all(text.as_bytes()) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {}
            Err(e) => return Err(e.into()),
        }
    }

    let output = child.wait_with_output()?;
    if !output.status.success() {
        return Err(Error::clipboard(format!(
            "{} exited with {}: {}",
            command.program,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    Ok(true)
}

impl Clipboard for CommandClipboard {
    fn copy(&self, text: &str) -> Result<(), Error> {
        for command in &self.candidates {
            if pipe_into(command, text)? {
                tracing::debug!("Copied {} bytes with {}", text.len(), command.program);
                return Ok(());
            }
            tracing::debug!("Clipboard tool not installed: {}", command.program);
        }

        let tried: Vec<&str> = self.candidates.iter().map(|c| c.program.as_str()).collect();
        Err(Error::clipboard(format!(
            "no clipboard tool found (tried: {})",
            tried.join(", ")
        )))
    }

    fn backend_name(&self) -> &str {
        &self.name
    }
}
