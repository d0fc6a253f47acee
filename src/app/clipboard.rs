//! Clipboard access
//!
//! The system clipboard is reached through platform tools. Detection order:
//! pbcopy/pbpaste (macOS) → wl-copy/wl-paste (Wayland) → xclip (X11) → xsel (X11 fallback)

use std::cell::RefCell;
use std::fmt;
use std::io::Write;
use std::process::{Child, Command, ExitStatus, Stdio};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("No clipboard tool found (install pbcopy, xclip, or wl-copy)")]
    NoTool,

    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: &'static str,
        source: std::io::Error,
    },

    #[error("Failed to write to {program}: {source}")]
    Write {
        program: &'static str,
        source: std::io::Error,
    },

    #[error("Failed to wait for {program}: {source}")]
    Wait {
        program: &'static str,
        source: std::io::Error,
    },

    #[error("Clipboard content is not UTF-8")]
    NotUtf8,
}

/// Text clipboard
pub trait Clipboard: fmt::Debug {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError>;
    fn get_text(&self) -> Result<String, ClipboardError>;
}

/// Copy/paste command pairs in priority order
const TOOLS: &[(&[&str], &[&str])] = &[
    (&["pbcopy"], &["pbpaste"]),
    (&["wl-copy"], &["wl-paste", "--no-newline"]),
    (
        &["xclip", "-selection", "clipboard"],
        &["xclip", "-selection", "clipboard", "-o"],
    ),
    (
        &["xsel", "--clipboard", "--input"],
        &["xsel", "--clipboard", "--output"],
    ),
];

/// Clipboard backed by platform command-line tools
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    /// Copy text to system clipboard.
    ///
    /// Tries platform-specific commands in priority order.
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        for (copy, _) in TOOLS {
            let program = copy[0];
            if !is_available(program) {
                continue;
            }

            let mut child = Command::new(program)
                .args(&copy[1..])
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
                .map_err(|source| ClipboardError::Spawn { program, source })?;

            if pipe_text(&mut child, program, text)?.success() {
                return Ok(());
            }
        }

        Err(ClipboardError::NoTool)
    }

    /// Read text from the system clipboard
    fn get_text(&self) -> Result<String, ClipboardError> {
        for (_, paste) in TOOLS {
            let program = paste[0];
            if !is_available(program) {
                continue;
            }

            let output = Command::new(program)
                .args(&paste[1..])
                .stdin(Stdio::null())
                .stderr(Stdio::null())
                .output()
                .map_err(|source| ClipboardError::Spawn { program, source })?;

            if output.status.success() {
                return String::from_utf8(output.stdout).map_err(|_| ClipboardError::NotUtf8);
            }
        }

        Err(ClipboardError::NoTool)
    }
}

/// Feed `text` to the child's stdin and wait for it.
///
/// The child is reaped on every path, including a failed write.
fn pipe_text(
    child: &mut Child,
    program: &'static str,
    text: &str,
) -> Result<ExitStatus, ClipboardError> {
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };

    if let Err(source) = written {
        let _ = child.kill();
        let _ = child.wait();
        return Err(ClipboardError::Write { program, source });
    }

    child
        .wait()
        .map_err(|source| ClipboardError::Wait { program, source })
}

/// Check if a command is available on the system
fn is_available(program: &str) -> bool {
    Command::new("which")
        .arg(program)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}

/// In-process clipboard
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    content: RefCell<String>,
}

impl MemoryClipboard {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: RefCell::new(content.into()),
        }
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        *self.content.borrow_mut() = text.to_string();
        Ok(())
    }

    fn get_text(&self) -> Result<String, ClipboardError> {
        Ok(self.content.borrow().clone())
    }
}
