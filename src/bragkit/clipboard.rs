use crate::error::{BragError, Result};
use crate::model::BragEntry;
use std::cell::RefCell;
use std::io::Write;
use std::process::{Command, Stdio};

/// Destination for "copy to clipboard" actions.
pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<()>;
}

/// The OS clipboard, driven through the platform's copy utility.
/// - macOS: pbcopy
/// - Linux: xclip, falling back to xsel
/// - Windows: clip.exe
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        #[cfg(target_os = "macos")]
        {
            pipe_into(Command::new("pbcopy"), "pbcopy", text)
        }

        #[cfg(target_os = "linux")]
        {
            let mut xclip = Command::new("xclip");
            xclip.args(["-selection", "clipboard"]);
            match pipe_into(xclip, "xclip", text) {
                Err(BragError::Clipboard(first)) if first.starts_with("Failed to spawn") => {
                    let mut xsel = Command::new("xsel");
                    xsel.args(["--clipboard", "--input"]);
                    pipe_into(xsel, "xsel", text).map_err(|_| {
                        BragError::Clipboard(format!("{}. Install xclip or xsel.", first))
                    })
                }
                other => other,
            }
        }

        #[cfg(target_os = "windows")]
        {
            pipe_into(Command::new("clip"), "clip", text)
        }

        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            let _ = text;
            Err(BragError::Clipboard(
                "Clipboard not supported on this platform".to_string(),
            ))
        }
    }
}

#[allow(dead_code)]
fn pipe_into(mut command: Command, name: &str, text: &str) -> Result<()> {
    let mut child = command
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| BragError::Clipboard(format!("Failed to spawn {}: {}", name, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| BragError::Clipboard(format!("Failed to write to {}: {}", name, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| BragError::Clipboard(format!("Failed to wait for {}: {}", name, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(BragError::Clipboard(format!("{} exited with error", name)))
    }
}

/// Keeps the last copied text. Used by tests and headless hosts.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: RefCell<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        *self.contents.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}

/// "Copy as JSON" payload for a single entry (2-space indented).
pub fn format_entry_json(entry: &BragEntry) -> Result<String> {
    Ok(serde_json::to_string_pretty(entry)?)
}
