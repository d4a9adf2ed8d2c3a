//! Opening lead deep links outside the terminal.

use anyhow::{Context, Result};
use std::cell::RefCell;
use std::process::{Command, Stdio};
use std::rc::Rc;

/// Hands a URL to the platform and the clipboard.
pub trait LinkOpener {
    /// Opens `url` with the platform handler.
    fn open(&self, url: &str) -> Result<()>;

    /// Copies `text` to the system clipboard.
    fn copy(&self, text: &str) -> Result<()>;
}

/// Uses `xdg-open`, `open` or `start` and the system clipboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLinkOpener;

impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str) -> Result<()> {
        let mut command = platform_open_command(url);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .context(format!("Failed to launch URL handler for {url}"))?;
        Ok(())
    }

    fn copy(&self, text: &str) -> Result<()> {
        arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(text.to_string()))
            .context("Failed to copy to clipboard")
    }
}

#[cfg(target_os = "macos")]
fn platform_open_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(target_os = "windows")]
fn platform_open_command(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_open_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

/// Records links instead of opening them.
#[derive(Debug, Clone, Default)]
pub struct RecordingLinkOpener {
    opened: Rc<RefCell<Vec<String>>>,
    copied: Rc<RefCell<Vec<String>>>,
}

impl RecordingLinkOpener {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs passed to [`LinkOpener::open`].
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }

    /// Texts passed to [`LinkOpener::copy`].
    pub fn copied(&self) -> Vec<String> {
        self.copied.borrow().clone()
    }
}

impl LinkOpener for RecordingLinkOpener {
    fn open(&self, url: &str) -> Result<()> {
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }

    fn copy(&self, text: &str) -> Result<()> {
        self.copied.borrow_mut().push(text.to_string());
        Ok(())
    }
}
