//! Where the posting text comes from.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;

/// A source of raw posting text.
pub trait TextSource {
    /// Read the whole text. An empty string means nothing was available.
    fn read_text(&self) -> anyhow::Result<String>;

    /// Short description for log lines.
    fn describe(&self) -> String;
}

/// The system clipboard, through arboard.
pub struct SystemClipboard;

impl TextSource for SystemClipboard {
    fn read_text(&self) -> anyhow::Result<String> {
        // arboard requires a new Clipboard instance for each operation
        let mut clipboard = arboard::Clipboard::new().context("Failed to access clipboard")?;
        match clipboard.get_text() {
            Ok(text) => Ok(text),
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(e) => Err(e).context("Failed to read text from clipboard"),
        }
    }

    fn describe(&self) -> String {
        "clipboard".to_string()
    }
}

/// A UTF-8 text file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TextSource for FileSource {
    fn read_text(&self) -> anyhow::Result<String> {
        fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
