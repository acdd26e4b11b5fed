//! Data flowing through the pipeline: raw clipboard text, extracted fields
//! and the finalized output record.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;

/// Placeholder used when a field is left blank at confirmation time.
pub const UNKNOWN: &str = "Unknown";

/// Timestamp layout used in output file names.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M";

/// Clipboard text as it was captured. Immutable input to extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSubmission {
    text: String,
}

impl RawSubmission {
    /// Wrap raw text, rejecting empty or whitespace-only input.
    pub fn new(text: impl Into<String>) -> Result<Self, ExtractionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ExtractionError::EmptyInput);
        }
        Ok(Self { text })
    }

    /// The original text, untouched.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Non-empty lines, trimmed, in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines().map(str::trim).filter(|l| !l.is_empty())
    }
}

/// Best-guess job title and company. Either may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub title: Option<String>,
    pub company: Option<String>,
}

impl ExtractedFields {
    pub fn new(title: Option<String>, company: Option<String>) -> Self {
        Self { title, company }
    }
}

/// Output file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain UTF-8 text.
    #[default]
    Txt,
    /// Word-processor document.
    Docx,
}

impl OutputFormat {
    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Docx => "docx",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().trim_start_matches('.').to_ascii_lowercase();
        match normalized.as_str() {
            "txt" => Ok(Self::Txt),
            "docx" => Ok(Self::Docx),
            _ => Err(format!("unsupported output format: {}", s.trim())),
        }
    }
}

/// Everything needed to produce exactly one output file.
///
/// Built once at write time; both fields are guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    company: String,
    title: String,
    timestamp: String,
    body: String,
    format: OutputFormat,
}

impl OutputRecord {
    /// Create a record, substituting [`UNKNOWN`] for blank fields.
    pub fn new(
        company: &str,
        title: &str,
        body: impl Into<String>,
        format: OutputFormat,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            company: non_blank(company),
            title: non_blank(title),
            timestamp: created_at.format(TIMESTAMP_FORMAT).to_string(),
            body: body.into(),
            format,
        }
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

fn non_blank(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        UNKNOWN.to_string()
    } else {
        value.to_string()
    }
}
