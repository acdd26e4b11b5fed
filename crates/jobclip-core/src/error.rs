//! Error types for the jobclip-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the jobclip library.
#[derive(Error, Debug)]
pub enum JobclipError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Field extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Output file error.
    #[error("write error: {0}")]
    Write(#[from] WriteError),

    /// Terminal I/O error while prompting.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while building the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `SAVE_FOLDER` is unset or blank.
    #[error("SAVE_FOLDER is not set; add it to your .env file")]
    MissingSaveFolder,

    /// `SAVE_FOLDER` does not point at an existing directory.
    #[error("SAVE_FOLDER {} is not an existing directory", .0.display())]
    InvalidSaveFolder(PathBuf),

    /// `DEFAULT_FORMAT` holds something other than txt/docx.
    #[error("DEFAULT_FORMAT must be 'txt' or 'docx', got '{0}'")]
    InvalidFormat(String),

    /// A boolean setting could not be parsed.
    #[error("{key} must be true or false, got '{value}'")]
    InvalidFlag { key: String, value: String },
}

/// Errors related to job posting field extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// No text to process.
    #[error("clipboard is empty; copy the job description first")]
    EmptyInput,
}

/// Errors related to writing the output file.
#[derive(Error, Debug)]
pub enum WriteError {
    /// Destination folder is gone or not a directory.
    #[error("destination folder {} does not exist", .0.display())]
    FolderMissing(PathBuf),

    /// Every disambiguated name is already taken.
    #[error("could not find a free file name for {}", .0.display())]
    Collision(PathBuf),

    /// I/O failure while writing.
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document serialization failed.
    #[error("failed to serialize {}: {reason}", .path.display())]
    Serialize { path: PathBuf, reason: String },
}

impl WriteError {
    /// The path the failed write targeted.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::FolderMissing(path) | Self::Collision(path) => path,
            Self::Io { path, .. } | Self::Serialize { path, .. } => path,
        }
    }
}

/// Errors raised by a document serializer.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// I/O failure while writing the document.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The document encoder failed.
    #[error("{0}")]
    Encode(String),
}

/// Result type for the jobclip library.
pub type Result<T> = std::result::Result<T, JobclipError>;
