//! Output file writing.
//!
//! The body is serialized into a temporary file inside the destination
//! folder and then persisted under its final name without clobbering, so a
//! failed write never leaves a partial file and an existing file is never
//! replaced.

mod docx;
pub mod filename;
mod text;

pub use docx::DocxWriter;
pub use filename::{component_or_unknown, file_name, sanitize_component};
pub use text::TextWriter;

use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{DocumentError, WriteError};
use crate::models::submission::{OutputFormat, OutputRecord};

/// Highest ` (n)` suffix tried before giving up.
pub const MAX_ATTEMPTS: u32 = 999;

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, WriteError>;

/// Trait for document serializers.
pub trait DocumentWriter {
    /// Format this writer produces.
    fn format(&self) -> OutputFormat;

    /// Serialize `body` into `out`.
    fn write_body(&self, body: &str, out: &mut File) -> std::result::Result<(), DocumentError>;
}

/// Writer for the given format.
pub fn writer_for(format: OutputFormat) -> Box<dyn DocumentWriter> {
    match format {
        OutputFormat::Txt => Box::new(TextWriter),
        OutputFormat::Docx => Box::new(DocxWriter),
    }
}

/// Write `record` into `folder` and return the path of the new file.
pub fn save(folder: &Path, record: &OutputRecord) -> Result<PathBuf> {
    if !folder.is_dir() {
        return Err(WriteError::FolderMissing(folder.to_path_buf()));
    }

    let first_path = folder.join(file_name(record, 1));
    let writer = writer_for(record.format());

    let mut staged = tempfile::Builder::new()
        .prefix(".jobclip-")
        .suffix(".part")
        .tempfile_in(folder)
        .map_err(|source| WriteError::Io {
            path: first_path.clone(),
            source,
        })?;

    writer
        .write_body(record.body(), staged.as_file_mut())
        .map_err(|e| match e {
            DocumentError::Io(source) => WriteError::Io {
                path: first_path.clone(),
                source,
            },
            DocumentError::Encode(reason) => WriteError::Serialize {
                path: first_path.clone(),
                reason,
            },
        })?;

    staged
        .as_file_mut()
        .sync_all()
        .map_err(|source| WriteError::Io {
            path: first_path.clone(),
            source,
        })?;

    for attempt in 1..=MAX_ATTEMPTS {
        let path = folder.join(file_name(record, attempt));
        match staged.persist_noclobber(&path) {
            Ok(_) => {
                info!("Saved {} bytes to {}", record.body().len(), path.display());
                return Ok(path);
            }
            Err(e) if e.error.kind() == ErrorKind::AlreadyExists => {
                debug!("{} already exists, trying the next name", path.display());
                staged = e.file;
            }
            Err(e) => {
                return Err(WriteError::Io {
                    path,
                    source: e.error,
                });
            }
        }
    }

    Err(WriteError::Collision(first_path))
}
