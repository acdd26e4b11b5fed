//! Word-processor (.docx) output.

use std::fs::File;

use docx_rs::{Docx, Paragraph, Run};

use crate::error::DocumentError;
use crate::models::submission::OutputFormat;

use super::DocumentWriter;

/// Writes a single-section document with one paragraph per body line.
pub struct DocxWriter;

impl DocxWriter {
    /// Build the document in memory.
    pub fn build(body: &str) -> Docx {
        body.lines().fold(Docx::new(), |doc, line| {
            doc.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)))
        })
    }
}

impl DocumentWriter for DocxWriter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Docx
    }

    fn write_body(&self, body: &str, out: &mut File) -> Result<(), DocumentError> {
        Self::build(body)
            .build()
            .pack(out)
            .map_err(|e| DocumentError::Encode(e.to_string()))
    }
}
