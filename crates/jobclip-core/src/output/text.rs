//! Plain UTF-8 text output.

use std::fs::File;
use std::io::Write;

use crate::error::DocumentError;
use crate::models::submission::OutputFormat;

use super::DocumentWriter;

/// Writes the body verbatim.
pub struct TextWriter;

impl DocumentWriter for TextWriter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Txt
    }

    fn write_body(&self, body: &str, out: &mut File) -> Result<(), DocumentError> {
        out.write_all(body.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
