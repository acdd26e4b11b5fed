//! Job posting field extraction module.

mod parser;
pub mod rules;

pub use parser::{Extraction, HeuristicParser, PostingParser};
pub use rules::FieldMatch;

use crate::error::ExtractionError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for job posting field extractors.
pub trait PostingExtractor {
    /// Extract the title and company guesses from raw clipboard text.
    fn extract_from_text(&self, text: &str) -> Result<Extraction>;
}
