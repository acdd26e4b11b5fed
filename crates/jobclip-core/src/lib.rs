//! Core library for saving job postings copied to the clipboard.
//!
//! This crate provides:
//! - Heuristic job title and company extraction from pasted text
//! - An interactive confirmation loop over any reader/writer pair
//! - Filesystem-safe, non-clobbering txt and docx output

pub mod error;
pub mod extract;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod prompt;

pub use error::{ConfigError, ExtractionError, JobclipError, Result, WriteError};
pub use extract::{Extraction, HeuristicParser, PostingExtractor, PostingParser};
pub use models::{Config, ExtractedFields, OutputFormat, OutputRecord, RawSubmission, UNKNOWN};
pub use pipeline::{process_submission, Outcome};
pub use prompt::{Confirmation, ConfirmedPosting, Prompter};
