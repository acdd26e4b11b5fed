//! Data models and configuration.

pub mod config;
pub mod submission;

pub use config::Config;
pub use submission::{ExtractedFields, OutputFormat, OutputRecord, RawSubmission, UNKNOWN};
