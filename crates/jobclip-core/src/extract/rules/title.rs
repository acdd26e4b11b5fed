//! Job title detection.

use super::patterns::{BOOST_KEYWORD, LOCATION};
use super::tables::MINOR_WORDS;
use super::{is_candidate_line, word_count, FieldExtractor, FieldMatch};

/// Confidence for a line containing a boost keyword.
pub const KEYWORD_CONFIDENCE: f32 = 0.9;
/// Confidence for a plain line written in title case.
pub const TITLE_CASE_CONFIDENCE: f32 = 0.5;
/// Confidence for any other short line.
pub const PLAIN_CONFIDENCE: f32 = 0.3;

/// Job title extractor.
pub struct TitleExtractor {
    max_words: usize,
    max_chars: usize,
}

impl TitleExtractor {
    /// Create a new title extractor.
    pub fn new() -> Self {
        Self {
            max_words: 10,
            max_chars: 80,
        }
    }

    /// Confidence that `line` is a job title, or `None` when it cannot be one.
    pub(crate) fn score(&self, line: &str) -> Option<f32> {
        if !is_candidate_line(line)
            || line.chars().count() > self.max_chars
            || word_count(line) > self.max_words
        {
            return None;
        }

        if BOOST_KEYWORD.is_match(line) {
            Some(KEYWORD_CONFIDENCE)
        } else if word_count(line) >= 2 && is_title_case(line) && !LOCATION.is_match(line) {
            Some(TITLE_CASE_CONFIDENCE)
        } else {
            Some(PLAIN_CONFIDENCE)
        }
    }
}

impl Default for TitleExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for TitleExtractor {
    fn extract_all(&self, lines: &[&str]) -> Vec<FieldMatch> {
        lines
            .iter()
            .enumerate()
            .filter_map(|(i, line)| {
                self.score(line)
                    .map(|confidence| FieldMatch::new(*line, confidence, *line).with_line(i))
            })
            .collect()
    }
}

/// Every significant word starts with an uppercase letter.
fn is_title_case(line: &str) -> bool {
    let mut significant = line
        .split_whitespace()
        .filter(|w| !MINOR_WORDS.contains(&w.to_lowercase().as_str()))
        .filter_map(|w| w.chars().next())
        .filter(|c| c.is_alphabetic())
        .peekable();

    significant.peek().is_some() && significant.all(char::is_uppercase)
}
