//! Rule-based field extractors for job postings.
//!
//! Every rule works on the scan window: the first non-empty, trimmed lines
//! of the posting.

pub mod company;
pub mod labels;
pub mod noise;
pub mod patterns;
pub mod tables;
pub mod title;

pub use company::CompanyExtractor;
pub use labels::LabeledExtractor;
pub use noise::{is_noise, is_section_header, strip_noise_lines};
pub use title::TitleExtractor;

use patterns::LABEL_LINE;
use tables::LEGAL_SUFFIXES;

/// Trait for line-based field extractors.
pub trait FieldExtractor {
    /// Every candidate found in `lines`, in line order.
    fn extract_all(&self, lines: &[&str]) -> Vec<FieldMatch>;

    /// The best candidate: highest confidence, earliest line on ties.
    fn extract(&self, lines: &[&str]) -> Option<FieldMatch> {
        best_match(self.extract_all(lines))
    }
}

/// A detected field value with its confidence score.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMatch {
    /// Extracted value.
    pub value: String,
    /// Confidence score (0.0 - 1.0).
    pub confidence: f32,
    /// Index of the source line within the scan window.
    pub line: usize,
    /// Source line that was matched.
    pub source: String,
}

impl FieldMatch {
    pub fn new(value: impl Into<String>, confidence: f32, source: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            confidence,
            line: 0,
            source: source.into(),
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }
}

/// Pick the highest-confidence match, preferring the earliest line on ties.
pub fn best_match(matches: Vec<FieldMatch>) -> Option<FieldMatch> {
    let mut best: Option<FieldMatch> = None;
    for candidate in matches {
        let better = match &best {
            None => true,
            Some(current) => {
                candidate.confidence > current.confidence
                    || (candidate.confidence == current.confidence && candidate.line < current.line)
            }
        };
        if better {
            best = Some(candidate);
        }
    }
    best
}

/// Shape checks shared by the title and company rules.
///
/// A candidate has letters, is not noise, is not a section header or a
/// `Key: value` line, and does not read like a sentence.
pub(crate) fn is_candidate_line(line: &str) -> bool {
    line.chars().any(char::is_alphabetic)
        && !reads_like_sentence(line)
        && !is_noise(line)
        && !is_section_header(line)
        && !LABEL_LINE.is_match(line)
}

/// Ends in sentence punctuation, unless the final period closes a legal
/// suffix such as "Inc." or "Ltd.".
fn reads_like_sentence(line: &str) -> bool {
    if line.ends_with(['!', '?']) {
        return true;
    }
    let Some(stem) = line.strip_suffix('.') else {
        return false;
    };
    let last_word = stem
        .rsplit([' ', ','])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    !LEGAL_SUFFIXES.contains(&last_word.as_str())
}

pub(crate) fn word_count(line: &str) -> usize {
    line.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_match_prefers_confidence_then_earliest() {
        let matches = vec![
            FieldMatch::new("a", 0.5, "a").with_line(0),
            FieldMatch::new("b", 0.9, "b").with_line(3),
            FieldMatch::new("c", 0.9, "c").with_line(1),
        ];
        assert_eq!(best_match(matches).unwrap().value, "c");
        assert!(best_match(Vec::new()).is_none());
    }

    #[test]
    fn test_candidate_line_shape() {
        assert!(is_candidate_line("Acme Corp"));
        assert!(!is_candidate_line("..."));
        assert!(!is_candidate_line("We are hiring."));
        assert!(!is_candidate_line("Employment type: Full-time"));
        assert!(!is_candidate_line("About the job"));
    }

    #[test]
    fn test_legal_suffix_is_not_a_sentence() {
        assert!(is_candidate_line("Acme, Inc."));
        assert!(is_candidate_line("Globex Corp."));
        assert!(is_candidate_line("Initech Ltd."));
        assert!(is_candidate_line("Umbrella S.A."));
        assert!(!is_candidate_line("We build things."));
        assert!(!is_candidate_line("Join us!"));
    }
}
