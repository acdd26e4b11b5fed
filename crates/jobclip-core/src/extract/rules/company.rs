//! Company name detection next to the title line.

use super::patterns::{BOOST_KEYWORD, LOCATION, LOCATION_SUFFIX};
use super::{is_candidate_line, word_count, FieldExtractor, FieldMatch};

/// Confidence for the line right after the title.
pub const AFTER_TITLE_CONFIDENCE: f32 = 0.8;
/// Confidence for the line right before the title.
pub const BEFORE_TITLE_CONFIDENCE: f32 = 0.6;

/// Company name extractor anchored on the title line.
pub struct CompanyExtractor {
    anchor: Option<usize>,
    max_words: usize,
    max_chars: usize,
}

impl CompanyExtractor {
    /// Create a company extractor with no anchor. It finds nothing until anchored.
    pub fn new() -> Self {
        Self {
            anchor: None,
            max_words: 6,
            max_chars: 60,
        }
    }

    /// Look for the company around the given title line.
    pub fn anchored_at(mut self, title_line: Option<usize>) -> Self {
        self.anchor = title_line;
        self
    }

    /// Organisation name carried by `line`, if it looks like one.
    pub fn organization_name(&self, line: &str) -> Option<String> {
        if !is_candidate_line(line) || BOOST_KEYWORD.is_match(line) {
            return None;
        }

        let name = clean_company(line);
        if name.is_empty()
            || !name.chars().any(char::is_alphabetic)
            || LOCATION.is_match(&name)
            || name.chars().count() > self.max_chars
            || word_count(&name) > self.max_words
        {
            return None;
        }

        Some(name)
    }
}

impl Default for CompanyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for CompanyExtractor {
    fn extract_all(&self, lines: &[&str]) -> Vec<FieldMatch> {
        let Some(anchor) = self.anchor else {
            return Vec::new();
        };

        let neighbours = [
            (anchor.checked_add(1), AFTER_TITLE_CONFIDENCE),
            (anchor.checked_sub(1), BEFORE_TITLE_CONFIDENCE),
        ];

        let mut matches: Vec<FieldMatch> = neighbours
            .into_iter()
            .filter_map(|(index, confidence)| {
                let index = index?;
                let line = lines.get(index)?;
                self.organization_name(line)
                    .map(|name| FieldMatch::new(name, confidence, *line).with_line(index))
            })
            .collect();

        matches.sort_by_key(|m| m.line);
        matches
    }
}

/// Drop a trailing " · location" suffix and surrounding whitespace.
pub fn clean_company(line: &str) -> String {
    LOCATION_SUFFIX.replace(line.trim(), "").trim().to_string()
}
