//! Explicitly labeled fields ("Job Title: ...", "Company: ...").

use regex::Regex;

use super::company::clean_company;
use super::patterns::{BOOST_KEYWORD, COMPANY_LABEL, LOCATION, TITLE_LABEL};
use super::tables::EMPLOYMENT_TYPES;
use super::title::TitleExtractor;
use super::{is_noise, FieldExtractor, FieldMatch};

/// Confidence for a value carried by an explicit label.
pub const LABELED_CONFIDENCE: f32 = 0.95;
/// Confidence for a labeled title without a boost keyword. Stays below a
/// keyword title line.
pub const LABELED_PLAIN_CONFIDENCE: f32 = 0.85;

/// Which labeled field to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabeledField {
    Title,
    Company,
}

/// Extractor for `Label: value` lines.
pub struct LabeledExtractor {
    field: LabeledField,
}

impl LabeledExtractor {
    pub fn title() -> Self {
        Self {
            field: LabeledField::Title,
        }
    }

    pub fn company() -> Self {
        Self {
            field: LabeledField::Company,
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self.field {
            LabeledField::Title => &*TITLE_LABEL,
            LabeledField::Company => &*COMPANY_LABEL,
        }
    }

    /// Confidence for a captured value, or `None` when it cannot be this field.
    fn confidence(&self, value: &str) -> Option<f32> {
        if value.is_empty() {
            return None;
        }
        match self.field {
            LabeledField::Company => Some(LABELED_CONFIDENCE),
            LabeledField::Title => {
                TitleExtractor::new().score(value)?;
                if LOCATION.is_match(value)
                    || EMPLOYMENT_TYPES.contains(&value.to_lowercase().as_str())
                {
                    None
                } else if BOOST_KEYWORD.is_match(value) {
                    Some(LABELED_CONFIDENCE)
                } else {
                    Some(LABELED_PLAIN_CONFIDENCE)
                }
            }
        }
    }
}

impl FieldExtractor for LabeledExtractor {
    fn extract_all(&self, lines: &[&str]) -> Vec<FieldMatch> {
        lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !is_noise(line))
            .filter_map(|(i, line)| {
                let caps = self.pattern().captures(line)?;
                let value = match self.field {
                    LabeledField::Title => caps[1].trim().to_string(),
                    LabeledField::Company => clean_company(&caps[1]),
                };
                let confidence = self.confidence(&value)?;
                Some(FieldMatch::new(value, confidence, *line).with_line(i))
            })
            .collect()
    }
}
