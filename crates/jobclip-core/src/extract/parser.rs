//! Heuristic job posting parser combining the line rules.

use tracing::{debug, info};

use crate::models::submission::{ExtractedFields, RawSubmission};

use super::rules::{
    best_match, strip_noise_lines, CompanyExtractor, FieldExtractor, FieldMatch,
    LabeledExtractor, TitleExtractor,
};
use super::{PostingExtractor, Result};

/// Number of leading non-empty lines scanned for candidates.
pub const SCAN_WINDOW: usize = 10;

/// Minimum confidence for accepting a field.
pub const MIN_CONFIDENCE: f32 = 0.5;

/// Result of field extraction.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Best-guess fields, blank when nothing confident was found.
    pub fields: ExtractedFields,
    /// Match behind the title guess.
    pub title_match: Option<FieldMatch>,
    /// Match behind the company guess.
    pub company_match: Option<FieldMatch>,
    /// Original text, untouched.
    pub body: String,
    /// Extraction warnings.
    pub warnings: Vec<String>,
}

impl Extraction {
    /// The body with noise lines removed.
    pub fn cleaned_body(&self) -> String {
        strip_noise_lines(&self.body)
    }
}

/// Trait for job posting parsing.
pub trait PostingParser {
    /// Parse a posting that is already known to be non-empty.
    fn parse(&self, submission: &RawSubmission) -> Extraction;
}

/// Line-based heuristic parser.
pub struct HeuristicParser {
    /// Number of leading lines to scan.
    scan_window: usize,
    /// Minimum confidence for accepting fields.
    min_confidence: f32,
}

impl HeuristicParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self {
            scan_window: SCAN_WINDOW,
            min_confidence: MIN_CONFIDENCE,
        }
    }

    /// Set the number of leading lines to scan.
    pub fn with_scan_window(mut self, lines: usize) -> Self {
        self.scan_window = lines;
        self
    }

    /// Set minimum confidence threshold.
    pub fn with_min_confidence(mut self, confidence: f32) -> Self {
        self.min_confidence = confidence;
        self
    }

    fn accept(&self, candidate: Option<FieldMatch>) -> Option<FieldMatch> {
        candidate.filter(|m| m.confidence >= self.min_confidence)
    }
}

impl Default for HeuristicParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PostingParser for HeuristicParser {
    fn parse(&self, submission: &RawSubmission) -> Extraction {
        let mut warnings = Vec::new();
        let window: Vec<&str> = submission.lines().take(self.scan_window).collect();

        info!("Scanning {} of the posting's lines for fields", window.len());

        // A labeled title only outranks a keyword line when it carries a keyword itself
        let title_match = self.accept(best_match(
            [
                LabeledExtractor::title().extract(&window),
                TitleExtractor::new().extract(&window),
            ]
            .into_iter()
            .flatten()
            .collect(),
        ));

        // Labels beat positional guesses
        let company_match = self
            .accept(LabeledExtractor::company().extract(&window).or_else(|| {
                CompanyExtractor::new()
                    .anchored_at(title_match.as_ref().map(|m| m.line))
                    .extract(&window)
            }))
            .filter(|company| {
                title_match
                    .as_ref()
                    .is_none_or(|title| !title.value.eq_ignore_ascii_case(&company.value))
            });

        if title_match.is_none() {
            warnings.push("Could not find a job title".to_string());
        }
        if company_match.is_none() {
            warnings.push("Could not find a company name".to_string());
        }

        debug!(
            "Extracted title {:?} and company {:?}",
            title_match.as_ref().map(|m| (&m.value, m.confidence)),
            company_match.as_ref().map(|m| (&m.value, m.confidence)),
        );

        Extraction {
            fields: ExtractedFields::new(
                title_match.as_ref().map(|m| m.value.clone()),
                company_match.as_ref().map(|m| m.value.clone()),
            ),
            title_match,
            company_match,
            body: submission.text().to_string(),
            warnings,
        }
    }
}

impl PostingExtractor for HeuristicParser {
    fn extract_from_text(&self, text: &str) -> Result<Extraction> {
        let submission = RawSubmission::new(text)?;
        Ok(self.parse(&submission))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractionError;
    use pretty_assertions::assert_eq;

    fn extract(text: &str) -> Extraction {
        HeuristicParser::new().extract_from_text(text).unwrap()
    }

    #[test]
    fn test_parse_about_the_job_posting() {
        let text = "About the job\nSenior Software Engineer\nAcme Corp\nSeniority level: Mid\n...";
        let result = extract(text);

        assert_eq!(result.fields.title.as_deref(), Some("Senior Software Engineer"));
        assert_eq!(result.fields.company.as_deref(), Some("Acme Corp"));
        assert_eq!(result.body, text);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_parse_linkedin_style_posting() {
        let text = r#"
            Acme Corp logo
            Acme Corp
            Share
            Show more options
            Staff Data Engineer
            Acme Corp · Austin, TX (Hybrid)
            Reposted 2 weeks ago · Over 100 applicants
            Full-time
            Easy Apply
            Save job

            About the job
            We build things.
        "#;
        let result = extract(text);

        assert_eq!(result.fields.title.as_deref(), Some("Staff Data Engineer"));
        assert_eq!(result.fields.company.as_deref(), Some("Acme Corp"));
        assert_eq!(result.company_match.unwrap().line, 5);
    }

    #[test]
    fn test_labeled_fields_win() {
        let text = "Senior Software Engineer\nGlobex\nJob Title: Platform Engineer\nCompany: Initech\n";
        let result = extract(text);

        assert_eq!(result.fields.title.as_deref(), Some("Platform Engineer"));
        assert_eq!(result.fields.company.as_deref(), Some("Initech"));
    }

    #[test]
    fn test_keyword_line_beats_labeled_metadata() {
        let result = extract("Senior Software Engineer\nAcme Corp\nPosition: Full-time\nWe build things.");
        assert_eq!(result.fields.title.as_deref(), Some("Senior Software Engineer"));
        assert_eq!(result.fields.company.as_deref(), Some("Acme Corp"));

        let result = extract("Role: Barista Lead Trainer\nData Analyst\nAcme Corp\nTitle: Coffee Expert");
        assert_eq!(result.fields.title.as_deref(), Some("Barista Lead Trainer"));

        let result = extract("Title: Coffee Expert\nData Analyst\nAcme Corp");
        assert_eq!(result.fields.title.as_deref(), Some("Data Analyst"));
        assert_eq!(result.fields.company.as_deref(), Some("Acme Corp"));
    }

    #[test]
    fn test_labeled_title_without_keyword_line() {
        let result = extract("Position: Barista\nBean There Coffee\nWe pour coffee.");
        assert_eq!(result.fields.title.as_deref(), Some("Barista"));
        assert_eq!(result.fields.company.as_deref(), Some("Bean There Coffee"));
    }

    #[test]
    fn test_company_with_legal_suffix() {
        let result = extract("Senior Software Engineer\nAcme, Inc.\nWe build things.");
        assert_eq!(result.fields.company.as_deref(), Some("Acme, Inc."));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_min_confidence_threshold() {
        let text = "join our team\nBarista Team Member\n";
        assert_eq!(extract(text).fields.title.as_deref(), Some("Barista Team Member"));

        let strict = HeuristicParser::new()
            .with_min_confidence(0.6)
            .extract_from_text(text)
            .unwrap();
        assert!(strict.fields.title.is_none());
        assert_eq!(strict.warnings.len(), 2);
    }

    #[test]
    fn test_noise_lines_never_selected() {
        let text = "Company logo\nSeniority level: Director\nEmployment type\nView profile\nSee who you know";
        let result = extract(text);

        assert_eq!(result.fields, ExtractedFields::default());
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn test_low_confidence_leaves_fields_blank() {
        let result = extract("we are hiring\nlots of fun\n");
        assert!(result.fields.title.is_none());
        assert!(result.fields.company.is_none());
    }

    #[test]
    fn test_keyword_outside_window_is_ignored() {
        let mut text = String::new();
        for i in 0..SCAN_WINDOW {
            text.push_str(&format!("line number {i}\n"));
        }
        text.push_str("Security Engineer\n");

        assert!(extract(&text).fields.title.is_none());

        let wide = HeuristicParser::new()
            .with_scan_window(SCAN_WINDOW + 1)
            .extract_from_text(&text)
            .unwrap();
        assert_eq!(wide.fields.title.as_deref(), Some("Security Engineer"));
    }

    #[test]
    fn test_empty_text_is_an_error() {
        let err = HeuristicParser::new().extract_from_text(" \n ").unwrap_err();
        assert!(matches!(err, ExtractionError::EmptyInput));
    }

    #[test]
    fn test_cleaned_body_drops_noise_only() {
        let result = extract("Senior Software Engineer\nAcme Corp\nSeniority level: Mid\nWe build things.\n");
        assert_eq!(
            result.cleaned_body(),
            "Senior Software Engineer\nAcme Corp\nWe build things.\n"
        );
    }
}
