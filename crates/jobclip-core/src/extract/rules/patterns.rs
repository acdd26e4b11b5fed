//! Common regex patterns for job posting extraction.

use lazy_static::lazy_static;
use regex::Regex;

use super::tables::BOOST_KEYWORDS;

lazy_static! {
    // Any boost keyword as a whole word, optionally plural
    pub static ref BOOST_KEYWORD: Regex = {
        let alternatives: Vec<String> = BOOST_KEYWORDS.iter().map(|k| regex::escape(k)).collect();
        Regex::new(&format!(r"(?i)\b(?:{})s?\b", alternatives.join("|"))).unwrap()
    };

    // Labeled fields
    pub static ref TITLE_LABEL: Regex = Regex::new(
        r"(?i)^(?:job\s+title|position\s+title|title|position|role)\s*:\s*(\S.*)$"
    ).unwrap();

    pub static ref COMPANY_LABEL: Regex = Regex::new(
        r"(?i)^(?:company(?:\s+name)?|employer|hiring\s+company|organi[sz]ation)\s*:\s*(\S.*)$"
    ).unwrap();

    // "Key: value" or "Key:" lines
    pub static ref LABEL_LINE: Regex = Regex::new(
        r"^[\p{L}\p{N} /&'()-]{1,40}:(?:\s|$)"
    ).unwrap();

    // Posting metadata
    pub static ref TIME_AGO: Regex = Regex::new(
        r"(?i)\b\d+\s+(?:second|minute|hour|day|week|month|year)s?\s+ago\b"
    ).unwrap();

    pub static ref APPLICANT_COUNT: Regex = Regex::new(
        r"(?i)\b\d[\d,]*\+?\s+(?:applicants?|applications?|clicks?)\b"
    ).unwrap();

    pub static ref URL: Regex = Regex::new(
        r"(?i)\b(?:https?://|www\.)\S+"
    ).unwrap();

    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();

    // Location lines ("Austin, TX", "Remote", "(Hybrid)")
    pub static ref LOCATION: Regex = Regex::new(
        r"(?i)^(?:remote|hybrid|on-?site)\b|\((?:remote|hybrid|on-?site)\)|,\s*(?-i:[A-Z]{2})\b"
    ).unwrap();

    // Trailing " · New York, NY" style suffix on company lines
    pub static ref LOCATION_SUFFIX: Regex = Regex::new(
        r"\s+[·•|]\s+.*$"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boost_keyword_whole_words() {
        assert!(BOOST_KEYWORD.is_match("Senior Software Engineer"));
        assert!(BOOST_KEYWORD.is_match("DATA ANALYSTS"));
        assert!(!BOOST_KEYWORD.is_match("Acme Engineering"));
        assert!(!BOOST_KEYWORD.is_match("Leadership principles"));
    }

    #[test]
    fn test_labels() {
        let caps = TITLE_LABEL.captures("Job Title: Platform Engineer").unwrap();
        assert_eq!(&caps[1], "Platform Engineer");
        let caps = COMPANY_LABEL.captures("company name:  Initech").unwrap();
        assert_eq!(&caps[1], "Initech");
        assert!(LABEL_LINE.is_match("Seniority level: Mid"));
        assert!(LABEL_LINE.is_match("Requirements:"));
        assert!(!LABEL_LINE.is_match("Senior Software Engineer"));
    }

    #[test]
    fn test_location() {
        assert!(LOCATION.is_match("Austin, TX"));
        assert!(LOCATION.is_match("Remote"));
        assert!(LOCATION.is_match("Berlin (Hybrid)"));
        assert!(!LOCATION.is_match("Acme, LLC"));
        assert!(!LOCATION.is_match("Acme Corp"));
    }
}
