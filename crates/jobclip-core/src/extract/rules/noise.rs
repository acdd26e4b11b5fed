//! Noise and section-header detection.

use super::patterns::{APPLICANT_COUNT, EMAIL, TIME_AGO, URL};
use super::tables::{NOISE_PHRASES, SECTION_HEADERS};

/// True when the line is UI chrome or posting metadata.
///
/// Matches any [`NOISE_PHRASES`] entry as a case-insensitive substring, plus
/// relative timestamps, applicant counts, URLs and email addresses.
pub fn is_noise(line: &str) -> bool {
    let lower = line.to_lowercase();
    NOISE_PHRASES.iter().any(|phrase| lower.contains(phrase))
        || TIME_AGO.is_match(line)
        || APPLICANT_COUNT.is_match(line)
        || URL.is_match(line)
        || EMAIL.is_match(line)
}

/// True when the line is a common section heading such as "About the job".
pub fn is_section_header(line: &str) -> bool {
    let normalized = line
        .trim()
        .trim_end_matches(':')
        .trim()
        .replace('\u{2019}', "'")
        .to_lowercase();
    SECTION_HEADERS.contains(&normalized.as_str())
}

/// Longest line, in words, that can still be UI chrome.
pub const MAX_CHROME_WORDS: usize = 8;

/// True when the line is short page chrome that can be dropped from the body.
///
/// Narrower than [`is_noise`]: URLs and email addresses are kept, and so is
/// longer prose that merely mentions a noise phrase.
pub fn is_chrome(line: &str) -> bool {
    if line.split_whitespace().count() > MAX_CHROME_WORDS {
        return false;
    }
    let lower = line.to_lowercase();
    NOISE_PHRASES.iter().any(|phrase| lower.contains(phrase))
        || TIME_AGO.is_match(line)
        || APPLICANT_COUNT.is_match(line)
}

/// Remove chrome lines from `text`, keeping every other line and its line ending.
pub fn strip_noise_lines(text: &str) -> String {
    text.split_inclusive('\n')
        .filter(|line| !is_chrome(line.trim()))
        .collect()
}
