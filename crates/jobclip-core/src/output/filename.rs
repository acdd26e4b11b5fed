//! Filesystem-safe output file names.

use crate::models::submission::{OutputRecord, UNKNOWN};

/// Longest company/title component kept in a file name, in characters.
pub const MAX_COMPONENT_CHARS: usize = 80;

/// Make `raw` safe to embed in a file name.
///
/// `/ \ | :` become `-`, `* ? " < >` and control characters
/// are dropped, whitespace collapses and leading/trailing dots are trimmed.
/// Returns `None` when nothing usable is left.
pub fn sanitize_component(raw: &str) -> Option<String> {
    let mut replaced = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '/' | '\\' | '|' | ':' => replaced.push('-'),
            '*' | '?' | '"' | '<' | '>' => {}
            c if c.is_control() => replaced.push(' '),
            c => replaced.push(c),
        }
    }

    let collapsed = replaced.split_whitespace().collect::<Vec<_>>().join(" ");
    let truncated: String = collapsed.chars().take(MAX_COMPONENT_CHARS).collect();
    let cleaned = truncated.trim_matches(|c: char| c == '.' || c.is_whitespace());

    if cleaned.chars().any(char::is_alphanumeric) {
        Some(cleaned.to_string())
    } else {
        None
    }
}

/// Sanitized component, or [`UNKNOWN`] when nothing usable is left.
pub fn component_or_unknown(raw: &str) -> String {
    sanitize_component(raw).unwrap_or_else(|| UNKNOWN.to_string())
}

/// File name for `record`. Attempts after the first get a ` (n)` suffix.
pub fn file_name(record: &OutputRecord, attempt: u32) -> String {
    let base = format!(
        "{} - {} - {}",
        component_or_unknown(record.company()),
        component_or_unknown(record.title()),
        record.timestamp()
    );
    let ext = record.format().extension();

    if attempt <= 1 {
        format!("{base}.{ext}")
    } else {
        format!("{base} ({attempt}).{ext}")
    }
}
