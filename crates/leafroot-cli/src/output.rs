//! Output formatting utilities.

use leafroot_canonical::KeywordMatch;
use serde::Serialize;

/// Pretty JSON, falling back to `{}`.
pub fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Formats a keyword match as a table row.
pub fn format_match_row(record: &KeywordMatch, fingerprint: &str) -> String {
    format!(
        "{:<16} {:<18} {}",
        truncate(&record.keyword, 16),
        truncate(fingerprint, 18),
        record.full_tag()
    )
}

/// Prints the keyword match table header.
#[allow(clippy::print_literal)]
pub fn print_match_header() {
    println!("{:<16} {:<18} {}", "KEYWORD", "FINGERPRINT", "FULL_TAG");
    println!("{}", "-".repeat(80));
}

pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
