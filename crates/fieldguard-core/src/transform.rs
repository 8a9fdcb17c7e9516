//! Pure value transformers used by normalization contracts and diagnostics.

use chrono::NaiveDateTime;

/// Replace HTML-significant characters with their named entities.
///
/// Substitutions run in a fixed textual order: `&`, `<`, `>`, `"`, `'`.
/// Applying the function to its own output escapes the earlier entities
/// again (`&amp;` becomes `&amp;amp;`); callers that need escape-once
/// semantics must track it themselves.
pub fn escape_html(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Replace URL-unsafe characters with their percent escapes.
///
/// `%` is escaped first; otherwise the later substitutions would re-escape
/// their own output. The remaining order is `+`, `/`, `?`, `#`, `&`, `'`.
pub fn escape_url_unsafe(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    value
        .replace('%', "%25")
        .replace('+', "%2B")
        .replace('/', "%2F")
        .replace('?', "%3F")
        .replace('#', "%23")
        .replace('&', "%26")
        .replace('\'', "''")
}

/// Month/day/year calendar string for violation messages.
///
/// Never used for storage; stored dates stay `NaiveDateTime`.
pub fn format_message_date(instant: NaiveDateTime) -> String {
    instant.format("%m/%d/%Y").to_string()
}
