//! Input sanitization for code fields.
//!
//! Runs synchronously on every input event, before the validator
//! schedules any asynchronous work. Scanner-fed fields routinely receive
//! stray prefixes, whitespace, and over-length payloads; sanitization is
//! total over arbitrary input.

/// Strip every non-digit character from `raw` and truncate the result to
/// `max_length` characters.
///
/// Truncation counts kept digits, not raw characters, so
/// `"1-2-3-4-5-6-7-8-9-0-1-2-3-4"` with `max_length = 13` yields the
/// first thirteen digits.
pub fn sanitize(raw: &str, max_length: usize) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(max_length)
        .collect()
}
