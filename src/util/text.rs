// src/util/text.rs

/// Shortens `text` to at most `max_chars` chars, marking the cut with `...`.
///
/// Counts chars rather than bytes so multibyte text is never split inside a
/// code point.
///
/// # Examples
///
/// ```
/// use todonotes::util::text::truncate_chars;
///
/// assert_eq!(truncate_chars("Buy milk", 20), "Buy milk");
/// assert_eq!(truncate_chars("Buy milk and bread", 10), "Buy mil...");
/// ```
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return ".".repeat(max_chars);
    }
    let kept: String = text.chars().take(max_chars - 3).collect();
    format!("{kept}...")
}
