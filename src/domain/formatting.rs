/// Marker appended to text that was cut short.
pub const ELLIPSIS: &str = "...";

/// Longest title kept in short feedback.
pub const SHORT_TITLE_MAX_LEN: usize = 80;

/// Default snippet length for short feedback.
pub const DEFAULT_SNIPPET_MAX_LEN: usize = 180;

/// Shorten text for inline previews.
///
/// Surrounding whitespace is stripped. Text of at most `max_len` characters is
/// returned as is; longer text is cut to `max_len - 1` characters, backed up
/// to the last whitespace (if there is one after the first character), and
/// suffixed with [`ELLIPSIS`].
pub fn trim_text(text: Option<&str>, max_len: usize) -> String {
    let Some(text) = text else {
        return String::new();
    };
    let text = text.trim();

    if text.chars().count() <= max_len {
        return text.to_string();
    }

    let cut: String = text.chars().take(max_len.saturating_sub(1)).collect();
    let cut = match cut.char_indices().rev().find(|(_, c)| c.is_whitespace()) {
        Some((idx, _)) if idx > 0 => &cut[..idx],
        _ => cut.as_str(),
    };

    format!("{cut}{ELLIPSIS}")
}
