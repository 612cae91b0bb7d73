//! Small splitting helpers shared by the formatters and the demo invoker.

/// Prefix for every bullet line.
pub const BULLET: &str = "• ";

/// Marker appended when text is cut short.
pub const ELLIPSIS: char = '…';

/// Split on `.`, `!`, `?` and newlines; trimmed, non-empty fragments only.
pub fn sentence_fragments(text: &str) -> Vec<&str> {
    split_trimmed(text, |c| matches!(c, '.' | '!' | '?' | '\n'))
}

/// Split on newlines and periods; trimmed, non-empty fragments only.
pub fn bullet_fragments(text: &str) -> Vec<&str> {
    split_trimmed(text, |c| matches!(c, '.' | '\n'))
}

/// Keep at most `limit` whitespace-separated words, appending [`ELLIPSIS`]
/// when anything was dropped. Text within the limit is returned as is.
pub fn truncate_words(text: &str, limit: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= limit {
        return text.to_string();
    }
    let mut out = words[..limit].join(" ");
    out.push(ELLIPSIS);
    out
}

fn split_trimmed(text: &str, is_delimiter: impl Fn(char) -> bool) -> Vec<&str> {
    text.split(is_delimiter)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
