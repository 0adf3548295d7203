// crates/flightprint-core/src/text.rs

/// Fold a string for case-insensitive comparison.
///
/// Plain Unicode lowercasing; no transliteration, so `"Zürich"` and
/// `"zurich"` stay distinct.
pub fn fold_key(s: &str) -> String {
    s.to_lowercase()
}

/// Is byte offset `at` the start of a word in `haystack`?
///
/// A word starts at the beginning of the string or right after any
/// character that is not a word character. Word characters are the
/// alphanumerics plus `_`, as in a regex `\b`.
pub fn is_word_start(haystack: &str, at: usize) -> bool {
    haystack[..at]
        .chars()
        .next_back()
        .map_or(true, |c| !is_word_char(c))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Character index of byte offset `at`.
///
/// ```rust
/// use flightprint_core::text::char_index;
///
/// assert_eq!(char_index("zürich airport", 8), 7);
/// ```
pub fn char_index(haystack: &str, at: usize) -> usize {
    haystack[..at].chars().count()
}

/// Byte offset of the first occurrence of `needle` that begins a word.
///
/// Both arguments are expected to be folded already. Overlapping
/// candidates are considered, so `"b b"` is found at 4 in `"xab b b"` even
/// though the first raw occurrence (at 2) is mid-word.
///
/// ```rust
/// use flightprint_core::text::word_prefix_position;
///
/// assert_eq!(word_prefix_position("london heathrow", "heath"), Some(7));
/// assert_eq!(word_prefix_position("london heathrow", "eath"), None);
/// assert_eq!(word_prefix_position("st. louis lambert", "louis"), Some(4));
/// ```
pub fn word_prefix_position(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    haystack
        .char_indices()
        .map(|(i, _)| i)
        .find(|&i| haystack[i..].starts_with(needle) && is_word_start(haystack, i))
}
