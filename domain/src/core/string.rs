//! String utilities for the domain layer.
//!
//! Every offset and length here counts characters (Unicode scalar values),
//! never bytes, so windows never split a multi-byte character.

/// Number of characters in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte index of the `char_idx`-th character, or `s.len()` past the end.
fn byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(byte, _)| byte)
        .unwrap_or(s.len())
}

/// Slice `s` by character offsets `[start, end)`.
///
/// Both bounds are clamped to the string length and an inverted range yields
/// an empty slice.
pub fn slice_chars(s: &str, start: usize, end: usize) -> &str {
    if end <= start {
        return "";
    }
    let from = byte_index(s, start);
    let to = byte_index(s, end);
    &s[from..to]
}

/// Keep at most the first `max_chars` characters of `s`.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    &s[..byte_index(s, max_chars)]
}

/// Character offset of the byte index `byte` (which must be a char boundary).
pub fn char_offset(s: &str, byte: usize) -> usize {
    char_len(&s[..byte])
}

/// Replace every newline with a single space.
pub fn flatten_newlines(s: &str) -> String {
    s.replace('\n', " ")
}
