//! Line classification for graph descriptions.

/// Byte offset of the first non-whitespace character, or `None` for a blank line.
pub fn first_non_whitespace(line: &str) -> Option<usize> {
    line.char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(i, _)| i)
}

/// Line contains only whitespace.
pub fn is_blank(line: &str) -> bool {
    first_non_whitespace(line).is_none()
}

/// First non-whitespace character is `#`.
pub fn is_comment(line: &str) -> bool {
    first_non_whitespace(line)
        .map(|i| line[i..].starts_with('#'))
        .unwrap_or(false)
}

/// Line contains at least one ASCII letter or digit.
pub fn has_alphanumeric(line: &str) -> bool {
    line.chars().any(|c| c.is_ascii_alphanumeric())
}

/// Blank, comment, or punctuation-only lines carry no content.
pub fn is_ignorable(line: &str) -> bool {
    is_blank(line) || is_comment(line) || !has_alphanumeric(line)
}

/// Leading integer of the edge-count line.
///
/// Only the start of the first token is read, so `"3 edges"` and `"3"` both
/// give 3. An optional `+` is accepted; a `-` sign or missing digits are not.
pub fn leading_count(line: &str) -> Option<usize> {
    let token = line.split_whitespace().next()?;
    let token = token.strip_prefix('+').unwrap_or(token);
    let end = token
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(token.len());
    if end == 0 {
        return None;
    }
    token[..end].parse().ok()
}
