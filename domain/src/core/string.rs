//! String utilities for the domain layer.
//!
//! Caseless matching here compares one `char` at a time through
//! [`char::to_lowercase`], so offsets always refer to the original string
//! and never drift when lowercasing changes a character's byte length.

use std::ops::Range;

/// Whether `s` is empty or consists only of whitespace.
pub fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

fn chars_eq_caseless(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Try to match `needle` at byte offset `start` of `haystack`.
///
/// Returns the byte offset just past the match.
fn match_at(haystack: &str, start: usize, needle: &str) -> Option<usize> {
    let mut rest = haystack[start..].char_indices();
    let mut end = start;
    for n in needle.chars() {
        let (offset, h) = rest.next()?;
        if !chars_eq_caseless(h, n) {
            return None;
        }
        end = start + offset + h.len_utf8();
    }
    Some(end)
}

/// Find the first caseless occurrence of `needle` at or after byte `from`.
pub fn find_caseless(haystack: &str, needle: &str, from: usize) -> Option<Range<usize>> {
    if needle.is_empty() || from > haystack.len() {
        return None;
    }
    haystack[from..]
        .char_indices()
        .map(|(offset, _)| from + offset)
        .find_map(|start| match_at(haystack, start, needle).map(|end| start..end))
}

/// Caseless substring test.
pub fn contains_caseless(haystack: &str, needle: &str) -> bool {
    find_caseless(haystack, needle, 0).is_some()
}

/// All non-overlapping caseless occurrences of `needle`, left to right.
pub fn find_all_caseless(haystack: &str, needle: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(range) = find_caseless(haystack, needle, from) {
        from = range.end;
        ranges.push(range);
    }
    ranges
}

/// Truncate a string to at most `max_chars` characters, appending an ellipsis
/// when something was cut.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some(_) => {
            let keep = max_chars.saturating_sub(1);
            let end = s.char_indices().nth(keep).map_or(s.len(), |(i, _)| i);
            format!("{}…", &s[..end])
        }
    }
}
