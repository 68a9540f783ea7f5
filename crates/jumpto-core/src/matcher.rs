//! Per-region matching.
//!
//! Applies a parsed [`Matcher`] against the remainder of a single line,
//! anchored on one region's active offset. All public inputs/outputs are
//! **character offsets**; a small char↔byte table converts the byte
//! positions produced by substring/regex search back to character offsets.
//!
//! Invariants:
//!
//! - a matcher only ever searches the line containing the active offset; no
//!   match crosses a newline
//! - the literal matcher starts its search at relative character offset 1,
//!   so a match, if any, lies strictly after the caret (forward progress)
//! - the count matcher clamps to `[line_start, line_end]` inclusive; a
//!   target outside those bounds is a non-match

use crate::host::TextHost;
use crate::region::Region;
use crate::specifier::Matcher;

/// Char offset ↔ byte offset table for one line remainder.
#[derive(Debug)]
pub(crate) struct CharIndex {
    char_to_byte: Vec<usize>,
    text_len: usize,
}

impl CharIndex {
    pub(crate) fn new(text: &str) -> Self {
        let mut char_to_byte: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        char_to_byte.push(text.len());
        Self {
            char_to_byte,
            text_len: text.len(),
        }
    }

    pub(crate) fn char_count(&self) -> usize {
        self.char_to_byte.len().saturating_sub(1)
    }

    pub(crate) fn char_to_byte(&self, char_offset: usize) -> usize {
        let clamped = char_offset.min(self.char_count());
        self.char_to_byte
            .get(clamped)
            .cloned()
            .unwrap_or(self.text_len)
    }

    pub(crate) fn byte_to_char(&self, byte_offset: usize) -> usize {
        let clamped = byte_offset.min(self.text_len);
        match self.char_to_byte.binary_search(&clamped) {
            Ok(idx) => idx,
            Err(idx) => idx,
        }
    }
}

/// Find `needle` in `rest`, starting at character offset 1.
///
/// Returns the half-open character span within `rest`.
fn find_literal(rest: &str, needle: &str) -> Option<(usize, usize)> {
    let index = CharIndex::new(rest);
    let from_byte = index.char_to_byte(1);
    let found = rest[from_byte..].find(needle)?;
    let start = index.byte_to_char(from_byte + found);
    Some((start, start + needle.chars().count()))
}

/// Find the first regex match anywhere in `rest` (it may start at offset 0).
fn find_regex(rest: &str, regex: &regex::Regex) -> Option<(usize, usize)> {
    let m = regex.find(rest)?;
    let index = CharIndex::new(rest);
    Some((index.byte_to_char(m.start()), index.byte_to_char(m.end())))
}

impl Matcher {
    /// Apply this matcher for one region, anchored on its `active` offset.
    ///
    /// Returns the matched span as a forward region (`anchor` = match start,
    /// `active` = match end), or `None` when nothing matches on the active
    /// offset's line. [`Matcher::Count`] produces a caret.
    pub fn find_from<H: TextHost + ?Sized>(&self, host: &H, active: usize) -> Option<Region> {
        let (line_start, line_end) = host.line_bounds(active);

        match self {
            Self::Noop => None,
            Self::Literal(needle) => {
                let rest = host.text(active, line_end);
                let (start, end) = find_literal(&rest, needle)?;
                Some(Region::new(active + start, active + end))
            }
            Self::Regex(regex) => {
                let rest = host.text(active, line_end);
                let (start, end) = find_regex(&rest, regex)?;
                Some(Region::new(active + start, active + end))
            }
            Self::Count(n) => {
                let target = active as isize + n;
                if target < line_start as isize || target > line_end as isize {
                    return None;
                }
                Some(Region::caret(target as usize))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::RopeBuffer;

    fn literal(needle: &str) -> Matcher {
        Matcher::Literal(needle.to_string())
    }

    fn regex(pattern: &str) -> Matcher {
        Matcher::Regex(regex::Regex::new(pattern).unwrap())
    }

    #[test]
    fn test_literal_forward_progress() {
        // Caret sits on an 'a'; the search must skip it and land on the
        // next occurrence, never offset 0.
        let buffer = RopeBuffer::new("aXaXa");
        let found = literal("a").find_from(&buffer, 0).unwrap();
        assert_eq!(found, Region::new(2, 3));
    }

    #[test]
    fn test_literal_stays_on_line() {
        let buffer = RopeBuffer::new("abc\nabc");
        assert_eq!(literal("abc").find_from(&buffer, 0), None);
        // From the second line's start there is no further occurrence.
        assert_eq!(literal("abc").find_from(&buffer, 4), None);
    }

    #[test]
    fn test_literal_at_line_end() {
        let buffer = RopeBuffer::new("abc");
        assert_eq!(literal("c").find_from(&buffer, 3), None);
    }

    #[test]
    fn test_literal_multibyte() {
        // All offsets are character offsets, independent of UTF-8 widths.
        let buffer = RopeBuffer::new("日本語 日本語");
        let found = literal("日本").find_from(&buffer, 0).unwrap();
        assert_eq!(found, Region::new(4, 6));
    }

    #[test]
    fn test_regex_may_match_at_offset_zero() {
        let buffer = RopeBuffer::new("abcabc");
        let found = regex("a.c").find_from(&buffer, 0).unwrap();
        assert_eq!(found, Region::new(0, 3));
    }

    #[test]
    fn test_regex_does_not_cross_line() {
        let buffer = RopeBuffer::new("ab\ncd");
        // From the last character of line 0, ".*" may only see "b".
        let found = regex(".*").find_from(&buffer, 1).unwrap();
        assert_eq!(found, Region::new(1, 2));
        assert!(found.max() <= 2);
    }

    #[test]
    fn test_count_clamps_to_line() {
        // Line "abc" spans character offsets [10, 13).
        let buffer = RopeBuffer::new("123456789\nabc\nxyz");
        assert_eq!(Matcher::Count(5).find_from(&buffer, 11), None);
        assert_eq!(
            Matcher::Count(1).find_from(&buffer, 11),
            Some(Region::caret(12))
        );
        // The line-end offset itself is in bounds.
        assert_eq!(
            Matcher::Count(2).find_from(&buffer, 11),
            Some(Region::caret(13))
        );
        assert_eq!(Matcher::Count(-2).find_from(&buffer, 11), None);
        assert_eq!(
            Matcher::Count(-1).find_from(&buffer, 11),
            Some(Region::caret(10))
        );
    }

    #[test]
    fn test_count_zero_is_a_noop_caret() {
        let buffer = RopeBuffer::new("abc");
        assert_eq!(
            Matcher::Count(0).find_from(&buffer, 1),
            Some(Region::caret(1))
        );
    }

    #[test]
    fn test_noop_never_matches() {
        let buffer = RopeBuffer::new("abc");
        assert_eq!(Matcher::Noop.find_from(&buffer, 0), None);
    }
}
