//! Intra-line refinement
//!
//! Trims the common prefix and the non-overlapping common suffix of two
//! lines (over code points) to isolate the differing middle of each.

use std::ops::Range;

use crate::model::Side;

/// Minimal differing region between two paired lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSpan {
    /// Common prefix length in code points
    pub prefix_len: usize,
    /// Differing middle of the left line (may be empty)
    pub left_middle: String,
    /// Differing middle of the right line (may be empty)
    pub right_middle: String,
    /// Common suffix length in code points
    pub suffix_len: usize,
}

impl CharSpan {
    /// Differing middle for one side
    pub fn middle(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.left_middle,
            Side::Right => &self.right_middle,
        }
    }

    /// Code-point range of the middle within that side's line
    pub fn middle_range(&self, side: Side) -> Range<usize> {
        let start = self.prefix_len;
        start..start + self.middle(side).chars().count()
    }

    /// Slice `line` into `(prefix, middle, suffix)`.
    ///
    /// Prefix and suffix lengths are shared by both sides, so either paired
    /// line can be split. Other input is clamped rather than rejected.
    pub fn split<'a>(&self, line: &'a str) -> (&'a str, &'a str, &'a str) {
        let total = line.chars().count();
        let start = self.prefix_len.min(total);
        let end = total.saturating_sub(self.suffix_len).max(start);

        let start_byte = byte_offset(line, start);
        let end_byte = byte_offset(line, end);
        (
            &line[..start_byte],
            &line[start_byte..end_byte],
            &line[end_byte..],
        )
    }
}

fn byte_offset(line: &str, chars: usize) -> usize {
    line.char_indices()
        .nth(chars)
        .map_or(line.len(), |(offset, _)| offset)
}

/// Compute the differing span of a paired line.
///
/// Returns `None` when the lines are equal.
pub fn refine(left: &str, right: &str) -> Option<CharSpan> {
    if left == right {
        return None;
    }

    let left_chars: Vec<char> = left.chars().collect();
    let right_chars: Vec<char> = right.chars().collect();

    let prefix_len = left_chars
        .iter()
        .zip(&right_chars)
        .take_while(|(l, r)| l == r)
        .count();

    // Suffix may not reach back into the prefix on either side
    let left_rest = &left_chars[prefix_len..];
    let right_rest = &right_chars[prefix_len..];
    let suffix_len = left_rest
        .iter()
        .rev()
        .zip(right_rest.iter().rev())
        .take_while(|(l, r)| l == r)
        .count();

    Some(CharSpan {
        prefix_len,
        left_middle: left_rest[..left_rest.len() - suffix_len].iter().collect(),
        right_middle: right_rest[..right_rest.len() - suffix_len].iter().collect(),
        suffix_len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_lines_have_no_span() {
        assert_eq!(refine("same", "same"), None);
        assert_eq!(refine("", ""), None);
    }

    #[test]
    fn test_trailing_change() {
        let span = refine("foo bar", "foo baz").unwrap();
        assert_eq!(span.prefix_len, 6);
        assert_eq!(span.left_middle, "r");
        assert_eq!(span.right_middle, "z");
        assert_eq!(span.suffix_len, 0);
    }

    #[test]
    fn test_inner_insertion_has_empty_left_middle() {
        let span = refine("Correct typo in settings", "Correct typos in settings").unwrap();
        assert_eq!(span.prefix_len, 12);
        assert_eq!(span.left_middle, "");
        assert_eq!(span.right_middle, "s");
        assert_eq!(span.suffix_len, 12);
    }

    #[test]
    fn test_suffix_does_not_overlap_prefix() {
        // "aa" vs "aaa": prefix takes both left chars, suffix must stay empty
        let span = refine("aa", "aaa").unwrap();
        assert_eq!(span.prefix_len, 2);
        assert_eq!(span.left_middle, "");
        assert_eq!(span.right_middle, "a");
        assert_eq!(span.suffix_len, 0);
    }

    #[test]
    fn test_completely_different_lines() {
        let span = refine("abc", "xyz").unwrap();
        assert_eq!(span.prefix_len, 0);
        assert_eq!(span.left_middle, "abc");
        assert_eq!(span.right_middle, "xyz");
        assert_eq!(span.suffix_len, 0);
    }

    #[test]
    fn test_empty_against_text() {
        let span = refine("", "new").unwrap();
        assert_eq!(span.prefix_len, 0);
        assert_eq!(span.left_middle, "");
        assert_eq!(span.right_middle, "new");
        assert_eq!(span.suffix_len, 0);
    }

    #[test]
    fn test_multibyte_code_points() {
        let span = refine("我爱你", "我不爱你").unwrap();
        assert_eq!(span.prefix_len, 1);
        assert_eq!(span.left_middle, "");
        assert_eq!(span.right_middle, "不");
        assert_eq!(span.suffix_len, 2);
    }

    #[test]
    fn test_split_reconstructs_both_lines() {
        let left = "Release Notes - v2.3.1";
        let right = "Release Notes - v2.4.0";
        let span = refine(left, right).unwrap();

        let (prefix, middle, suffix) = span.split(left);
        assert_eq!(prefix, "Release Notes - v2.");
        assert_eq!(middle, "3.1");
        assert_eq!(suffix, "");
        assert_eq!(format!("{prefix}{middle}{suffix}"), left);

        let (prefix, middle, suffix) = span.split(right);
        assert_eq!(middle, "4.0");
        assert_eq!(format!("{prefix}{middle}{suffix}"), right);
    }

    #[test]
    fn test_split_multibyte() {
        let span = refine("我爱你", "我不爱你").unwrap();
        assert_eq!(span.split("我不爱你"), ("我", "不", "爱你"));
        assert_eq!(span.split("我爱你"), ("我", "", "爱你"));
    }

    #[test]
    fn test_split_clamps_foreign_line() {
        let span = refine("abcdef", "abXdef").unwrap();
        assert_eq!(span.split("ab"), ("ab", "", ""));
    }

    #[test]
    fn test_middle_range() {
        let span = refine("New inline diff panel", "New inline diff viewer").unwrap();
        assert_eq!(span.middle(Side::Left), "panel");
        assert_eq!(span.middle(Side::Right), "viewer");
        assert_eq!(span.middle_range(Side::Left), 16..21);
        assert_eq!(span.middle_range(Side::Right), 16..22);
    }
}
