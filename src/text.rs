//! Line splitting and normalization
//!
//! Turns raw editor text into the line sequences the engine compares, and
//! provides the whitespace cleanup and counters shown under each pane.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// `\r\n` or a lone `\r`
static LINE_ENDING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n?").expect("Invalid line ending regex"));

/// Replace `\r\n` and lone `\r` with `\n`, borrowing when nothing changes
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    LINE_ENDING_REGEX.replace_all(text, "\n")
}

/// Split already-normalized text into lines.
///
/// The empty string is one empty line; a trailing newline yields a trailing
/// empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Strip trailing spaces and tabs from every line
pub fn strip_trailing_whitespace(text: &str) -> String {
    let normalized = normalize_line_endings(text);
    split_lines(&normalized)
        .into_iter()
        .map(|line| line.trim_end_matches([' ', '\t']))
        .collect::<Vec<_>>()
        .join("\n")
}

/// True when the text holds nothing but whitespace
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Counters shown in a pane's status line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    /// Code points of the raw text
    pub chars: usize,
    /// Normalized lines, at least 1
    pub lines: usize,
    /// Whitespace-separated words
    pub words: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        let normalized = normalize_line_endings(text);
        Self {
            chars: text.chars().count(),
            lines: split_lines(&normalized).len(),
            words: normalized.split_whitespace().count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_crlf_and_lone_cr() {
        assert_eq!(normalize_line_endings("a\r\nb\rc\n"), "a\nb\nc\n");
    }

    #[test]
    fn test_normalize_borrows_when_clean() {
        assert!(matches!(normalize_line_endings("a\nb"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines(""), vec![""]);
        assert_eq!(split_lines("a"), vec!["a"]);
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b", ""]);
    }

    #[test]
    fn test_strip_trailing_whitespace() {
        assert_eq!(
            strip_trailing_whitespace("keep  \r\n\tindent\t\nend \t"),
            "keep\n\tindent\nend"
        );
        assert_eq!(strip_trailing_whitespace("x\n"), "x\n");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \n\t"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn test_text_stats_empty() {
        assert_eq!(
            TextStats::of(""),
            TextStats {
                chars: 0,
                lines: 1,
                words: 0
            }
        );
    }

    #[test]
    fn test_text_stats_counts() {
        let stats = TextStats::of("one two\r\n  three\n");
        assert_eq!(stats.chars, 17);
        assert_eq!(stats.lines, 3);
        assert_eq!(stats.words, 3);
    }

    #[test]
    fn test_text_stats_multibyte_chars() {
        assert_eq!(TextStats::of("我爱你").chars, 3);
    }
}
