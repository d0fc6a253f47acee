//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::{Color, Modifier, Style};

use crate::engine::LineClass;

/// Colors for the editor panes
pub mod editor {
    use super::*;

    /// Removed line background
    pub const REMOVED_BG: Color = Color::Rgb(64, 24, 24);
    /// Added line background
    pub const ADDED_BG: Color = Color::Rgb(22, 56, 30);
    /// Modified line background
    pub const MODIFIED_BG: Color = Color::Rgb(60, 52, 18);
    /// Emphasized middle of a modified line on the left
    pub const REMOVED_EMPHASIS_BG: Color = Color::Rgb(128, 40, 40);
    /// Emphasized middle of a modified line on the right
    pub const ADDED_EMPHASIS_BG: Color = Color::Rgb(36, 110, 52);

    /// Gutter number colors
    pub const GUTTER: Color = Color::DarkGray;
    pub const GUTTER_REMOVED: Color = Color::Red;
    pub const GUTTER_ADDED: Color = Color::Green;
    pub const GUTTER_MODIFIED: Color = Color::Yellow;

    /// Border of the focused pane
    pub const FOCUSED_BORDER: Color = Color::Cyan;
    /// Border of the other pane
    pub const BORDER: Color = Color::DarkGray;
}

/// Colors for the header counters
pub mod header {
    use super::*;

    pub const ADDED: Color = Color::Green;
    pub const REMOVED: Color = Color::Red;
    pub const MODIFIED: Color = Color::Yellow;
    /// Pending recomputation marker
    pub const PENDING: Color = Color::DarkGray;
}

/// Background style of a whole line
pub fn line_style(class: LineClass) -> Style {
    match class {
        LineClass::Unchanged => Style::default(),
        LineClass::Removed => Style::default().bg(editor::REMOVED_BG),
        LineClass::Added => Style::default().bg(editor::ADDED_BG),
        LineClass::Modified => Style::default().bg(editor::MODIFIED_BG),
    }
}

/// Style of the differing middle of a modified line.
///
/// `removal` selects the left-side tint.
pub fn emphasis_style(removal: bool) -> Style {
    let bg = if removal {
        editor::REMOVED_EMPHASIS_BG
    } else {
        editor::ADDED_EMPHASIS_BG
    };
    Style::default().bg(bg).add_modifier(Modifier::BOLD)
}

/// Gutter number style
pub fn gutter_style(class: LineClass) -> Style {
    let fg = match class {
        LineClass::Unchanged => editor::GUTTER,
        LineClass::Removed => editor::GUTTER_REMOVED,
        LineClass::Added => editor::GUTTER_ADDED,
        LineClass::Modified => editor::GUTTER_MODIFIED,
    };
    Style::default().fg(fg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_lines_are_unstyled() {
        assert_eq!(line_style(LineClass::Unchanged), Style::default());
    }

    #[test]
    fn test_changed_lines_have_distinct_backgrounds() {
        let bgs: Vec<_> = [LineClass::Removed, LineClass::Added, LineClass::Modified]
            .into_iter()
            .map(|c| line_style(c).bg)
            .collect();
        assert_eq!(
            bgs,
            vec![
                Some(editor::REMOVED_BG),
                Some(editor::ADDED_BG),
                Some(editor::MODIFIED_BG)
            ]
        );
    }

    #[test]
    fn test_emphasis_is_bold() {
        assert!(emphasis_style(true).add_modifier.contains(Modifier::BOLD));
        assert_ne!(emphasis_style(true).bg, emphasis_style(false).bg);
    }
}
