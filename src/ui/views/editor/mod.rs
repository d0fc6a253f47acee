//! Editor pane
//!
//! One side of the comparison: a `TextArea` as the editing model plus the
//! rendering of line classes, gutter and footer counters.

mod input;
mod render;

use std::fmt;

use tui_textarea::{CursorMove, TextArea};

use crate::model::Side;
use crate::text::{self, TextStats};
use crate::ui::navigation;

pub use render::{build_content_line, display_width, expand_tabs, gutter_width};

/// Action returned by EditorPane key handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    /// Key was not handled
    None,
    /// Cursor moved, text unchanged
    Moved,
    /// Text changed
    Edited,
}

/// Editing behavior shared by both panes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorOptions {
    /// Tab key inserts a literal tab
    pub hard_tab: bool,
    /// Display width of a tab stop
    pub tab_width: u8,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            hard_tab: true,
            tab_width: 4,
        }
    }
}

/// Editor pane state
pub struct EditorPane {
    pub side: Side,
    textarea: TextArea<'static>,
    tab_width: usize,
}

impl fmt::Debug for EditorPane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorPane")
            .field("side", &self.side)
            .field("lines", &self.textarea.lines().len())
            .field("cursor", &self.textarea.cursor())
            .finish()
    }
}

impl EditorPane {
    /// Create a pane holding `text`
    pub fn new(side: Side, text: &str, options: EditorOptions) -> Self {
        let normalized = text::normalize_line_endings(text);
        let lines: Vec<String> = text::split_lines(&normalized)
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut textarea = TextArea::new(lines);
        textarea.set_hard_tab_indent(options.hard_tab);
        textarea.set_tab_length(options.tab_width.max(1));

        Self {
            side,
            textarea,
            tab_width: usize::from(options.tab_width.max(1)),
        }
    }

    /// Current text, lines joined with `\n`
    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn lines(&self) -> &[String] {
        self.textarea.lines()
    }

    /// Cursor as (row, column in code points)
    pub fn cursor(&self) -> (usize, usize) {
        self.textarea.cursor()
    }

    /// Display column of the cursor after tab expansion
    pub fn cursor_display_col(&self) -> usize {
        let (row, col) = self.cursor();
        let line = self.lines().get(row).map_or("", String::as_str);
        let end = line
            .char_indices()
            .nth(col)
            .map_or(line.len(), |(offset, _)| offset);
        display_width(&line[..end], self.tab_width)
    }

    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    /// True when the pane holds only whitespace
    pub fn is_blank(&self) -> bool {
        self.lines().iter().all(|l| l.trim().is_empty())
    }

    /// Footer counters
    pub fn stats(&self) -> TextStats {
        TextStats::of(&self.text())
    }

    /// Replace the whole text as an undoable edit and move to the top
    pub fn set_text(&mut self, text: &str) {
        let normalized = text::normalize_line_endings(text);
        self.textarea.select_all();
        self.textarea.cut();
        if !normalized.is_empty() {
            self.textarea.insert_str(normalized.as_ref());
        }
        self.textarea.move_cursor(CursorMove::Jump(0, 0));
    }

    /// Insert text at the cursor, returns whether anything was inserted
    pub fn insert_text(&mut self, text: &str) -> bool {
        let normalized = text::normalize_line_endings(text);
        self.textarea.insert_str(normalized.as_ref())
    }

    /// Undo the last edit, returns false when there is nothing to undo
    pub fn undo(&mut self) -> bool {
        self.textarea.undo()
    }

    /// Move the cursor one page up or down
    pub fn move_page(&mut self, page: usize, up: bool) {
        let (row, _) = self.cursor();
        let max_row = self.lines().len().saturating_sub(1);
        let target = navigation::page_target(row, page, up, max_row);
        let movement = if up { CursorMove::Up } else { CursorMove::Down };
        for _ in 0..row.abs_diff(target) {
            self.textarea.move_cursor(movement);
        }
    }
}
