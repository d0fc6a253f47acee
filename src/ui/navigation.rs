//! Shared scroll helpers for the editor panes
//!
//! Pure functions that compute new cursor/scroll state without side effects.
//! Both panes share one [`ScrollOffset`]; the focused pane drives it.

/// Calculate scroll offset to keep `position` visible within `visible_count` cells.
///
/// If `visible_count` is 0, returns `scroll_offset` unchanged (no-op).
/// Used for rows and display columns alike.
pub fn adjust_scroll(position: usize, scroll_offset: usize, visible_count: usize) -> usize {
    if visible_count == 0 {
        return scroll_offset;
    }
    if position < scroll_offset {
        position
    } else if position >= scroll_offset + visible_count {
        position - visible_count + 1
    } else {
        scroll_offset
    }
}

/// Row reached by moving one page from `row`, clamped to `0..=max_row`
pub fn page_target(row: usize, page: usize, up: bool, max_row: usize) -> usize {
    let page = page.max(1);
    if up {
        row.saturating_sub(page)
    } else {
        row.saturating_add(page).min(max_row)
    }
}

/// Vertical and horizontal scroll shared by both panes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollOffset {
    /// First visible line
    pub row: usize,
    /// First visible display column
    pub col: usize,
}

impl ScrollOffset {
    /// Keep the cell at (`row`, `col`) inside a `height` x `width` viewport
    pub fn follow(&mut self, row: usize, col: usize, height: usize, width: usize) {
        self.row = adjust_scroll(row, self.row, height);
        self.col = adjust_scroll(col, self.col, width);
    }
}
