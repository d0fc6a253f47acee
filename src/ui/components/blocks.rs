//! Block components for UI rendering
//!
//! Frames for the header, the two editor panes and the overlays.

use ratatui::{
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders},
};

use crate::ui::{symbols, theme};

/// Frame of an editor pane; the focused pane gets the accent border and marker
pub fn pane_block(label: &str, focused: bool) -> Block<'static> {
    let (title, border) = if focused {
        (
            Line::from(format!(" {} {} ", symbols::markers::FOCUSED, label))
                .bold()
                .fg(theme::editor::FOCUSED_BORDER),
            theme::editor::FOCUSED_BORDER,
        )
    } else {
        (Line::from(format!(" {} ", label)), theme::editor::BORDER)
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title)
}

/// Frame of the header
pub fn header_block<'a>(title: &'a str) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .title(Line::from(title).bold())
}

/// Frame of a modal overlay, title centered
pub fn overlay_block<'a>(title: &'a str, accent: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(Line::from(title).bold().centered())
}
