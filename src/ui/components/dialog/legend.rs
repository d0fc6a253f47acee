//! Legend dialog input handling and rendering

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use super::{Dialog, DialogResult, overlay_area};
use crate::engine::LineClass;
use crate::keys;
use crate::ui::components::overlay_block;
use crate::ui::theme;

/// Line classes in display order with their explanations
pub(super) const LEGEND_ENTRIES: [(LineClass, &str); 4] = [
    (LineClass::Unchanged, "Identical on both sides"),
    (LineClass::Removed, "Only in the original text"),
    (LineClass::Added, "Only in the modified text"),
    (LineClass::Modified, "Changed line, differing part emphasized"),
];

/// Build the legend body
pub(super) fn build_legend_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];

    for (class, description) in LEGEND_ENTRIES {
        let swatch_style = theme::line_style(class).patch(theme::gutter_style(class));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!(" {} ", class.marker()), swatch_style),
            Span::raw(" "),
            Span::styled(
                format!("{:<10}", class.label()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(description),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from("  Modified lines pair the n-th removed line with the"));
    lines.push(Line::from("  n-th added line of the same change block."));
    lines
}

impl Dialog {
    pub(super) fn handle_legend_key(key: KeyEvent) -> Option<DialogResult> {
        match key.code {
            keys::ESC | keys::LEGEND | KeyCode::Enter => Some(DialogResult::Closed),
            _ => None,
        }
    }

    pub(super) fn render_legend(&self, frame: &mut Frame, area: Rect) {
        let lines = build_legend_lines();
        let width = 62.min(area.width.saturating_sub(4));
        let height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
        let overlay = overlay_area(width, height, area);

        frame.render_widget(Clear, overlay);

        let paragraph = Paragraph::new(lines).block(overlay_block(" Diff Legend ", Color::Cyan));
        frame.render_widget(paragraph, overlay);
    }
}
