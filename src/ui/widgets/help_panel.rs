//! Help panel widget
//!
//! `build_help_lines()` is the single source for the help overlay content.

use ratatui::{prelude::*, text::Line, widgets::Paragraph};

use crate::keys;
use crate::ui::components;

/// Build all help panel lines
pub fn build_help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("Key bindings:".bold()), Line::from("")];

    push_section(&mut lines, "Global", keys::GLOBAL_KEYS);
    push_section(&mut lines, "Editing", keys::EDITOR_KEYS);
    push_section(&mut lines, "Pane actions", keys::ACTION_KEYS);

    lines
}

fn push_section(lines: &mut Vec<Line<'static>>, title: &str, entries: &[keys::KeyBindEntry]) {
    lines.push(Line::from(format!("{title}:")).underlined());

    for entry in entries {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:12}", entry.key),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(entry.description),
        ]));
    }

    lines.push(Line::from(""));
}

/// Render help content showing key bindings.
///
/// `scroll` is the vertical scroll offset (0 = top). Values beyond the
/// content length are clamped by ratatui's Paragraph.
pub fn render_help_panel(frame: &mut Frame, area: Rect, scroll: u16) {
    frame.render_widget(
        Paragraph::new(build_help_lines())
            .block(components::overlay_block(" sidediff - Help ", Color::White))
            .scroll((scroll, 0)),
        area,
    );
}
