//! Status bar widget
//!
//! A context badge (focused pane and alignment algorithm) followed by as many
//! key hints as fit in the row.

use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::engine::Algorithm;
use crate::keys::KeyHint;
use crate::model::Side;

/// What the status bar reports besides the hints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusContext {
    pub focus: Side,
    pub algorithm: Algorithm,
}

/// Build the status bar line, dropping trailing hints that exceed `width`
pub fn build_status_bar(
    context: StatusContext,
    hints: &[KeyHint],
    width: usize,
) -> Line<'static> {
    let badge = format!(" {} · {} ", context.focus.label(), context.algorithm.label());
    let mut used = badge.width();
    let mut spans = vec![Span::styled(
        badge,
        Style::default().fg(Color::Black).bg(Color::Gray),
    )];

    for hint in hints {
        let text = format!(" [{}] {} ", hint.key, hint.label);
        let needed = 1 + text.width();
        if used + needed > width {
            break;
        }
        used += needed;
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            text,
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }

    Line::from(spans)
}

/// Render the status bar into `area`
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    context: StatusContext,
    hints: &[KeyHint],
) {
    let line = build_status_bar(context, hints, area.width as usize);
    frame.render_widget(Paragraph::new(line), area);
}
