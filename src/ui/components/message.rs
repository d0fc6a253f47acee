//! Styled lines for errors and toasts

use ratatui::{
    prelude::*,
    text::{Line, Span},
};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::model::{Notification, NotificationKind};

/// Label background and text color for a notification kind
pub fn notification_colors(kind: NotificationKind) -> (Color, Color) {
    match kind {
        NotificationKind::Success => (Color::Green, Color::Green),
        NotificationKind::Info => (Color::Cyan, Color::Cyan),
        NotificationKind::Error => (Color::Red, Color::Red),
    }
}

/// Red `Error:` badge followed by the message
pub fn build_error_line(error: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(" Error: ", Style::default().fg(Color::White).bg(Color::Red)),
        Span::styled(format!(" {} ", error), Style::default().fg(Color::Red)),
    ])
}

/// Right-hand header title for a toast.
///
/// With `max_width`, a long message is cut and ends in "…". When not even
/// one character of it fits, the line is empty and the caller falls back to
/// the banner.
pub fn build_notification_title(
    notification: &Notification,
    max_width: Option<usize>,
) -> Line<'static> {
    const SEPARATOR: &str = " | ";
    let label = format!("{} ", notification.kind.label());
    let (label_bg, text_fg) = notification_colors(notification.kind);
    let message = notification.message.as_str();

    let reserved = SEPARATOR.width() + label.width() + 1;
    let shown = match max_width {
        Some(max) if reserved + message.width() > max => {
            let budget = max.saturating_sub(reserved + "…".width());
            let cut = truncate_to_width(message, budget);
            if cut.is_empty() {
                return Line::default();
            }
            format!("{cut}… ")
        }
        _ => format!("{message} "),
    };

    Line::from(vec![
        Span::raw(SEPARATOR),
        Span::styled(label, Style::default().fg(Color::Black).bg(label_bg)),
        Span::styled(shown, Style::default().fg(text_fg)),
    ])
}

/// Longest prefix of `text` whose display width fits in `budget`
fn truncate_to_width(text: &str, budget: usize) -> &str {
    let mut used = 0;
    for (index, c) in text.char_indices() {
        used += c.width().unwrap_or(0);
        if used > budget {
            return &text[..index];
        }
    }
    text
}
