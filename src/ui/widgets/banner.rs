//! One-row banners drawn over the bottom of the panes
//!
//! The error banner sits right above the pane footers. A notification that
//! does not fit the header title is shown one row higher.

use ratatui::{prelude::*, text::Line, widgets::Paragraph};

use crate::model::Notification;
use crate::ui::components::{build_error_line, notification_colors};

const ERROR_ROWS_ABOVE_STATUS: u16 = 2;
const NOTIFICATION_ROWS_ABOVE_STATUS: u16 = 3;

/// Row `rows_above` lines over the status bar, inset by two columns
fn banner_area(screen: Rect, status_bar_height: u16, rows_above: u16) -> Rect {
    Rect {
        x: screen.x + 2,
        y: screen.y + screen.height.saturating_sub(status_bar_height + rows_above),
        width: screen.width.saturating_sub(4),
        height: 1,
    }
}

/// Draw `error` above the pane footers
pub fn render_error_banner(frame: &mut Frame, error: &str, status_bar_height: u16) {
    let area = banner_area(frame.area(), status_bar_height, ERROR_ROWS_ABOVE_STATUS);
    frame.render_widget(Paragraph::new(build_error_line(error)), area);
}

/// Draw a notification that did not fit the header
pub fn render_notification_banner(
    frame: &mut Frame,
    notification: &Notification,
    status_bar_height: u16,
) {
    let area = banner_area(
        frame.area(),
        status_bar_height,
        NOTIFICATION_ROWS_ABOVE_STATUS,
    );
    frame.render_widget(Paragraph::new(notification_line(notification)), area);
}

fn notification_line(notification: &Notification) -> Line<'static> {
    let (label_bg, text_fg) = notification_colors(notification.kind);
    Line::from(vec![
        Span::styled(
            format!(" {} ", notification.kind.label()),
            Style::default().fg(Color::Black).bg(label_bg),
        ),
        Span::styled(
            format!(" {} ", notification.message),
            Style::default().fg(text_fg),
        ),
    ])
}
