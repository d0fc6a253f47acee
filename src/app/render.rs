//! Rendering logic for the application

use ratatui::{Frame, prelude::*, widgets::Paragraph};

use super::state::App;
use crate::engine::DiffStats;
use crate::keys;
use crate::model::{Notification, Side};
use crate::ui::components::{self, build_notification_title};
use crate::ui::symbols::markers;
use crate::ui::theme;
use crate::ui::widgets::{
    StatusContext, render_error_banner, render_notification_banner, render_status_bar,
};

const TITLE: &str = " sidediff ";
const HEADER_HEIGHT: u16 = 3;
const STATUS_BAR_HEIGHT: u16 = 1;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let notification = self
            .notification
            .as_ref()
            .filter(|n| !n.is_expired())
            .cloned();

        let chunks = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

        let header_fits = self.render_header(frame, chunks[0], notification.as_ref());
        self.render_panes(frame, chunks[1]);

        let hints = self
            .active_dialog
            .as_ref()
            .map_or(keys::EDITOR_HINTS, |d| d.hints());
        let context = StatusContext {
            focus: self.focus,
            algorithm: self.settings.algorithm,
        };
        render_status_bar(frame, chunks[2], context, hints);

        if let Some(ref n) = notification
            && !header_fits
        {
            render_notification_banner(frame, n, STATUS_BAR_HEIGHT);
        }

        if let Some(ref error) = self.error_message {
            render_error_banner(frame, error, STATUS_BAR_HEIGHT);
        }

        // dialogs draw last
        if let Some(ref dialog) = self.active_dialog {
            dialog.render(frame, frame.area());
        }
    }

    /// Header with counters; returns false when the notification did not fit
    fn render_header(
        &self,
        frame: &mut Frame,
        area: Rect,
        notification: Option<&Notification>,
    ) -> bool {
        let mut block = components::header_block(TITLE);

        let mut fits = true;
        if let Some(n) = notification {
            let max_width = (area.width as usize).saturating_sub(TITLE.len() + 4);
            let line = build_notification_title(n, Some(max_width));
            if line.spans.is_empty() {
                fits = false;
            } else {
                block = block.title(line.right_aligned());
            }
        }

        let counters = build_counters_line(&self.result.stats, self.is_compare_pending());
        frame.render_widget(Paragraph::new(counters).block(block), area);
        fits
    }

    fn render_panes(&mut self, frame: &mut Frame, area: Rect) {
        let chunks =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);
        let area_of = |side: Side| match side {
            Side::Left => chunks[0],
            Side::Right => chunks[1],
        };

        let focused = self.focused_pane();
        let (height, width) = focused.viewport(area_of(self.focus));
        let (row, _) = focused.cursor();
        let col = focused.cursor_display_col();
        self.scroll.follow(row, col, height, width);
        self.page_height = height;

        for side in Side::BOTH {
            self.pane(side).render(
                frame,
                area_of(side),
                self.result.side(side),
                self.scroll,
                side == self.focus,
            );
        }
    }
}

/// Counter line: `Added: A | Removed: R | Modified: M` plus the pending marker
pub(crate) fn build_counters_line(stats: &DiffStats, pending: bool) -> Line<'static> {
    let mut spans = vec![
        Span::raw(" Added: "),
        Span::styled(
            stats.added.to_string(),
            Style::default().fg(theme::header::ADDED).bold(),
        ),
        Span::raw(markers::SEPARATOR),
        Span::raw("Removed: "),
        Span::styled(
            stats.removed.to_string(),
            Style::default().fg(theme::header::REMOVED).bold(),
        ),
        Span::raw(markers::SEPARATOR),
        Span::raw("Modified: "),
        Span::styled(
            stats.modified.to_string(),
            Style::default().fg(theme::header::MODIFIED).bold(),
        ),
    ];

    if pending {
        spans.push(Span::styled(
            format!(" {} comparing", markers::PENDING),
            Style::default().fg(theme::header::PENDING),
        ));
    }

    Line::from(spans)
}
