//! Overlay dialogs
//!
//! Modal overlays that take all key input while open:
//! - Help: scrollable key binding list
//! - Legend: explanation of the four line classes

mod legend;

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::Clear,
};

use crate::keys;
use crate::ui::widgets;

/// Which overlay is open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogKind {
    /// Key binding list
    Help {
        /// Vertical scroll offset
        scroll: u16,
    },
    /// Line class legend
    Legend,
}

/// Outcome reported back to the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    Closed,
}

/// An open overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
}

impl Dialog {
    /// Create the help overlay
    pub fn help() -> Self {
        Self {
            kind: DialogKind::Help { scroll: 0 },
        }
    }

    /// Create the legend overlay
    pub fn legend() -> Self {
        Self {
            kind: DialogKind::Legend,
        }
    }

    /// Feed a key to the overlay; `Some(Closed)` once it should go away
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<DialogResult> {
        match self.kind {
            DialogKind::Help { ref mut scroll } => match key.code {
                keys::ESC | keys::HELP => Some(DialogResult::Closed),
                keys::SCROLL_DOWN => {
                    *scroll = scroll.saturating_add(1);
                    None
                }
                keys::SCROLL_UP => {
                    *scroll = scroll.saturating_sub(1);
                    None
                }
                _ => None,
            },
            DialogKind::Legend => Self::handle_legend_key(key),
        }
    }

    /// Status bar hints while this dialog is open
    pub fn hints(&self) -> &'static [keys::KeyHint] {
        match self.kind {
            DialogKind::Help { .. } => keys::HELP_HINTS,
            DialogKind::Legend => keys::LEGEND_HINTS,
        }
    }

    /// Draw over whatever is already in `area`
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match self.kind {
            DialogKind::Help { scroll } => {
                let width = 60.min(area.width.saturating_sub(4));
                let height = area.height.saturating_sub(4).max(3);
                let overlay = overlay_area(width, height, area);
                frame.render_widget(Clear, overlay);
                widgets::render_help_panel(frame, overlay, scroll);
            }
            DialogKind::Legend => self.render_legend(frame, area),
        }
    }
}

/// `width` x `height` box in the middle of `area`, clamped to it
pub(super) fn overlay_area(width: u16, height: u16, area: Rect) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [overlay] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);
    overlay
}
