//! Pane actions triggered from the keyboard

use tracing::{info, warn};

use super::state::App;
use crate::document;
use crate::model::{Notification, SAMPLE_MODIFIED, SAMPLE_ORIGINAL, Side};
use crate::text;
use crate::ui::components::Dialog;

impl App {
    // ── Notification / error helpers ──────────────────────────────────

    /// Set a success notification (green)
    pub(crate) fn notify_success(&mut self, msg: impl Into<String>) {
        self.notify(Notification::success(msg));
    }

    /// Set an info notification (blue)
    pub(crate) fn notify_info(&mut self, msg: impl Into<String>) {
        self.notify(Notification::info(msg));
    }

    /// Set an error notification (red)
    pub(crate) fn notify_error(&mut self, msg: impl Into<String>) {
        self.notify(Notification::error(msg));
    }

    /// Set an error message (displayed in error area)
    pub(crate) fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    // ── Focus / overlays ──────────────────────────────────────────────

    pub(crate) fn switch_focus(&mut self) {
        self.focus = self.focus.other();
    }

    pub(crate) fn open_help(&mut self) {
        self.active_dialog = Some(Dialog::help());
    }

    pub(crate) fn open_legend(&mut self) {
        self.active_dialog = Some(Dialog::legend());
    }

    // ── Editing actions ───────────────────────────────────────────────

    /// Undo the last edit in the focused pane
    pub(crate) fn execute_undo(&mut self) {
        if self.focused_pane_mut().undo() {
            self.schedule_compare();
        } else {
            self.notify_info("Nothing to undo");
        }
    }

    /// Strip trailing whitespace from every line of the focused pane
    pub(crate) fn execute_normalize(&mut self) {
        let pane = self.focused_pane_mut();
        if pane.is_blank() {
            self.notify_error("Nothing to normalize");
            return;
        }

        let normalized = text::strip_trailing_whitespace(&pane.text());
        if normalized != pane.text() {
            pane.set_text(&normalized);
            self.schedule_compare();
        }
        self.notify_success("Whitespace normalized");
    }

    /// Copy the focused pane to the clipboard
    pub(crate) fn execute_copy(&mut self) {
        let pane = self.focused_pane();
        if pane.is_blank() {
            self.notify_error("Nothing to copy");
            return;
        }

        match self.clipboard.set_text(&pane.text()) {
            Ok(()) => self.notify_success("Copied to clipboard"),
            Err(e) => {
                warn!(error = %e, "clipboard copy failed");
                self.notify_error("Failed to copy");
            }
        }
    }

    /// Replace the focused pane with the clipboard content
    pub(crate) fn execute_paste(&mut self) {
        let content = match self.clipboard.get_text() {
            Ok(content) => content,
            Err(e) => {
                warn!(error = %e, "clipboard paste failed");
                self.notify_error("Failed to paste");
                return;
            }
        };

        if content.is_empty() {
            self.notify_error("Clipboard is empty");
            return;
        }

        self.focused_pane_mut().set_text(&content);
        self.schedule_compare();
        self.notify_success("Pasted from clipboard");
    }

    /// Insert bracketed-paste text at the cursor of the focused pane
    pub fn on_paste(&mut self, pasted: &str) {
        if self.active_dialog.is_some() {
            return;
        }
        if self.focused_pane_mut().insert_text(pasted) {
            self.schedule_compare();
        }
    }

    /// Write the focused pane to its output file
    pub(crate) fn execute_save(&mut self) {
        let side = self.focus;
        let pane = self.pane(side);
        if pane.is_blank() {
            self.notify_error("Nothing to save");
            return;
        }

        let path = self.settings.output_path(side);
        match document::write_text(&path, &pane.text()) {
            Ok(()) => self.notify_success(format!("Saved to {}", path.display())),
            Err(e) => {
                warn!(error = %e, "save failed");
                self.set_error(e.to_string());
            }
        }
    }

    /// Empty the focused pane
    pub(crate) fn execute_clear(&mut self) {
        let pane = self.focused_pane_mut();
        if pane.is_blank() {
            self.notify_info("Already empty");
            return;
        }

        pane.set_text("");
        self.schedule_compare();
        self.notify_success("Editor cleared");
    }

    /// Put the sample documents into both panes and compare right away
    pub(crate) fn load_samples(&mut self) {
        for side in Side::BOTH {
            let sample = match side {
                Side::Left => SAMPLE_ORIGINAL,
                Side::Right => SAMPLE_MODIFIED,
            };
            self.pane_mut(side).set_text(sample);
        }
        self.compare_now();
        info!(stats = %self.result.stats, "samples loaded");
        self.notify_success("Samples loaded");
    }
}
