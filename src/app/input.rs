//! Input handling for the application

use crossterm::event::KeyEvent;

use super::state::App;
use crate::keys;
use crate::ui::components::DialogResult;
use crate::ui::views::EditorAction;

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Clear error message on any key press
        self.error_message = None;

        if keys::is_quit_key(&key) {
            self.quit();
            return;
        }

        // An open overlay receives every key
        if let Some(ref mut dialog) = self.active_dialog {
            if let Some(DialogResult::Closed) = dialog.handle_key(key) {
                self.active_dialog = None;
            }
            return;
        }

        if self.handle_global_key(key) {
            return;
        }

        self.handle_editor_key(key);
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        if keys::is_compare_key(&key) {
            self.compare_now();
            return true;
        }
        if keys::is_undo_key(&key) {
            self.execute_undo();
            return true;
        }
        if keys::is_switch_focus_key(&key) {
            self.switch_focus();
            return true;
        }

        match key.code {
            keys::HELP => self.open_help(),
            keys::LEGEND => self.open_legend(),
            keys::SAMPLES => self.load_samples(),
            keys::NORMALIZE => self.execute_normalize(),
            keys::COPY => self.execute_copy(),
            keys::PASTE => self.execute_paste(),
            keys::SAVE => self.execute_save(),
            keys::CLEAR => self.execute_clear(),
            _ => return false,
        }
        true
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        let page = self.page_height.max(1);
        if self.focused_pane_mut().handle_key(key, page) == EditorAction::Edited {
            self.schedule_compare();
        }
    }
}
