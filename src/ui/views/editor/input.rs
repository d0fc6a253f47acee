//! Key handling for EditorPane

use crossterm::event::KeyEvent;

use crate::keys;

use super::{EditorAction, EditorPane};

impl EditorPane {
    /// Handle key input.
    ///
    /// `page_height` is the number of visible lines, used by PageUp/PageDown.
    pub fn handle_key(&mut self, key: KeyEvent, page_height: usize) -> EditorAction {
        match key.code {
            keys::PAGE_UP => {
                self.move_page(page_height, true);
                EditorAction::Moved
            }
            keys::PAGE_DOWN => {
                self.move_page(page_height, false);
                EditorAction::Moved
            }
            _ => {
                let before = self.cursor();
                if self.textarea.input(key) {
                    EditorAction::Edited
                } else if self.cursor() != before {
                    EditorAction::Moved
                } else {
                    EditorAction::None
                }
            }
        }
    }
}
