//! Keybinding definitions for sidediff
//!
//! All keybindings are defined here so input handling, the help overlay and
//! the status bar stay in sync.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check for Ctrl+<c>
/// Note: Accept both cases for terminal compatibility
fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(k) if k.eq_ignore_ascii_case(&c))
}

/// Check if key quits the application (Ctrl+Q or Ctrl+C)
pub fn is_quit_key(key: &KeyEvent) -> bool {
    is_ctrl(key, 'q') || is_ctrl(key, 'c')
}

/// Check if key is Ctrl+L (compare now)
pub fn is_compare_key(key: &KeyEvent) -> bool {
    is_ctrl(key, 'l')
}

/// Check if key is Ctrl+Z (undo in focused pane)
pub fn is_undo_key(key: &KeyEvent) -> bool {
    is_ctrl(key, 'z')
}

/// Check if key switches pane focus (Shift+Tab or Ctrl+W)
pub fn is_switch_focus_key(key: &KeyEvent) -> bool {
    key.code == SWITCH_FOCUS || is_ctrl(key, 'w')
}

// =============================================================================
// Global keys
// =============================================================================

/// Show help overlay
pub const HELP: KeyCode = KeyCode::F(1);

/// Show diff legend
pub const LEGEND: KeyCode = KeyCode::F(2);

/// Close overlay
pub const ESC: KeyCode = KeyCode::Esc;

/// Switch focused pane
pub const SWITCH_FOCUS: KeyCode = KeyCode::BackTab;

// =============================================================================
// Pane actions (apply to the focused pane)
// =============================================================================

/// Load the sample pair into both panes
pub const SAMPLES: KeyCode = KeyCode::F(3);

/// Strip trailing whitespace
pub const NORMALIZE: KeyCode = KeyCode::F(4);

/// Copy pane text to the clipboard
pub const COPY: KeyCode = KeyCode::F(5);

/// Replace pane text with the clipboard
pub const PASTE: KeyCode = KeyCode::F(6);

/// Save pane text to a file
pub const SAVE: KeyCode = KeyCode::F(7);

/// Empty the pane
pub const CLEAR: KeyCode = KeyCode::F(8);

// =============================================================================
// Navigation keys
// =============================================================================

/// Move cursor one page up
pub const PAGE_UP: KeyCode = KeyCode::PageUp;

/// Move cursor one page down
pub const PAGE_DOWN: KeyCode = KeyCode::PageDown;

/// Scroll overlay up
pub const SCROLL_UP: KeyCode = KeyCode::Up;

/// Scroll overlay down
pub const SCROLL_DOWN: KeyCode = KeyCode::Down;

// =============================================================================
// Help entries
// =============================================================================

/// Key binding entry for help display
pub struct KeyBindEntry {
    pub key: &'static str,
    pub description: &'static str,
}

/// Global key bindings for help display
pub const GLOBAL_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "F1",
        description: "Toggle this help",
    },
    KeyBindEntry {
        key: "F2",
        description: "Diff legend",
    },
    KeyBindEntry {
        key: "Ctrl+L",
        description: "Compare now",
    },
    KeyBindEntry {
        key: "Esc",
        description: "Close overlay",
    },
    KeyBindEntry {
        key: "Ctrl+Q",
        description: "Quit",
    },
];

/// Editing key bindings for help display
pub const EDITOR_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "S-Tab/^W",
        description: "Switch pane",
    },
    KeyBindEntry {
        key: "Arrows",
        description: "Move cursor",
    },
    KeyBindEntry {
        key: "PgUp/PgDn",
        description: "Move one page up/down",
    },
    KeyBindEntry {
        key: "Tab",
        description: "Indent",
    },
    KeyBindEntry {
        key: "Ctrl+Z",
        description: "Undo",
    },
];

/// Pane action key bindings for help display
pub const ACTION_KEYS: &[KeyBindEntry] = &[
    KeyBindEntry {
        key: "F3",
        description: "Load sample texts",
    },
    KeyBindEntry {
        key: "F4",
        description: "Strip trailing whitespace",
    },
    KeyBindEntry {
        key: "F5",
        description: "Copy pane to clipboard",
    },
    KeyBindEntry {
        key: "F6",
        description: "Paste clipboard into pane",
    },
    KeyBindEntry {
        key: "F7",
        description: "Save pane to file",
    },
    KeyBindEntry {
        key: "F8",
        description: "Clear pane",
    },
];

// =============================================================================
// Status bar hints
// =============================================================================

/// Key hint for status bar display (colored badges)
#[derive(Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const HINT_HELP: KeyHint = KeyHint {
    key: "F1",
    label: "Help",
    color: Color::Cyan,
};
pub const HINT_LEGEND: KeyHint = KeyHint {
    key: "F2",
    label: "Legend",
    color: Color::Cyan,
};
pub const HINT_SAMPLES: KeyHint = KeyHint {
    key: "F3",
    label: "Samples",
    color: Color::Magenta,
};
pub const HINT_NORMALIZE: KeyHint = KeyHint {
    key: "F4",
    label: "Trim",
    color: Color::Yellow,
};
pub const HINT_COPY: KeyHint = KeyHint {
    key: "F5",
    label: "Copy",
    color: Color::Green,
};
pub const HINT_PASTE: KeyHint = KeyHint {
    key: "F6",
    label: "Paste",
    color: Color::Green,
};
pub const HINT_SAVE: KeyHint = KeyHint {
    key: "F7",
    label: "Save",
    color: Color::Green,
};
pub const HINT_CLEAR: KeyHint = KeyHint {
    key: "F8",
    label: "Clear",
    color: Color::Red,
};
pub const HINT_SWITCH: KeyHint = KeyHint {
    key: "^W",
    label: "Pane",
    color: Color::Blue,
};
pub const HINT_QUIT: KeyHint = KeyHint {
    key: "^Q",
    label: "Quit",
    color: Color::Red,
};
pub const HINT_CLOSE: KeyHint = KeyHint {
    key: "Esc",
    label: "Close",
    color: Color::Red,
};
pub const HINT_SCROLL: KeyHint = KeyHint {
    key: "↑↓",
    label: "Scroll",
    color: Color::Cyan,
};

/// Hints while editing
pub const EDITOR_HINTS: &[KeyHint] = &[
    HINT_HELP,
    HINT_LEGEND,
    HINT_SAMPLES,
    HINT_NORMALIZE,
    HINT_COPY,
    HINT_PASTE,
    HINT_SAVE,
    HINT_CLEAR,
    HINT_SWITCH,
    HINT_QUIT,
];

/// Hints while the help overlay is open
pub const HELP_HINTS: &[KeyHint] = &[HINT_SCROLL, HINT_CLOSE];

/// Hints while the legend is open
pub const LEGEND_HINTS: &[KeyHint] = &[HINT_CLOSE];

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn quit_accepts_ctrl_q_and_ctrl_c() {
        assert!(is_quit_key(&ctrl('q')));
        assert!(is_quit_key(&ctrl('C')));
        assert!(!is_quit_key(&KeyEvent::from(KeyCode::Char('q'))));
    }

    #[test]
    fn switch_focus_accepts_backtab_and_ctrl_w() {
        assert!(is_switch_focus_key(&KeyEvent::new(
            KeyCode::BackTab,
            KeyModifiers::SHIFT
        )));
        assert!(is_switch_focus_key(&ctrl('w')));
        assert!(!is_switch_focus_key(&KeyEvent::from(KeyCode::Tab)));
    }

    #[test]
    fn plain_letters_are_not_shortcuts() {
        let z = KeyEvent::from(KeyCode::Char('z'));
        assert!(!is_undo_key(&z));
        assert!(!is_compare_key(&KeyEvent::from(KeyCode::Char('l'))));
        assert!(is_undo_key(&ctrl('z')));
        assert!(is_compare_key(&ctrl('l')));
    }

    #[test]
    fn editor_hints_cover_every_action_key() {
        for entry in ACTION_KEYS {
            assert!(
                EDITOR_HINTS.iter().any(|h| h.key == entry.key),
                "{} missing from status bar",
                entry.key
            );
        }
    }
}
