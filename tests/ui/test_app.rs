//! Whole-screen rendering tests for the application

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;
use sidediff::keys;
use sidediff::ui::theme;

use crate::common::{app, draw, row, screen};

fn press(app: &mut sidediff::app::App, code: KeyCode) {
    app.on_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

#[test]
fn test_empty_app_layout() {
    let mut app = app();
    let terminal = draw(&mut app, 80, 24);

    assert!(row(&terminal, 0).contains(" sidediff "));
    assert!(row(&terminal, 1).contains("Added: 0 | Removed: 0 | Modified: 0"));
    assert!(row(&terminal, 3).contains("▶ Original"));
    assert!(row(&terminal, 3).contains(" Modified "));
    assert!(row(&terminal, 23).contains("[F1] Help"));
    assert!(row(&terminal, 23).contains("[F3] Samples"));
}

#[test]
fn test_samples_show_counters_and_highlights() {
    let mut app = app();
    press(&mut app, keys::SAMPLES);
    let terminal = draw(&mut app, 80, 24);

    assert!(row(&terminal, 1).contains("Added: 2 | Removed: 0 | Modified: 4"));
    assert!(row(&terminal, 4).contains("Release Notes - v2.3.1"));
    assert!(row(&terminal, 4).contains("Release Notes - v2.4.0"));

    // left pane: border, 3-column gutter, then text; "3" of "v2.3.1"
    let buffer = terminal.backend().buffer();
    let cell = &buffer[(23, 4)];
    assert_eq!(cell.symbol(), "3");
    assert_eq!(cell.bg, theme::editor::REMOVED_EMPHASIS_BG);
    assert_eq!(buffer[(4, 4)].bg, theme::editor::MODIFIED_BG);

    // unchanged "Highlights" line keeps the default background
    assert!(row(&terminal, 6).contains("Highlights"));
    assert_eq!(buffer[(4, 6)].bg, Color::Reset);
}

#[test]
fn test_footer_counts_lines_words_chars() {
    let mut app = app();
    app.load_texts("one two\nthree", "");
    let terminal = draw(&mut app, 80, 24);
    assert!(row(&terminal, 22).contains("Lines: 2 | Words: 3 | 13 chars"));
}

#[test]
fn test_pending_marker_while_debouncing() {
    let mut app = app();
    press(&mut app, KeyCode::Char('x'));
    let terminal = draw(&mut app, 80, 24);
    assert!(row(&terminal, 1).contains("● comparing"));
}

#[test]
fn test_notification_in_header() {
    let mut app = app();
    press(&mut app, keys::CLEAR);
    let terminal = draw(&mut app, 80, 24);
    assert!(row(&terminal, 0).contains("Info: Already empty"));
}

#[test]
fn test_notification_falls_back_to_banner_when_narrow() {
    let mut app = app();
    press(&mut app, keys::CLEAR);
    let terminal = draw(&mut app, 24, 24);
    assert!(!row(&terminal, 0).contains("Info:"));
    assert!(screen(&terminal).contains("Info:"));
}

#[test]
fn test_error_banner() {
    let mut app = app();
    app.error_message = Some("Failed to write out.txt".to_string());
    let terminal = draw(&mut app, 80, 24);
    assert!(row(&terminal, 21).contains("Failed to write out.txt"));
}

#[test]
fn test_help_overlay_replaces_hints() {
    let mut app = app();
    press(&mut app, keys::HELP);
    let terminal = draw(&mut app, 80, 24);
    let text = screen(&terminal);
    assert!(text.contains("sidediff - Help"));
    assert!(row(&terminal, 23).contains("[Esc] Close"));
    assert!(!row(&terminal, 23).contains("[F3] Samples"));
}

#[test]
fn test_legend_overlay() {
    let mut app = app();
    press(&mut app, keys::LEGEND);
    let terminal = draw(&mut app, 80, 24);
    let text = screen(&terminal);
    assert!(text.contains("Diff Legend"));
    assert!(text.contains("modified"));
}

#[test]
fn test_focus_marker_follows_switch() {
    let mut app = app();
    app.on_key_event(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL));
    let terminal = draw(&mut app, 80, 24);
    assert!(!row(&terminal, 3).contains("▶ Original"));
    assert!(row(&terminal, 3).contains("▶ Modified"));
}
