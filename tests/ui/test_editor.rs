//! Rendering tests for a single editor pane

use ratatui::{Terminal, backend::TestBackend, layout::Rect};
use sidediff::engine::{SideAnnotations, compute_diff};
use sidediff::model::Side;
use sidediff::ui::navigation::ScrollOffset;
use sidediff::ui::theme;
use sidediff::ui::views::{EditorOptions, EditorPane};

use crate::common::row;

fn render_pane(
    pane: &EditorPane,
    annotations: &SideAnnotations,
    scroll: ScrollOffset,
    width: u16,
    height: u16,
) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| {
            let area = Rect::new(0, 0, width, height);
            pane.render(frame, area, annotations, scroll, true);
        })
        .unwrap();
    terminal
}

#[test]
fn test_gutter_numbers_right_aligned() {
    let text: Vec<String> = (1..=10).map(|i| format!("line {i}")).collect();
    let pane = EditorPane::new(Side::Left, &text.join("\n"), EditorOptions::default());
    let terminal = render_pane(&pane, &SideAnnotations::default(), ScrollOffset::default(), 30, 14);

    assert!(row(&terminal, 1).starts_with("│ 1 line 1"));
    assert!(row(&terminal, 10).starts_with("│10 line 10"));
}

#[test]
fn test_tabs_expand_to_stops() {
    let pane = EditorPane::new(Side::Left, "\tx\nab\ty", EditorOptions::default());
    let terminal = render_pane(&pane, &SideAnnotations::default(), ScrollOffset::default(), 20, 5);

    assert!(row(&terminal, 1).starts_with("│1     x"));
    assert!(row(&terminal, 2).starts_with("│2 ab  y"));
}

#[test]
fn test_vertical_scroll_skips_lines() {
    let text: Vec<String> = (1..=20).map(|i| format!("l{i}")).collect();
    let pane = EditorPane::new(Side::Right, &text.join("\n"), EditorOptions::default());
    let scroll = ScrollOffset { row: 5, col: 0 };
    let terminal = render_pane(&pane, &SideAnnotations::default(), scroll, 20, 6);

    assert!(row(&terminal, 1).starts_with("│ 6 l6"));
}

#[test]
fn test_horizontal_scroll_shifts_text() {
    let pane = EditorPane::new(Side::Left, "abcdefgh", EditorOptions::default());
    let scroll = ScrollOffset { row: 0, col: 3 };
    let terminal = render_pane(&pane, &SideAnnotations::default(), scroll, 20, 3);

    assert!(row(&terminal, 1).starts_with("│1 defgh"));
}

#[test]
fn test_added_line_background_fills_row() {
    let left = ["same"];
    let right = ["same", "new"];
    let result = compute_diff(&left, &right);
    let pane = EditorPane::new(Side::Right, "same\nnew", EditorOptions::default());
    let terminal = render_pane(&pane, &result.right, ScrollOffset::default(), 20, 5);

    let buffer = terminal.backend().buffer();
    // text starts after the border and a 2-column gutter
    assert_eq!(buffer[(3, 1)].bg, ratatui::style::Color::Reset);
    assert_eq!(buffer[(3, 2)].bg, theme::editor::ADDED_BG);
    assert_eq!(buffer[(18, 2)].bg, theme::editor::ADDED_BG);
    assert_eq!(buffer[(1, 2)].fg, theme::editor::GUTTER_ADDED);
}

#[test]
fn test_cursor_placed_in_focused_pane() {
    let pane = EditorPane::new(Side::Left, "\tab", EditorOptions::default());
    let mut terminal = Terminal::new(TestBackend::new(20, 4)).unwrap();
    terminal
        .draw(|frame| {
            pane.render(
                frame,
                frame.area(),
                &SideAnnotations::default(),
                ScrollOffset::default(),
                true,
            );
        })
        .unwrap();

    // border (1) + gutter (2), cursor at the start of the first line
    terminal.backend_mut().assert_cursor_position((3, 1));
}
