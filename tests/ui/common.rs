//! Buffer helpers shared by the UI tests

use ratatui::{Terminal, backend::TestBackend};
use sidediff::app::{App, MemoryClipboard};
use sidediff::config::Settings;

pub fn app() -> App {
    App::with_clipboard(Settings::default(), Box::new(MemoryClipboard::default()))
}

/// Render `app` into a fresh terminal of the given size
pub fn draw(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    terminal
}

/// One row of the buffer as text
pub fn row(terminal: &Terminal<TestBackend>, y: u16) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

/// Whole buffer as text, rows separated by newlines
pub fn screen(terminal: &Terminal<TestBackend>) -> String {
    let height = terminal.backend().buffer().area.height;
    (0..height)
        .map(|y| row(terminal, y))
        .collect::<Vec<_>>()
        .join("\n")
}
