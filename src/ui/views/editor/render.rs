//! Rendering for EditorPane

use ratatui::{
    prelude::*,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthChar;

use crate::engine::{LineAnnotation, LineClass, SideAnnotations};
use crate::model::Side;
use crate::ui::navigation::ScrollOffset;
use crate::ui::{components, symbols, theme};

use super::EditorPane;

/// Expand tabs to the next tab stop, starting at display column `start_col`.
///
/// Returns the expanded text and the column after it.
pub fn expand_tabs(text: &str, start_col: usize, tab_width: usize) -> (String, usize) {
    let tab_width = tab_width.max(1);
    let mut out = String::with_capacity(text.len());
    let mut col = start_col;
    for ch in text.chars() {
        if ch == '\t' {
            let fill = tab_width - col % tab_width;
            out.extend(std::iter::repeat_n(' ', fill));
            col += fill;
        } else {
            out.push(ch);
            col += ch.width().unwrap_or(0);
        }
    }
    (out, col)
}

/// Display width of `text` with tabs expanded from column 0
pub fn display_width(text: &str, tab_width: usize) -> usize {
    expand_tabs(text, 0, tab_width).1
}

/// Gutter width for `line_count` lines: digits plus one space
pub fn gutter_width(line_count: usize) -> usize {
    line_count.max(1).to_string().len() + 1
}

/// Build the styled content of one line.
///
/// Changed lines are padded to `min_width` so their background spans the
/// whole row. The middle of a modified line is emphasized.
pub fn build_content_line(
    line: &str,
    annotation: Option<&LineAnnotation>,
    side: Side,
    tab_width: usize,
    min_width: usize,
) -> Line<'static> {
    let class = annotation.map_or(LineClass::Unchanged, |a| a.class);
    let base = theme::line_style(class);

    let segments: Vec<(&str, Style)> = match annotation.and_then(|a| a.span.as_ref()) {
        Some(span) if class == LineClass::Modified => {
            let (prefix, middle, suffix) = span.split(line);
            let emphasis = base.patch(theme::emphasis_style(side == Side::Left));
            vec![(prefix, base), (middle, emphasis), (suffix, base)]
        }
        _ => vec![(line, base)],
    };

    let mut spans = Vec::with_capacity(segments.len() + 1);
    let mut col = 0;
    for (text, style) in segments {
        if text.is_empty() {
            continue;
        }
        let (expanded, next) = expand_tabs(text, col, tab_width);
        spans.push(Span::styled(expanded, style));
        col = next;
    }

    if class != LineClass::Unchanged && col < min_width {
        spans.push(Span::styled(" ".repeat(min_width - col), base));
    }

    Line::from(spans)
}

impl EditorPane {
    /// Size of the text viewport (rows, columns) inside `area`
    pub fn viewport(&self, area: Rect) -> (usize, usize) {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let gutter = gutter_width(self.lines().len()) as u16;
        (
            inner.height as usize,
            inner.width.saturating_sub(gutter) as usize,
        )
    }

    /// Render the pane with the shared scroll offset
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        annotations: &SideAnnotations,
        scroll: ScrollOffset,
        focused: bool,
    ) {
        let block = self.build_block(focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let gutter = gutter_width(self.lines().len()) as u16;
        let chunks =
            Layout::horizontal([Constraint::Length(gutter), Constraint::Min(0)]).split(inner);
        let (gutter_area, text_area) = (chunks[0], chunks[1]);

        let height = inner.height as usize;
        let min_width = scroll.col + text_area.width as usize;
        let digits = gutter as usize - 1;

        let visible = self.lines().iter().enumerate().skip(scroll.row).take(height);
        let mut gutter_lines = Vec::with_capacity(height);
        let mut text_lines = Vec::with_capacity(height);
        for (row, line) in visible {
            let annotation = annotations.get(row);
            gutter_lines.push(Line::from(Span::styled(
                format!("{:>digits$} ", row + 1),
                theme::gutter_style(annotations.class_at(row)),
            )));
            text_lines.push(build_content_line(
                line,
                annotation,
                self.side,
                self.tab_width(),
                min_width,
            ));
        }

        frame.render_widget(Paragraph::new(gutter_lines), gutter_area);
        frame.render_widget(
            Paragraph::new(text_lines).scroll((0, scroll.col.min(u16::MAX as usize) as u16)),
            text_area,
        );

        if focused {
            let (row, _) = self.cursor();
            let col = self.cursor_display_col();
            let visible_row = row.checked_sub(scroll.row).filter(|r| *r < height);
            let visible_col = col
                .checked_sub(scroll.col)
                .filter(|c| *c < text_area.width as usize);
            if let (Some(r), Some(c)) = (visible_row, visible_col) {
                frame.set_cursor_position((text_area.x + c as u16, text_area.y + r as u16));
            }
        }
    }

    fn build_block(&self, focused: bool) -> Block<'static> {
        components::pane_block(self.side.label(), focused)
            .title_bottom(Line::from(build_footer(&self.stats())).right_aligned())
    }
}

/// Footer text: `Lines: N | Words: W | C chars`
pub(crate) fn build_footer(stats: &crate::text::TextStats) -> String {
    let sep = symbols::markers::SEPARATOR;
    format!(
        " Lines: {}{sep}Words: {}{sep}{} chars ",
        stats.lines, stats.words, stats.chars
    )
}
