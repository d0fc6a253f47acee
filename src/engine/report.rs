//! Plain-text report
//!
//! Renders a [`DiffResult`] without a terminal UI: one section per side,
//! one row per line with a class marker and line number, the differing
//! middle of modified lines wrapped in brackets, and a closing stats row.

use std::fmt::Write;

use super::annotate::{DiffResult, LineClass};
use crate::model::Side;

/// Opening bracket around a modified middle
pub const MIDDLE_OPEN: char = '[';
/// Closing bracket around a modified middle
pub const MIDDLE_CLOSE: char = ']';

/// Render a report for `result` computed from `left` and `right`
pub fn render_report<S: AsRef<str>>(
    result: &DiffResult,
    left: &[S],
    right: &[S],
    left_name: &str,
    right_name: &str,
) -> String {
    let width = left.len().max(right.len()).max(1).to_string().len();
    let mut out = String::new();

    let _ = writeln!(out, "--- {left_name}");
    render_side(&mut out, result, Side::Left, left, width);
    let _ = writeln!(out, "+++ {right_name}");
    render_side(&mut out, result, Side::Right, right, width);
    let _ = write!(out, "stats: {}", result.stats);

    out
}

fn render_side<S: AsRef<str>>(
    out: &mut String,
    result: &DiffResult,
    side: Side,
    lines: &[S],
    width: usize,
) {
    let annotations = result.side(side);
    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let class = annotations.class_at(index);

        let text = match annotations.span_at(index) {
            Some(span) if class == LineClass::Modified => {
                let (prefix, middle, suffix) = span.split(line);
                format!("{prefix}{MIDDLE_OPEN}{middle}{MIDDLE_CLOSE}{suffix}")
            }
            _ => line.to_string(),
        };

        let _ = write!(out, "{} {:>width$}", class.marker(), index + 1);
        if !text.is_empty() {
            let _ = write!(out, " {text}");
        }
        out.push('\n');
    }
}
