//! Annotation model
//!
//! Assembles aligner, grouper and refiner output into one immutable result
//! that renderers can address by side and line index.

use super::align::{Algorithm, align};
use super::group::{ChangePair, DiffStats, group};
use super::refine::{CharSpan, refine};
use crate::model::Side;

/// Classification of a single line on one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineClass {
    #[default]
    Unchanged,
    /// Only in the left sequence
    Removed,
    /// Only in the right sequence
    Added,
    /// Paired with a line on the other side
    Modified,
}

impl LineClass {
    /// Single-character marker used by text renderers
    pub fn marker(&self) -> char {
        match self {
            Self::Unchanged => ' ',
            Self::Removed => '-',
            Self::Added => '+',
            Self::Modified => '~',
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unchanged => "unchanged",
            Self::Removed => "removed",
            Self::Added => "added",
            Self::Modified => "modified",
        }
    }
}

/// Annotation of one line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineAnnotation {
    pub class: LineClass,
    /// Present for `Modified` lines whose pair differs
    pub span: Option<CharSpan>,
}

/// Per-line annotations for one side, indexed by line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideAnnotations {
    lines: Vec<LineAnnotation>,
}

impl SideAnnotations {
    fn from_classes(classes: Vec<LineClass>) -> Self {
        Self {
            lines: classes
                .into_iter()
                .map(|class| LineAnnotation { class, span: None })
                .collect(),
        }
    }

    /// Annotation for a line, if the line existed when the result was computed
    pub fn get(&self, index: usize) -> Option<&LineAnnotation> {
        self.lines.get(index)
    }

    /// Class for a line; indices past the end read as `Unchanged`
    pub fn class_at(&self, index: usize) -> LineClass {
        self.get(index).map_or(LineClass::Unchanged, |l| l.class)
    }

    /// Character span for a modified line
    pub fn span_at(&self, index: usize) -> Option<&CharSpan> {
        self.get(index).and_then(|l| l.span.as_ref())
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LineAnnotation> {
        self.lines.iter()
    }

    /// Indices of lines with the given class
    pub fn indices_of(&self, class: LineClass) -> Vec<usize> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.class == class)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Result of one comparison
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    pub left: SideAnnotations,
    pub right: SideAnnotations,
    /// Modified line pairs in script order
    pub pairs: Vec<ChangePair<String>>,
    pub stats: DiffStats,
}

impl DiffResult {
    /// Annotations for one side
    pub fn side(&self, side: Side) -> &SideAnnotations {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// True when both sides are entirely unchanged
    pub fn is_identical(&self) -> bool {
        self.stats.is_empty()
    }
}

/// Compare two line sequences with the default algorithm
pub fn compute_diff<S: AsRef<str>>(left: &[S], right: &[S]) -> DiffResult {
    compute_diff_with(left, right, Algorithm::default())
}

/// Compare two line sequences.
///
/// Lines must already be split and line-ending normalized; they are
/// compared verbatim.
pub fn compute_diff_with<S: AsRef<str>>(
    left: &[S],
    right: &[S],
    algorithm: Algorithm,
) -> DiffResult {
    let left: Vec<&str> = left.iter().map(AsRef::as_ref).collect();
    let right: Vec<&str> = right.iter().map(AsRef::as_ref).collect();

    let script = align(&left, &right, algorithm);
    let grouping = group(&script);

    let mut left_side = SideAnnotations::from_classes(grouping.left);
    let mut right_side = SideAnnotations::from_classes(grouping.right);

    let mut pairs = Vec::with_capacity(grouping.pairs.len());
    for pair in &grouping.pairs {
        let span = refine(pair.left_line, pair.right_line);
        left_side.lines[pair.left].span = span.clone();
        right_side.lines[pair.right].span = span;
        pairs.push(ChangePair {
            left: pair.left,
            right: pair.right,
            left_line: pair.left_line.to_string(),
            right_line: pair.right_line.to_string(),
        });
    }

    DiffResult {
        left: left_side,
        right: right_side,
        pairs,
        stats: grouping.stats,
    }
}
