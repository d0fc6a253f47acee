//! Block grouping
//!
//! Collapses an edit script into typed blocks, pairs a delete block with an
//! immediately following insert block, and classifies every line of both
//! sides.
//!
//! Pairing is positional (i-th deleted line with i-th inserted line). This
//! is a display heuristic, not a line-level edit-distance alignment: blocks
//! of different lengths may pair unrelated lines.

use std::fmt;

use super::align::{EditOp, OpTag};
use super::annotate::LineClass;

/// A maximal run of edit ops sharing one tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<T> {
    pub tag: OpTag,
    pub lines: Vec<T>,
}

impl<T> Block<T> {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A deleted line and the inserted line it was paired with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangePair<T> {
    /// Line index in the left (original) sequence
    pub left: usize,
    /// Line index in the right (modified) sequence
    pub right: usize,
    pub left_line: T,
    pub right_line: T,
}

/// Change counters; `modified` counts pairs, not characters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

impl DiffStats {
    /// True when nothing changed
    pub fn is_empty(&self) -> bool {
        self.added == 0 && self.removed == 0 && self.modified == 0
    }
}

impl fmt::Display for DiffStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{} -{} ~{}", self.added, self.removed, self.modified)
    }
}

/// Output of [`group`]
#[derive(Debug, Clone)]
pub struct Grouping<T> {
    pub blocks: Vec<Block<T>>,
    pub pairs: Vec<ChangePair<T>>,
    /// Class of every left line, indexed by line
    pub left: Vec<LineClass>,
    /// Class of every right line, indexed by line
    pub right: Vec<LineClass>,
    pub stats: DiffStats,
}

/// Collapse consecutive same-tag ops into blocks
pub fn group_ops<T: Copy>(script: &[EditOp<T>]) -> Vec<Block<T>> {
    let mut blocks: Vec<Block<T>> = Vec::new();
    for op in script {
        match blocks.last_mut() {
            Some(last) if last.tag == op.tag() => last.lines.push(op.value()),
            _ => blocks.push(Block {
                tag: op.tag(),
                lines: vec![op.value()],
            }),
        }
    }
    blocks
}

/// Group an edit script into blocks, change pairs, per-line classes and stats
pub fn group<T: Copy>(script: &[EditOp<T>]) -> Grouping<T> {
    let blocks = group_ops(script);

    // The class vectors double as the running left/right index counters
    let mut left: Vec<LineClass> = Vec::new();
    let mut right: Vec<LineClass> = Vec::new();
    let mut pairs = Vec::new();
    let mut stats = DiffStats::default();

    let mut i = 0;
    while i < blocks.len() {
        let block = &blocks[i];
        match block.tag {
            OpTag::Equal => {
                push_n(&mut left, LineClass::Unchanged, block.len());
                push_n(&mut right, LineClass::Unchanged, block.len());
            }
            OpTag::Delete => {
                if let Some(next) = blocks.get(i + 1).filter(|b| b.tag == OpTag::Insert) {
                    let pair_count = block.len().min(next.len());
                    pairs.extend((0..pair_count).map(|p| ChangePair {
                        left: left.len() + p,
                        right: right.len() + p,
                        left_line: block.lines[p],
                        right_line: next.lines[p],
                    }));

                    push_n(&mut left, LineClass::Modified, pair_count);
                    push_n(&mut right, LineClass::Modified, pair_count);
                    push_n(&mut left, LineClass::Removed, block.len() - pair_count);
                    push_n(&mut right, LineClass::Added, next.len() - pair_count);

                    stats.modified += pair_count;
                    stats.removed += block.len() - pair_count;
                    stats.added += next.len() - pair_count;

                    // The insert block was absorbed by this pairing
                    i += 2;
                    continue;
                }
                push_n(&mut left, LineClass::Removed, block.len());
                stats.removed += block.len();
            }
            OpTag::Insert => {
                push_n(&mut right, LineClass::Added, block.len());
                stats.added += block.len();
            }
        }
        i += 1;
    }

    Grouping {
        blocks,
        pairs,
        left,
        right,
        stats,
    }
}

fn push_n(classes: &mut Vec<LineClass>, class: LineClass, count: usize) {
    classes.extend(std::iter::repeat_n(class, count));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::align::{Algorithm, align};

    fn grouping(a: &[&'static str], b: &[&'static str]) -> Grouping<&'static str> {
        group(&align(a, b, Algorithm::Myers))
    }

    #[test]
    fn test_group_ops_collapses_adjacent_tags() {
        let script = [
            EditOp::Equal("a"),
            EditOp::Equal("b"),
            EditOp::Delete("c"),
            EditOp::Insert("d"),
            EditOp::Insert("e"),
            EditOp::Equal("f"),
        ];
        let blocks = group_ops(&script);
        let shape: Vec<(OpTag, usize)> = blocks.iter().map(|b| (b.tag, b.len())).collect();
        assert_eq!(
            shape,
            vec![
                (OpTag::Equal, 2),
                (OpTag::Delete, 1),
                (OpTag::Insert, 2),
                (OpTag::Equal, 1),
            ]
        );
        assert_eq!(blocks[2].lines, vec!["d", "e"]);
    }

    #[test]
    fn test_group_ops_empty_script() {
        assert!(group_ops::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_identical_sequences_are_unchanged() {
        let g = grouping(&["a", "b", "c"], &["a", "b", "c"]);
        assert_eq!(g.stats, DiffStats::default());
        assert_eq!(g.left, vec![LineClass::Unchanged; 3]);
        assert_eq!(g.right, vec![LineClass::Unchanged; 3]);
        assert!(g.pairs.is_empty());
    }

    #[test]
    fn test_single_insertion_is_added() {
        let g = grouping(&["a", "b"], &["a", "x", "b"]);
        assert_eq!(
            g.stats,
            DiffStats {
                added: 1,
                removed: 0,
                modified: 0
            }
        );
        assert_eq!(
            g.right,
            vec![LineClass::Unchanged, LineClass::Added, LineClass::Unchanged]
        );
        assert_eq!(g.left, vec![LineClass::Unchanged; 2]);
    }

    #[test]
    fn test_disjoint_blocks_pair_as_modified() {
        let g = grouping(&["a", "b", "c"], &["x", "y", "z"]);
        assert_eq!(
            g.stats,
            DiffStats {
                added: 0,
                removed: 0,
                modified: 3
            }
        );
        assert_eq!(g.left, vec![LineClass::Modified; 3]);
        assert_eq!(g.right, vec![LineClass::Modified; 3]);
        let indices: Vec<(usize, usize)> = g.pairs.iter().map(|p| (p.left, p.right)).collect();
        assert_eq!(indices, vec![(0, 0), (1, 1), (2, 2)]);
        assert_eq!(g.pairs[1].left_line, "b");
        assert_eq!(g.pairs[1].right_line, "y");
    }

    #[test]
    fn test_uneven_blocks_leave_removed_and_added() {
        let script = [
            EditOp::Equal("keep"),
            EditOp::Delete("a"),
            EditOp::Delete("b"),
            EditOp::Delete("c"),
            EditOp::Insert("x"),
            EditOp::Equal("end"),
            EditOp::Delete("d"),
            EditOp::Insert("y"),
            EditOp::Insert("z"),
        ];
        let g = group(&script);
        assert_eq!(
            g.stats,
            DiffStats {
                added: 1,
                removed: 2,
                modified: 2
            }
        );
        assert_eq!(
            g.left,
            vec![
                LineClass::Unchanged,
                LineClass::Modified,
                LineClass::Removed,
                LineClass::Removed,
                LineClass::Unchanged,
                LineClass::Modified,
            ]
        );
        assert_eq!(
            g.right,
            vec![
                LineClass::Unchanged,
                LineClass::Modified,
                LineClass::Unchanged,
                LineClass::Modified,
                LineClass::Added,
            ]
        );
        assert_eq!(
            g.pairs,
            vec![
                ChangePair {
                    left: 1,
                    right: 1,
                    left_line: "a",
                    right_line: "x",
                },
                ChangePair {
                    left: 5,
                    right: 3,
                    left_line: "d",
                    right_line: "y",
                },
            ]
        );
    }

    #[test]
    fn test_insert_before_delete_is_not_paired() {
        let script = [EditOp::Insert("x"), EditOp::Delete("a")];
        let g = group(&script);
        assert!(g.pairs.is_empty());
        assert_eq!(
            g.stats,
            DiffStats {
                added: 1,
                removed: 1,
                modified: 0
            }
        );
        assert_eq!(g.left, vec![LineClass::Removed]);
        assert_eq!(g.right, vec![LineClass::Added]);
    }

    #[test]
    fn test_duplicate_line_removed() {
        let g = grouping(&["a", "a"], &["a"]);
        assert_eq!(g.left, vec![LineClass::Unchanged, LineClass::Removed]);
        assert_eq!(g.right, vec![LineClass::Unchanged]);
        assert_eq!(g.stats.removed, 1);
    }

    #[test]
    fn test_index_counters_cover_both_sides() {
        let a = ["1", "2", "3", "4", "5"];
        let b = ["0", "2", "x", "4", "6", "7"];
        let g = grouping(&a, &b);
        assert_eq!(g.left.len(), a.len());
        assert_eq!(g.right.len(), b.len());
    }

    #[test]
    fn test_stats_display() {
        let stats = DiffStats {
            added: 2,
            removed: 1,
            modified: 3,
        };
        assert_eq!(stats.to_string(), "+2 -1 ~3");
        assert!(!stats.is_empty());
        assert!(DiffStats::default().is_empty());
    }
}
