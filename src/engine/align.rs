//! Sequence alignment
//!
//! Computes a minimal edit script between two token sequences. Tokens are
//! opaque and compared only by equality; for text they are whole lines.
//!
//! Tie-break shared by both strategies, applied walking forward: equal heads
//! are always matched, otherwise A is consumed first whenever a delete still
//! allows a minimal script. Both strategies therefore emit the same script,
//! and fully disjoint inputs produce every delete before every insert.

use serde::{Deserialize, Serialize};

/// Alignment strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Greedy shortest-edit-script search over edit-graph diagonals, O((n+m)·d)
    #[default]
    Myers,
    /// Dynamic-programming LCS table, O(n·m) time and space
    Lcs,
}

impl Algorithm {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Myers => "myers",
            Self::Lcs => "lcs",
        }
    }
}

/// Tag of an edit operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpTag {
    /// Token kept in both sequences
    Equal,
    /// Token only in A
    Delete,
    /// Token only in B
    Insert,
}

/// A single step of an edit script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOp<T> {
    Equal(T),
    Delete(T),
    Insert(T),
}

impl<T: Copy> EditOp<T> {
    pub fn tag(&self) -> OpTag {
        match self {
            Self::Equal(_) => OpTag::Equal,
            Self::Delete(_) => OpTag::Delete,
            Self::Insert(_) => OpTag::Insert,
        }
    }

    pub fn value(&self) -> T {
        match *self {
            Self::Equal(v) | Self::Delete(v) | Self::Insert(v) => v,
        }
    }
}

/// Compute a minimal edit script turning `a` into `b`.
///
/// `Equal` + `Delete` values in script order reproduce `a`; `Equal` + `Insert`
/// values reproduce `b`. The number of non-`Equal` ops is `|a| + |b| - 2·LCS`.
pub fn align<T: PartialEq + Copy>(a: &[T], b: &[T], algorithm: Algorithm) -> Vec<EditOp<T>> {
    match algorithm {
        Algorithm::Myers => myers(a, b),
        Algorithm::Lcs => lcs_table(a, b),
    }
}

// =============================================================================
// Myers shortest edit script
// =============================================================================

fn myers<T: PartialEq + Copy>(a: &[T], b: &[T]) -> Vec<EditOp<T>> {
    if a.is_empty() && b.is_empty() {
        return Vec::new();
    }

    // The reversed search records, per edit budget, how close to the end
    // each diagonal gets
    let rev_a: Vec<T> = a.iter().rev().copied().collect();
    let rev_b: Vec<T> = b.iter().rev().copied().collect();
    let trace = frontiers(&rev_a, &rev_b);
    walk(a, b, &trace)
}

/// Greedy diagonal search from the origin to (n, m).
///
/// `trace[d]` is the window of diagonals `-d..=d` as it stood before round
/// `d`, i.e. the furthest x reachable with at most `d - 1` edits. The last
/// entry belongs to the round that reached the end, so `trace.len() - 1` is
/// the edit distance.
fn frontiers<T: PartialEq>(a: &[T], b: &[T]) -> Vec<Vec<isize>> {
    let n = a.len() as isize;
    let m = b.len() as isize;
    let max = n + m;

    // Furthest x reached on diagonal k (k = x - y), stored at v[k + max]
    let mut v = vec![0isize; 2 * max as usize + 1];
    let mut trace: Vec<Vec<isize>> = Vec::new();

    let mut d: isize = 0;
    loop {
        let lo = (max - d) as usize;
        let hi = (max + d) as usize;
        trace.push(v[lo..=hi].to_vec());

        let mut k = -d;
        while k <= d {
            let idx = (max + k) as usize;
            let mut x = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                v[idx + 1]
            } else {
                v[idx - 1] + 1
            };
            let mut y = x - k;

            while x < n && y < m && a[x as usize] == b[y as usize] {
                x += 1;
                y += 1;
            }
            v[idx] = x;

            if x >= n && y >= m {
                return trace;
            }
            k += 2;
        }
        d += 1;
    }
}

/// Walk forward from the origin, keeping the script minimal at every step.
///
/// Same decisions as the LCS table: match when the heads are equal,
/// otherwise delete whenever the rest still fits in the remaining budget.
/// `trace` comes from searching the reversed inputs.
fn walk<T: PartialEq + Copy>(a: &[T], b: &[T], trace: &[Vec<isize>]) -> Vec<EditOp<T>> {
    let (n, m) = (a.len(), b.len());

    // (i, j) can reach (n, m) with at most `budget` edits. Along a diagonal
    // the cost never drops going outward, so comparing against the furthest
    // reach of the reversed search is enough.
    let reaches = |i: usize, j: usize, budget: usize| -> bool {
        let x = (n - i) as isize;
        let k = x - (m - j) as isize;
        let half = budget as isize + 1;
        if k.abs() > budget as isize {
            return false;
        }
        x <= trace[budget + 1][(k + half) as usize]
    };

    let mut budget = trace.len() - 1;
    let mut ops = Vec::with_capacity(n + m);
    let (mut i, mut j) = (0, 0);
    while i < n || j < m {
        if i < n && j < m && a[i] == b[j] {
            ops.push(EditOp::Equal(a[i]));
            i += 1;
            j += 1;
        } else if j == m || (i < n && reaches(i + 1, j, budget.saturating_sub(1))) {
            ops.push(EditOp::Delete(a[i]));
            i += 1;
            budget = budget.saturating_sub(1);
        } else {
            ops.push(EditOp::Insert(b[j]));
            j += 1;
            budget = budget.saturating_sub(1);
        }
    }
    ops
}

// =============================================================================
// LCS table
// =============================================================================

fn lcs_table<T: PartialEq + Copy>(a: &[T], b: &[T]) -> Vec<EditOp<T>> {
    let n = a.len();
    let m = b.len();
    let width = m + 1;

    // suffix[i * width + j] = LCS length of a[i..] and b[j..]
    let mut suffix = vec![0u32; (n + 1) * width];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            suffix[i * width + j] = if a[i] == b[j] {
                suffix[(i + 1) * width + j + 1] + 1
            } else {
                suffix[(i + 1) * width + j].max(suffix[i * width + j + 1])
            };
        }
    }

    let mut ops = Vec::with_capacity(n + m);
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if a[i] == b[j] {
            ops.push(EditOp::Equal(a[i]));
            i += 1;
            j += 1;
        } else if suffix[(i + 1) * width + j] >= suffix[i * width + j + 1] {
            ops.push(EditOp::Delete(a[i]));
            i += 1;
        } else {
            ops.push(EditOp::Insert(b[j]));
            j += 1;
        }
    }
    ops.extend(a[i..].iter().map(|&t| EditOp::Delete(t)));
    ops.extend(b[j..].iter().map(|&t| EditOp::Insert(t)));
    ops
}
