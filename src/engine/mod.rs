//! Diff engine
//!
//! Pure, synchronous comparison of two line sequences:
//! - `align`: minimal edit script (Myers or LCS table)
//! - `group`: adjacency collapse, delete/insert pairing and statistics
//! - `refine`: common prefix/suffix trim for a paired line
//! - `annotate`: per-side, index-addressable output consumed by renderers
//! - `report`: plain-text rendering of a result
//!
//! Every call allocates its own working state; nothing is shared between runs.

mod align;
mod annotate;
mod group;
mod refine;
pub mod report;

pub use align::{Algorithm, EditOp, OpTag, align};
pub use annotate::{
    DiffResult, LineAnnotation, LineClass, SideAnnotations, compute_diff, compute_diff_with,
};
pub use group::{Block, ChangePair, DiffStats, Grouping, group, group_ops};
pub use refine::{CharSpan, refine};
