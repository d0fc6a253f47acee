//! Reusable UI components
//!
//! Common building blocks for the header, panes and overlays.

pub mod blocks;
pub mod dialog;
pub mod message;

pub use blocks::*;
pub use dialog::{Dialog, DialogKind, DialogResult};
pub use message::*;
