//! Application module
//!
//! Contains the main application state and logic, split into:
//! - `state`: App struct, comparison and idle processing
//! - `input`: Key event handling
//! - `actions`: Pane actions and notifications
//! - `render`: UI rendering
//! - `scheduler`: Debounce timer for recomputation
//! - `clipboard`: Clipboard seam

mod actions;
mod clipboard;
mod input;
mod render;
mod scheduler;
mod state;

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, SystemClipboard};
pub use scheduler::CompareScheduler;
pub use state::{App, IDLE_TICK};
