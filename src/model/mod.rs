//! Data models for sidediff
//!
//! UI-independent types shared by the engine and the terminal application.

mod notification;
mod sample;
mod side;

pub use notification::{DEFAULT_TTL, Notification, NotificationKind};
pub use sample::{SAMPLE_MODIFIED, SAMPLE_ORIGINAL};
pub use side::Side;
