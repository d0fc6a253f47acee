//! Reusable UI widgets

mod banner;
mod help_panel;
mod status_bar;

pub use banner::{render_error_banner, render_notification_banner};
pub use help_panel::{build_help_lines, render_help_panel};
pub use status_bar::{StatusContext, build_status_bar, render_status_bar};
