//! View components
//!
//! The application has a single screen made of two editor panes.

mod editor;

pub use editor::{
    EditorAction, EditorOptions, EditorPane, build_content_line, display_width, expand_tabs,
    gutter_width,
};
