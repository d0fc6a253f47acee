//! sidediff - side-by-side text comparison
//!
//! A line diff engine with character-level refinement of modified lines,
//! and a terminal application that edits two texts and highlights their
//! differences live.
//!
//! This library provides:
//! - [`engine`]: Alignment, block grouping, intra-line refinement and annotations
//! - [`text`]: Line ending normalization and splitting
//! - [`app`]: Application state and logic
//! - [`config`]: Persistent settings
//! - [`document`]: Reading and writing text files
//! - [`logging`]: Tracing subscriber setup
//! - [`keys`]: Key binding definitions
//! - [`model`]: Domain models
//! - [`ui`]: User interface components

pub mod app;
pub mod config;
pub mod document;
pub mod engine;
pub mod keys;
pub mod logging;
pub mod model;
pub mod text;
pub mod ui;
