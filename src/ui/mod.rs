//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Terminal rendering and layout
//! - Theme management
//! - Widget components (content paragraphs and styling)
//! - View rendering (screening form, results, profile editor)

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
pub mod widgets;

pub use render::render;
pub use theme::{ColorSpec, Theme};
