//! Terminal output formatting
//!
//! Row and grid rendering shared by the non-TUI surfaces.

pub mod formatters;

pub use formatters::{colored_row, emoji_grid};
