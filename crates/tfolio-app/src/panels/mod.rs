//! Render panels: header bar, scrollable content, footer hints.

pub mod content;
pub mod footer;
pub mod header;
