#![forbid(unsafe_code)]

//! Styling for the tfolio page.
//!
//! Provides:
//! - [`Color`] — ANSI and RGB terminal colors
//! - [`Style`] — fg/bg/attribute builder applied per cell
//! - [`Theme`] — semantic color slots with dark and light variants

pub mod color;
pub mod style;
pub mod theme;

pub use color::{Color, Rgb};
pub use style::{Style, StyleFlags};
pub use theme::{Theme, ThemeMode};
