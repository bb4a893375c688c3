#![forbid(unsafe_code)]

//! Core input and geometry types for tfolio.
//!
//! This crate is the bridge between terminal I/O and the page model: the
//! runtime decodes backend events into the normalized [`Event`] type, and
//! everything that draws or hit-tests works in [`Rect`] coordinates.

pub mod event;
pub mod geometry;

pub use event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind};
pub use geometry::{Rect, Size};
