#![forbid(unsafe_code)]

//! Render kernel for tfolio: a row-major cell [`Buffer`] and the [`Frame`]
//! handed to `Model::view`.
//!
//! Rendering is deliberately simple: views repaint the whole buffer and the
//! runtime presents it in one pass. There is no damage tracking.

pub mod buffer;
pub mod cell;
pub mod frame;

pub use buffer::Buffer;
pub use cell::Cell;
pub use frame::Frame;
