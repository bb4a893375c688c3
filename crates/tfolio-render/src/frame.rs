//! The frame handed to `Model::view`.

use tfolio_core::Rect;

use crate::buffer::Buffer;

/// One frame's worth of output.
///
/// Views draw into `buffer`; the runtime presents it after `view` returns.
#[derive(Debug)]
pub struct Frame {
    pub buffer: Buffer,
}

impl Frame {
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
        }
    }

    /// The full-buffer rect, convenient for layout.
    #[must_use]
    pub fn area(&self) -> Rect {
        self.buffer.area()
    }
}
