//! Footer key hints.

use tfolio_core::Rect;
use tfolio_render::{Cell, Frame};
use tfolio_style::Theme;

/// Rows the footer occupies at the bottom of the screen.
pub const FOOTER_HEIGHT: u16 = 1;

pub fn render(frame: &mut Frame, theme: &Theme) {
    let height = frame.buffer.height();
    if height == 0 {
        return;
    }
    let y = height - 1;
    let bar = Rect::new(0, y, frame.buffer.width(), 1);
    frame.buffer.fill(bar, Cell::blank(theme.surface_style()));
    frame.buffer.set_string(
        1,
        y,
        "t theme  l language  m menu  1-3 jump  j/k scroll  q quit",
        theme.muted_style().bg(theme.surface),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_land_on_last_row() {
        let mut frame = Frame::new(70, 10);
        render(&mut frame, &Theme::dark());
        assert!(frame.buffer.row_text(9).contains("q quit"));
    }
}
