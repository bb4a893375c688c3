#![forbid(unsafe_code)]

//! Interactive widgets for the tfolio page.
//!
//! Widgets are plain state machines plus a `render` method drawing into a
//! [`tfolio_render::Frame`]; none of them talk to the terminal directly, so
//! every behavior here is unit-testable without a TTY.

pub mod lang_menu;
pub mod nav;
pub mod particles;
pub mod typewriter;

pub use lang_menu::{LangMenu, LangOption};
pub use nav::NavMenu;
pub use particles::ParticleField;
pub use typewriter::Typewriter;

use tfolio_core::Rect;
use tfolio_render::{Cell, Frame};
use tfolio_style::Style;

/// Draw a single-line box border around `area`, clipped to the buffer.
pub fn draw_box(area: Rect, frame: &mut Frame, style: Style) {
    if area.width < 2 || area.height < 2 {
        return;
    }
    let (left, top) = (area.x, area.y);
    let (right, bottom) = (area.right() - 1, area.bottom() - 1);
    for x in left + 1..right {
        frame.buffer.set(x, top, Cell::new("─", style));
        frame.buffer.set(x, bottom, Cell::new("─", style));
    }
    for y in top + 1..bottom {
        frame.buffer.set(left, y, Cell::new("│", style));
        frame.buffer.set(right, y, Cell::new("│", style));
    }
    frame.buffer.set(left, top, Cell::new("╭", style));
    frame.buffer.set(right, top, Cell::new("╮", style));
    frame.buffer.set(left, bottom, Cell::new("╰", style));
    frame.buffer.set(right, bottom, Cell::new("╯", style));
}
