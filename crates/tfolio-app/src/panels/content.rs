//! Scrollable content: the hero block and the page sections.

use tfolio_core::Rect;
use tfolio_render::Frame;
use tfolio_style::{Style, Theme};

use crate::page::{HERO_HEIGHT, Page};

/// Draw the page into `area`, shifted up by `offset` content rows.
/// Sections that have not yet been revealed render dimmed; the reveal
/// itself is driven by the scroll observer, not by this function.
pub fn render(frame: &mut Frame, area: Rect, page: &Page, typed: &str, offset: u16, theme: &Theme) {
    if area.is_empty() {
        return;
    }

    // Hero block.
    put(frame, area, offset, 1, 2, page.greeting.text(), theme.muted_style());
    put(frame, area, offset, 2, 2, page.name.text(), theme.accent_style());
    let typed_line = format!("› {typed}▌");
    put(frame, area, offset, 3, 2, &typed_line, theme.accent_style());
    debug_assert!(HERO_HEIGHT >= 5);

    // Sections.
    for (i, section) in page.sections.iter().enumerate() {
        let top = page.section_top(i);
        let (title_style, body_style) = if section.revealed {
            (theme.accent_style(), theme.text_style())
        } else {
            (theme.muted_style().dim(), theme.muted_style().dim())
        };

        let title = format!("── {} ", section.title.text());
        put(frame, area, offset, top, 2, &title, title_style);
        for (j, line) in section.body.iter().enumerate() {
            put(
                frame,
                area,
                offset,
                top + 1 + j as u16,
                4,
                line.text(),
                body_style,
            );
        }
    }
}

/// Write one content row at `content_row`, indented by `indent`, if it is
/// inside the viewport after scrolling.
fn put(
    frame: &mut Frame,
    area: Rect,
    offset: u16,
    content_row: u16,
    indent: u16,
    text: &str,
    style: Style,
) {
    if content_row < offset {
        return;
    }
    let screen_row = area.y + (content_row - offset);
    if screen_row >= area.bottom() {
        return;
    }
    frame.buffer.set_string(area.x + indent, screen_row, text, style);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn revealed_page() -> Page {
        let mut page = Page::new();
        for s in &mut page.sections {
            s.revealed = true;
        }
        page
    }

    #[test]
    fn hero_and_first_section_visible_at_top() {
        let page = revealed_page();
        let mut frame = Frame::new(60, 20);
        let area = Rect::new(0, 2, 60, 18);
        render(&mut frame, area, &page, "Eng", 0, &Theme::dark());

        assert!(frame.buffer.row_text(3).contains("Olá, eu sou"));
        assert!(frame.buffer.row_text(5).contains("› Eng▌"));
        let first_title_row = area.y + page.section_top(0);
        assert!(frame.buffer.row_text(first_title_row).contains("Perfil"));
    }

    #[test]
    fn scrolling_moves_content_up() {
        let page = revealed_page();
        let mut frame = Frame::new(60, 20);
        let area = Rect::new(0, 2, 60, 18);
        let offset = page.section_top(1);
        render(&mut frame, area, &page, "", offset, &Theme::dark());

        // The projects title now sits at the top of the content area.
        assert!(frame.buffer.row_text(area.y).contains("Projetos"));
        // The hero has scrolled out entirely.
        assert!(!frame.buffer.row_text(area.y).contains("Olá"));
    }

    #[test]
    fn rows_below_viewport_are_clipped() {
        let page = revealed_page();
        let mut frame = Frame::new(60, 6);
        let area = Rect::new(0, 2, 60, 4);
        render(&mut frame, area, &page, "", 0, &Theme::dark());
        // Contact section lies far below a 4-row viewport.
        for y in 0..6 {
            assert!(!frame.buffer.row_text(y).contains("Contato"));
        }
    }

    #[test]
    fn empty_area_is_noop() {
        let page = revealed_page();
        let mut frame = Frame::new(10, 4);
        render(&mut frame, Rect::default(), &page, "x", 0, &Theme::dark());
        assert_eq!(frame.buffer.row_text(0), "          ");
    }
}
