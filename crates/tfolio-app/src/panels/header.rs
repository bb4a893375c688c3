//! The pinned header bar: page title plus the three toggle controls.
//!
//! Layout is a pure function of the width so that rendering and mouse
//! hit-testing can never disagree about where a control sits.

use tfolio_core::Rect;
use tfolio_render::{Cell, Frame};
use tfolio_style::Theme;
use tfolio_widgets::{LangMenu, NavMenu};

/// Rows the header occupies at the top of the screen.
pub const HEADER_HEIGHT: u16 = 2;

const THEME_BTN_WIDTH: u16 = 3; // [☀]
const LANG_BTN_WIDTH: u16 = 6; // [PT ▾]
const MENU_BTN_WIDTH: u16 = 3; // [☰]
const GAP: u16 = 1;

/// Clickable control rects, right-aligned on the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLayout {
    pub theme_btn: Rect,
    pub lang_btn: Rect,
    pub menu_btn: Rect,
}

/// Compute control positions for a terminal `width`.
#[must_use]
pub fn layout(width: u16) -> HeaderLayout {
    let menu_x = width.saturating_sub(MENU_BTN_WIDTH + GAP);
    let lang_x = menu_x.saturating_sub(LANG_BTN_WIDTH + GAP);
    let theme_x = lang_x.saturating_sub(THEME_BTN_WIDTH + GAP);
    HeaderLayout {
        theme_btn: Rect::new(theme_x, 0, THEME_BTN_WIDTH, 1),
        lang_btn: Rect::new(lang_x, 0, LANG_BTN_WIDTH, 1),
        menu_btn: Rect::new(menu_x, 0, MENU_BTN_WIDTH, 1),
    }
}

pub fn render(
    frame: &mut Frame,
    theme: &Theme,
    language: &str,
    nav: &NavMenu,
    lang_menu: &LangMenu,
) {
    let width = frame.buffer.width();
    let bar = Rect::new(0, 0, width, 1);
    frame.buffer.fill(bar, Cell::blank(theme.surface_style()));
    frame
        .buffer
        .set_string(1, 0, "tfolio", theme.accent_style().bg(theme.surface));

    let controls = layout(width);
    let button_style = theme.surface_style();
    let open_style = theme.accent_style().bg(theme.surface);

    frame.buffer.set_string(
        controls.theme_btn.x,
        0,
        &format!("[{}]", theme.mode.toggle_glyph()),
        button_style,
    );
    frame.buffer.set_string(
        controls.lang_btn.x,
        0,
        &format!("[{} ▾]", language.to_uppercase()),
        if lang_menu.is_open() { open_style } else { button_style },
    );
    frame.buffer.set_string(
        controls.menu_btn.x,
        0,
        &format!("[{}]", nav.toggle_glyph()),
        if nav.is_open() { open_style } else { button_style },
    );

    // Separator under the bar.
    for x in 0..width {
        frame
            .buffer
            .set(x, 1, Cell::new("─", theme.muted_style()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_are_right_aligned_without_overlap() {
        let l = layout(80);
        assert!(l.theme_btn.right() < l.lang_btn.x);
        assert!(l.lang_btn.right() < l.menu_btn.x);
        assert_eq!(l.menu_btn.right() + GAP, 80);
    }

    #[test]
    fn layout_is_stable_for_narrow_widths() {
        // Degenerate widths must not panic; rects just collapse leftward.
        let l = layout(4);
        assert!(l.theme_btn.x <= l.lang_btn.x);
    }

    #[test]
    fn render_draws_title_and_buttons() {
        let mut frame = Frame::new(60, 4);
        let nav = NavMenu::new(vec!["Profile".into()]);
        let lang = LangMenu::default();
        render(&mut frame, &Theme::dark(), "pt", &nav, &lang);

        let row = frame.buffer.row_text(0);
        assert!(row.contains("tfolio"));
        assert!(row.contains("[PT ▾]"));
        assert!(row.contains('☰'));
    }
}
