//! Language selection dropdown.

use tfolio_core::Rect;
use tfolio_render::{Cell, Frame};
use tfolio_style::{Style, Theme};
use unicode_width::UnicodeWidthStr;

use crate::draw_box;

/// One selectable language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangOption {
    /// Code used for the dictionary path and the persisted preference.
    pub code: String,
    /// Human-readable label shown in the dropdown.
    pub label: String,
}

impl LangOption {
    #[must_use]
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

/// Dropdown state: a toggle plus one active option.
///
/// The active marker is moved by [`LangMenu::set_active_code`] only, so it
/// always reflects a confirmed selection rather than an attempted one.
#[derive(Debug, Clone, Default)]
pub struct LangMenu {
    options: Vec<LangOption>,
    open: bool,
    active: Option<usize>,
}

impl LangMenu {
    #[must_use]
    pub fn new(options: Vec<LangOption>) -> Self {
        Self {
            options,
            open: false,
            active: None,
        }
    }

    #[must_use]
    pub fn options(&self) -> &[LangOption] {
        &self.options
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip open/closed; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Mark the option with `code` active; any previous marker is cleared,
    /// so at most one option is active. An unknown code clears the marker.
    pub fn set_active_code(&mut self, code: &str) {
        self.active = self.options.iter().position(|o| o.code == code);
    }

    /// The confirmed selection's code, if any.
    #[must_use]
    pub fn active_code(&self) -> Option<&str> {
        self.active.map(|i| self.options[i].code.as_str())
    }

    /// Where the dropdown unfolds: below `anchor`, right-aligned to it.
    #[must_use]
    pub fn dropdown_rect(&self, anchor: Rect) -> Rect {
        let label_width = self
            .options
            .iter()
            .map(|o| o.label.width())
            .max()
            .unwrap_or(0) as u16;
        let width = label_width + 6;
        let height = self.options.len() as u16 + 2;
        Rect::new(
            anchor.right().saturating_sub(width),
            anchor.bottom(),
            width,
            height,
        )
    }

    /// Map a click inside the open dropdown to an option index.
    #[must_use]
    pub fn hit_option(&self, anchor: Rect, x: u16, y: u16) -> Option<usize> {
        if !self.open {
            return None;
        }
        let rect = self.dropdown_rect(anchor);
        if !rect.contains(x, y) {
            return None;
        }
        let row = y.checked_sub(rect.y + 1)? as usize;
        (row < self.options.len()).then_some(row)
    }

    /// Whether `(x, y)` falls inside the open dropdown.
    #[must_use]
    pub fn contains(&self, anchor: Rect, x: u16, y: u16) -> bool {
        self.open && self.dropdown_rect(anchor).contains(x, y)
    }

    /// Draw the dropdown if open.
    pub fn render(&self, anchor: Rect, frame: &mut Frame, theme: &Theme) {
        if !self.open {
            return;
        }
        let rect = self.dropdown_rect(anchor);
        frame.buffer.fill(rect, Cell::blank(theme.surface_style()));
        draw_box(
            rect,
            frame,
            Style::new().fg(theme.muted).bg(theme.surface),
        );

        for (i, option) in self.options.iter().enumerate() {
            let y = rect.y + 1 + i as u16;
            if y + 1 >= rect.bottom() {
                break;
            }
            let is_active = self.active == Some(i);
            let style = if is_active {
                theme.accent_style().bg(theme.surface)
            } else {
                theme.surface_style()
            };
            let marker = if is_active { "✓ " } else { "  " };
            let x = frame.buffer.set_string(rect.x + 1, y, marker, style);
            frame.buffer.set_string(x, y, &option.label, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> LangMenu {
        LangMenu::new(vec![
            LangOption::new("pt", "Português"),
            LangOption::new("en", "English"),
        ])
    }

    #[test]
    fn starts_closed_with_no_active_option() {
        let m = menu();
        assert!(!m.is_open());
        assert_eq!(m.active_code(), None);
    }

    #[test]
    fn active_marker_is_exclusive() {
        let mut m = menu();
        m.set_active_code("pt");
        assert_eq!(m.active_code(), Some("pt"));
        m.set_active_code("en");
        assert_eq!(m.active_code(), Some("en"));
    }

    #[test]
    fn unknown_code_clears_marker() {
        let mut m = menu();
        m.set_active_code("en");
        m.set_active_code("xx");
        assert_eq!(m.active_code(), None);
    }

    #[test]
    fn hit_option_maps_rows() {
        let anchor = Rect::new(60, 0, 6, 1);
        let mut m = menu();
        let rect = m.dropdown_rect(anchor);

        assert_eq!(m.hit_option(anchor, rect.x + 2, rect.y + 1), None);
        m.toggle();
        assert_eq!(m.hit_option(anchor, rect.x + 2, rect.y + 1), Some(0));
        assert_eq!(m.hit_option(anchor, rect.x + 2, rect.y + 2), Some(1));
        assert_eq!(m.hit_option(anchor, rect.x + 2, rect.y), None);
        assert_eq!(m.hit_option(anchor, 0, 0), None);
    }

    #[test]
    fn dropdown_right_aligns_to_anchor() {
        let anchor = Rect::new(60, 0, 6, 1);
        let m = menu();
        let rect = m.dropdown_rect(anchor);
        assert_eq!(rect.right(), anchor.right());
        assert_eq!(rect.y, anchor.bottom());
        assert_eq!(rect.height, 4);
    }

    #[test]
    fn render_marks_active_option() {
        let anchor = Rect::new(20, 0, 6, 1);
        let mut m = menu();
        m.set_active_code("en");
        m.toggle();
        let mut frame = Frame::new(30, 8);
        m.render(anchor, &mut frame, &Theme::dark());

        let rect = m.dropdown_rect(anchor);
        let first = frame.buffer.row_text(rect.y + 1);
        let second = frame.buffer.row_text(rect.y + 2);
        assert!(first.contains("Português"));
        assert!(!first.contains('✓'));
        assert!(second.contains("English"));
        assert!(second.contains('✓'));
    }
}
