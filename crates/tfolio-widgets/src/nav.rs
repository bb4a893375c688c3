//! Collapsible section navigation.
//!
//! The nav is a hamburger-toggled overlay listing the page's section
//! anchors. Exactly one link is active at a time, driven by the scroll
//! position; selecting a link closes the overlay.

use tfolio_core::Rect;
use tfolio_render::{Cell, Frame};
use tfolio_style::Theme;
use unicode_width::UnicodeWidthStr;

use crate::draw_box;

/// Navigation overlay state.
#[derive(Debug, Clone, Default)]
pub struct NavMenu {
    labels: Vec<String>,
    open: bool,
    active: usize,
}

impl NavMenu {
    #[must_use]
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            labels,
            open: false,
            active: 0,
        }
    }

    /// Replace the link labels (on language change), keeping the active
    /// index clamped.
    pub fn set_labels(&mut self, labels: Vec<String>) {
        self.labels = labels;
        if self.active >= self.labels.len() {
            self.active = self.labels.len().saturating_sub(1);
        }
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
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

    /// Glyph for the toggle control: close glyph while open.
    #[must_use]
    pub fn toggle_glyph(&self) -> char {
        if self.open { '✕' } else { '☰' }
    }

    /// Mark link `index` as the single active one.
    pub fn set_active(&mut self, index: usize) {
        if index < self.labels.len() {
            self.active = index;
        }
    }

    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    /// Where the overlay sits: top-right of the page, under the header.
    #[must_use]
    pub fn overlay_rect(&self, page: Rect) -> Rect {
        let label_width = self
            .labels
            .iter()
            .map(|l| l.width())
            .max()
            .unwrap_or(0) as u16;
        // "▸ " marker plus one cell of padding each side, plus the border.
        let width = (label_width + 6).min(page.width);
        let height = (self.labels.len() as u16 + 2).min(page.height.saturating_sub(1));
        Rect::new(page.right().saturating_sub(width), page.y + 1, width, height)
    }

    /// Map a click inside the open overlay to a link index.
    #[must_use]
    pub fn hit_link(&self, page: Rect, x: u16, y: u16) -> Option<usize> {
        if !self.open {
            return None;
        }
        let overlay = self.overlay_rect(page);
        if !overlay.contains(x, y) {
            return None;
        }
        let row = y.checked_sub(overlay.y + 1)? as usize;
        (row < self.labels.len()).then_some(row)
    }

    /// Whether `(x, y)` falls inside the open overlay.
    #[must_use]
    pub fn contains(&self, page: Rect, x: u16, y: u16) -> bool {
        self.open && self.overlay_rect(page).contains(x, y)
    }

    /// Draw the overlay if open.
    pub fn render(&self, page: Rect, frame: &mut Frame, theme: &Theme) {
        if !self.open {
            return;
        }
        let overlay = self.overlay_rect(page);
        frame
            .buffer
            .fill(overlay, Cell::blank(theme.surface_style()));
        draw_box(
            overlay,
            frame,
            tfolio_style::Style::new().fg(theme.muted).bg(theme.surface),
        );

        for (i, label) in self.labels.iter().enumerate() {
            let y = overlay.y + 1 + i as u16;
            if y + 1 >= overlay.bottom() {
                break;
            }
            let style = if i == self.active {
                theme.accent_style().bg(theme.surface)
            } else {
                theme.surface_style()
            };
            let marker = if i == self.active { "▸ " } else { "  " };
            let x = frame.buffer.set_string(overlay.x + 1, y, marker, style);
            frame.buffer.set_string(x, y, label, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> NavMenu {
        NavMenu::new(vec![
            "Profile".into(),
            "Projects".into(),
            "Contact".into(),
        ])
    }

    #[test]
    fn toggle_flips_and_close_is_idempotent() {
        let mut nav = menu();
        assert!(!nav.is_open());
        assert!(nav.toggle());
        assert!(!nav.toggle());
        nav.toggle();
        nav.close();
        nav.close();
        assert!(!nav.is_open());
    }

    #[test]
    fn toggle_glyph_tracks_state() {
        let mut nav = menu();
        assert_eq!(nav.toggle_glyph(), '☰');
        nav.toggle();
        assert_eq!(nav.toggle_glyph(), '✕');
    }

    #[test]
    fn exactly_one_active_link() {
        let mut nav = menu();
        nav.set_active(2);
        assert_eq!(nav.active(), 2);
        // Out-of-range is ignored.
        nav.set_active(9);
        assert_eq!(nav.active(), 2);
    }

    #[test]
    fn set_labels_clamps_active() {
        let mut nav = menu();
        nav.set_active(2);
        nav.set_labels(vec!["Perfil".into()]);
        assert_eq!(nav.active(), 0);
        assert_eq!(nav.labels(), ["Perfil".to_string()]);
    }

    #[test]
    fn hit_link_requires_open_overlay() {
        let page = Rect::from_size(80, 24);
        let mut nav = menu();
        let overlay = nav.overlay_rect(page);
        let (x, y) = (overlay.x + 2, overlay.y + 1);

        assert_eq!(nav.hit_link(page, x, y), None);
        nav.toggle();
        assert_eq!(nav.hit_link(page, x, y), Some(0));
        assert_eq!(nav.hit_link(page, x, y + 2), Some(2));
        // Border row is not a link.
        assert_eq!(nav.hit_link(page, x, overlay.y), None);
    }

    #[test]
    fn contains_matches_overlay_only_when_open() {
        let page = Rect::from_size(80, 24);
        let mut nav = menu();
        let overlay = nav.overlay_rect(page);
        assert!(!nav.contains(page, overlay.x, overlay.y));
        nav.toggle();
        assert!(nav.contains(page, overlay.x, overlay.y));
        assert!(!nav.contains(page, 0, 23));
    }

    #[test]
    fn render_draws_labels_when_open() {
        let page = Rect::from_size(40, 12);
        let mut nav = menu();
        let mut frame = Frame::new(40, 12);
        nav.render(page, &mut frame, &Theme::dark());
        assert!(!frame.buffer.row_text(2).contains("Profile"));

        nav.toggle();
        nav.render(page, &mut frame, &Theme::dark());
        assert!(frame.buffer.row_text(2).contains("Profile"));
        assert!(frame.buffer.row_text(4).contains("Contact"));
    }
}
