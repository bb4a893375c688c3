//! Scroll state: eased anchor scrolling and viewport observation.
//!
//! The scroller keeps a fractional offset easing toward a target each UI
//! tick, which is what makes anchor jumps feel smooth instead of teleporty.
//! Observation (which section is active, which have entered the viewport)
//! is recomputed from the integer offset every tick.

use crate::page::Page;

/// Rows of content kept above an anchored section after a jump, so the
/// section title does not sit flush against the header.
pub const ANCHOR_MARGIN: u16 = 1;

/// Fraction of each easing step covered per tick.
const EASE_FACTOR: f32 = 0.3;
/// Snap distance: below this the animation finishes.
const SNAP_EPSILON: f32 = 0.5;

/// Eased vertical scroll position over the page content.
#[derive(Debug, Clone, Default)]
pub struct Scroller {
    offset: f32,
    target: f32,
}

impl Scroller {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current offset in whole rows.
    #[must_use]
    pub fn offset_rows(&self) -> u16 {
        self.offset.round().max(0.0) as u16
    }

    /// Whether an easing animation is still in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        (self.target - self.offset).abs() >= SNAP_EPSILON
    }

    /// Nudge the target by `delta` rows (wheel / arrow scrolling), clamped
    /// to the scrollable range.
    pub fn scroll_by(&mut self, delta: i32, max_offset: u16) {
        let target = (self.target + delta as f32).clamp(0.0, f32::from(max_offset));
        self.target = target;
    }

    /// Begin a smooth jump so that content row `row` lands just under the
    /// header.
    pub fn scroll_to(&mut self, row: u16, max_offset: u16) {
        let target = f32::from(row.saturating_sub(ANCHOR_MARGIN)).min(f32::from(max_offset));
        self.target = target;
    }

    /// Advance the easing one step. Returns true while still moving.
    pub fn tick(&mut self) -> bool {
        let distance = self.target - self.offset;
        if distance.abs() < SNAP_EPSILON {
            self.offset = self.target;
            return false;
        }
        self.offset += distance * EASE_FACTOR;
        true
    }
}

/// The section under the reading band: the band sits 30% down the
/// viewport, mirroring the original active-link observer margins.
#[must_use]
pub fn active_section(page: &Page, offset: u16, viewport_height: u16) -> usize {
    let band = u32::from(offset) + u32::from(viewport_height) * 3 / 10;
    let mut active = 0;
    for (i, _) in page.sections.iter().enumerate() {
        if u32::from(page.section_top(i)) <= band {
            active = i;
        }
    }
    active
}

/// Mark sections intersecting the viewport as revealed. Reveal is sticky:
/// scrolling away does not hide a section again.
pub fn reveal_visible(page: &mut Page, offset: u16, viewport_height: u16) {
    let view_top = offset;
    let view_bottom = offset.saturating_add(viewport_height);
    for i in 0..page.sections.len() {
        let top = page.section_top(i);
        let bottom = top + page.sections[i].height();
        if top < view_bottom && bottom > view_top {
            page.sections[i].revealed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_converges_and_settles() {
        let mut s = Scroller::new();
        s.scroll_to(20, 100);
        let mut ticks = 0;
        while s.tick() {
            ticks += 1;
            assert!(ticks < 100, "easing never settled");
        }
        assert_eq!(s.offset_rows(), 20 - ANCHOR_MARGIN);
        assert!(!s.is_animating());
    }

    #[test]
    fn scroll_by_clamps_to_range() {
        let mut s = Scroller::new();
        s.scroll_by(-10, 50);
        while s.tick() {}
        assert_eq!(s.offset_rows(), 0);

        s.scroll_by(500, 50);
        while s.tick() {}
        assert_eq!(s.offset_rows(), 50);
    }

    #[test]
    fn anchor_jump_accounts_for_margin() {
        let mut s = Scroller::new();
        s.scroll_to(0, 100);
        while s.tick() {}
        assert_eq!(s.offset_rows(), 0);
    }

    #[test]
    fn active_section_follows_reading_band() {
        let page = Page::new();
        // At the top, the first section is active.
        assert_eq!(active_section(&page, 0, 20), 0);
        // Scrolled to the last section's top, it becomes active.
        let last = page.sections.len() - 1;
        assert_eq!(
            active_section(&page, page.section_top(last), 20),
            last
        );
    }

    #[test]
    fn reveal_is_sticky() {
        let mut page = Page::new();
        reveal_visible(&mut page, 0, 10);
        assert!(page.sections[0].revealed);

        // Scroll to the bottom: earlier reveals persist.
        let bottom = page.total_height();
        reveal_visible(&mut page, bottom, 10);
        assert!(page.sections[0].revealed);
    }

    #[test]
    fn offscreen_sections_stay_hidden() {
        let mut page = Page::new();
        // A one-row viewport at the very top only intersects the hero.
        reveal_visible(&mut page, 0, 1);
        assert!(!page.sections[2].revealed);
    }
}
