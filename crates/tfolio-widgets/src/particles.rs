//! Drifting background particles.
//!
//! Pure decoration: particles live in unit space and are mapped to cells at
//! render time, so the field survives resizes without re-seeding.

use rand::Rng;

use tfolio_core::Rect;
use tfolio_render::{Cell, Frame};
use tfolio_style::{Style, Theme};

/// Default particle count, matching the page's backdrop density.
pub const PARTICLE_COUNT: usize = 30;

#[derive(Debug, Clone)]
struct Particle {
    /// Horizontal position in unit space.
    x: f32,
    /// Vertical position in unit space.
    y: f32,
    /// Vertical drift per tick, in unit space.
    speed: f32,
    /// Horizontal sway phase offset.
    phase: f32,
    /// Size tier 0..3, drawn as progressively heavier glyphs.
    size: u8,
    /// Every other particle drifts the opposite way.
    reverse: bool,
}

impl Particle {
    fn glyph(&self) -> &'static str {
        match self.size {
            0 => "·",
            1 => "•",
            _ => "●",
        }
    }
}

/// A fixed set of particles advanced on the shared UI tick.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    tick: u64,
}

impl ParticleField {
    /// Seed `count` particles with random position, speed, phase, and
    /// size; alternating particles drift in reverse.
    pub fn new(count: usize, rng: &mut impl Rng) -> Self {
        let particles = (0..count)
            .map(|i| Particle {
                x: rng.random_range(0.0..1.0),
                y: rng.random_range(0.0..1.0),
                speed: rng.random_range(0.002..0.010),
                phase: rng.random_range(0.0..std::f32::consts::TAU),
                size: rng.random_range(0..3),
                reverse: i % 2 == 0,
            })
            .collect();
        Self { particles, tick: 0 }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Move every particle one step, wrapping at the edges.
    pub fn advance(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        let t = self.tick as f32;
        for p in &mut self.particles {
            let dir = if p.reverse { -1.0 } else { 1.0 };
            p.y = wrap_unit(p.y - dir * p.speed);
            // Gentle horizontal sway around the seeded column.
            p.x = wrap_unit(p.x + (t * 0.05 + p.phase).sin() * 0.0015);
        }
    }

    /// Draw the field into `area`. Content drawn afterwards paints over it.
    pub fn render(&self, area: Rect, frame: &mut Frame, theme: &Theme) {
        if area.is_empty() {
            return;
        }
        let style = Style::new().fg(theme.particle).bg(theme.backdrop);
        for p in &self.particles {
            let x = area.x + (p.x * f32::from(area.width)) as u16;
            let y = area.y + (p.y * f32::from(area.height)) as u16;
            if area.contains(x, y) {
                frame.buffer.set(x, y, Cell::new(p.glyph(), style));
            }
        }
    }
}

fn wrap_unit(v: f32) -> f32 {
    if v < 0.0 {
        v + 1.0
    } else if v >= 1.0 {
        v - 1.0
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn field(count: usize) -> ParticleField {
        let mut rng = StdRng::seed_from_u64(7);
        ParticleField::new(count, &mut rng)
    }

    #[test]
    fn seeds_requested_count() {
        assert_eq!(field(PARTICLE_COUNT).len(), 30);
        assert!(field(0).is_empty());
    }

    #[test]
    fn particles_stay_in_unit_space() {
        let mut f = field(30);
        for _ in 0..500 {
            f.advance();
        }
        for p in &f.particles {
            assert!((0.0..1.0).contains(&p.x), "x out of range: {}", p.x);
            assert!((0.0..1.0).contains(&p.y), "y out of range: {}", p.y);
        }
    }

    #[test]
    fn advance_moves_something() {
        let mut f = field(30);
        let before: Vec<f32> = f.particles.iter().map(|p| p.y).collect();
        f.advance();
        let after: Vec<f32> = f.particles.iter().map(|p| p.y).collect();
        assert_ne!(before, after);
    }

    #[test]
    fn render_stays_inside_area() {
        let f = field(30);
        let mut frame = Frame::new(20, 10);
        let area = Rect::new(5, 2, 10, 6);
        f.render(area, &mut frame, &Theme::dark());
        for y in 0..frame.buffer.height() {
            for x in 0..frame.buffer.width() {
                if !area.contains(x, y) {
                    assert_eq!(frame.buffer.get(x, y).unwrap().content(), " ");
                }
            }
        }
    }

    #[test]
    fn render_into_empty_area_is_noop() {
        let f = field(10);
        let mut frame = Frame::new(4, 4);
        f.render(Rect::default(), &mut frame, &Theme::dark());
        assert_eq!(frame.buffer.row_text(0), "    ");
    }
}
