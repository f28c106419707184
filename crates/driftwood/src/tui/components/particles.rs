//! Particle background
//!
//! A field of slow-drifting particles behind the page content. Particles
//! live in fractional cell coordinates, advance every tick, and bounce off
//! the edges. Content draws over them.

use rand::Rng;
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::tui::themes::Theme;

/// Number of particles in the field.
const PARTICLE_COUNT: usize = 80;

/// Horizontal drift range in cells per tick.
const DRIFT: f32 = 0.15;

#[derive(Debug, Clone)]
struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    /// Size tier 0..3; picks the glyph.
    size: u8,
}

impl Particle {
    fn spawn(rng: &mut impl Rng, width: f32, height: f32) -> Self {
        Self {
            x: rng.gen_range(0.0..width.max(1.0)),
            y: rng.gen_range(0.0..height.max(1.0)),
            vx: rng.gen_range(-DRIFT..DRIFT),
            // Cells are roughly twice as tall as wide; halve vertical drift
            vy: rng.gen_range(-DRIFT..DRIFT) * 0.5,
            size: rng.gen_range(0..3),
        }
    }

    fn glyph(&self) -> char {
        match self.size {
            0 => '·',
            1 => '∙',
            _ => '•',
        }
    }
}

/// The particle field. Sized lazily to the terminal and re-seeded when the
/// terminal is resized.
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
}

impl ParticleField {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
        }
    }

    /// Match the field to the render area, seeding on first use and
    /// re-seeding after a resize.
    pub fn resize(&mut self, area: Rect) {
        let (w, h) = (area.width as f32, area.height as f32);
        if (w - self.width).abs() < f32::EPSILON && (h - self.height).abs() < f32::EPSILON {
            return;
        }

        self.width = w;
        self.height = h;
        let mut rng = rand::thread_rng();
        self.particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::spawn(&mut rng, w, h))
            .collect();
    }

    /// Advance every particle one tick, bouncing at the edges.
    pub fn tick(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;

            if p.x < 0.0 || p.x > self.width {
                p.vx = -p.vx;
                p.x = p.x.clamp(0.0, self.width);
            }
            if p.y < 0.0 || p.y > self.height {
                p.vy = -p.vy;
                p.y = p.y.clamp(0.0, self.height);
            }
        }
    }

    /// Draw the field. Called before any content so text overwrites
    /// particles, never the reverse.
    pub fn render(&self, buf: &mut Buffer, area: Rect, theme: &Theme) {
        let style = Style::default().fg(theme.dim_color);
        for p in &self.particles {
            let x = area.x + (p.x as u16).min(area.width.saturating_sub(1));
            let y = area.y + (p.y as u16).min(area.height.saturating_sub(1));
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(p.glyph()).set_style(style);
            }
        }
    }
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_seeds_field() {
        let mut field = ParticleField::new();
        field.resize(Rect::new(0, 0, 80, 24));
        assert_eq!(field.particles.len(), PARTICLE_COUNT);
    }

    #[test]
    fn test_resize_same_area_keeps_particles() {
        let mut field = ParticleField::new();
        field.resize(Rect::new(0, 0, 80, 24));
        field.tick();
        let positions: Vec<f32> = field.particles.iter().map(|p| p.x).collect();

        field.resize(Rect::new(0, 0, 80, 24));
        let after: Vec<f32> = field.particles.iter().map(|p| p.x).collect();
        assert_eq!(positions, after);
    }

    #[test]
    fn test_particles_stay_in_bounds() {
        let mut field = ParticleField::new();
        field.resize(Rect::new(0, 0, 20, 10));

        for _ in 0..1000 {
            field.tick();
        }
        for p in &field.particles {
            assert!(p.x >= 0.0 && p.x <= 20.0);
            assert!(p.y >= 0.0 && p.y <= 10.0);
        }
    }
}
