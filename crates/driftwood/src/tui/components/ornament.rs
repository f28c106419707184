//! Decorative ornament
//!
//! A rotating glyph in the corner of the menu bar. Scroll deltas nudge its
//! angular velocity and each section transition gives it a kick; the
//! velocity decays exponentially every tick so the spin visibly winds
//! down.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::tui::themes::Theme;
use crate::tui::utils::put_str;

const FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Velocity added per wheel delta unit.
const SAMPLE_SPIN: f32 = 0.6;

/// Velocity kick on a section transition.
const PULSE_SPIN: f32 = 3.0;

/// Per-tick decay factor.
const DECAY: f32 = 0.92;

/// Idle rotation so the ornament never fully stops.
const IDLE_SPIN: f32 = 0.05;

/// Rotating ornament state.
pub struct Ornament {
    phase: f32,
    velocity: f32,
}

impl Ornament {
    pub fn new() -> Self {
        Self {
            phase: 0.0,
            velocity: 0.0,
        }
    }

    /// Feed a scroll-delta sample (sign only matters for direction).
    pub fn sample(&mut self, delta: f32) {
        self.velocity += delta.signum() * SAMPLE_SPIN;
    }

    /// Transition-started pulse.
    pub fn pulse(&mut self) {
        self.velocity += PULSE_SPIN;
    }

    /// Advance the rotation; returns true while visibly spinning.
    pub fn tick(&mut self) -> bool {
        self.phase += (self.velocity + IDLE_SPIN) * 0.1;
        self.velocity *= DECAY;
        if self.velocity.abs() < 0.01 {
            self.velocity = 0.0;
        }
        self.velocity != 0.0
    }

    fn frame(&self) -> &'static str {
        let len = FRAMES.len() as f32;
        let idx = (self.phase.rem_euclid(len)) as usize;
        FRAMES[idx.min(FRAMES.len() - 1)]
    }

    /// Draw the ornament right-aligned in `area`.
    pub fn render(&self, buf: &mut Buffer, area: Rect, theme: &Theme) {
        if area.width < 2 {
            return;
        }
        let x = area.x + area.width - 2;
        put_str(
            buf,
            x,
            area.y,
            self.frame(),
            Style::default().fg(theme.accent_color),
            area,
        );
    }
}

impl Default for Ornament {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_spins_then_decays() {
        let mut ornament = Ornament::new();
        ornament.pulse();
        assert!(ornament.tick());

        for _ in 0..200 {
            ornament.tick();
        }
        assert!(!ornament.tick());
    }

    #[test]
    fn test_samples_accumulate_velocity() {
        let mut ornament = Ornament::new();
        let before = ornament.phase;
        ornament.sample(3.0);
        ornament.sample(3.0);
        ornament.tick();
        assert!(ornament.phase > before);
    }

    #[test]
    fn test_frame_wraps() {
        let mut ornament = Ornament::new();
        ornament.phase = 17.3;
        // Must index without panicking for any phase
        let _ = ornament.frame();
        ornament.phase = -4.2;
        let _ = ornament.frame();
    }
}
