//! Photo lightbox
//!
//! Modal viewer for a single photo. Opening and closing are visibility
//! toggles with a fixed fade; while open, all input routes here first and
//! the page underneath keeps its scroll position for when the lightbox
//! closes.

use std::time::{Duration, Instant};

use driftwood_core::content::Photo;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::tui::components::render_photo_tile;
use crate::tui::themes::Theme;
use crate::tui::utils::{fill_rect, put_str};

/// Fixed fade-in duration.
const FADE: Duration = Duration::from_millis(300);

/// Lightbox state.
pub struct Lightbox {
    /// Open photo index, if visible.
    current: Option<usize>,
    opened_at: Instant,
}

impl Lightbox {
    pub fn new() -> Self {
        Self {
            current: None,
            opened_at: Instant::now(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Open on a photo. Re-opening on another index restarts the fade.
    pub fn open(&mut self, index: usize) {
        self.current = Some(index);
        self.opened_at = Instant::now();
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    /// Step to the next/previous photo, clamped to the collection.
    pub fn step(&mut self, delta: i32, photo_count: usize) {
        if let Some(current) = self.current {
            let next = current as i32 + delta;
            if next >= 0 && (next as usize) < photo_count {
                self.current = Some(next as usize);
            }
        }
    }

    fn fade_progress(&self) -> f32 {
        (self.opened_at.elapsed().as_secs_f32() / FADE.as_secs_f32()).min(1.0)
    }

    /// Render the modal over the page.
    pub fn render(&self, buf: &mut Buffer, area: Rect, photos: &[Photo], theme: &Theme) {
        let Some(index) = self.current() else {
            return;
        };
        let Some(photo) = photos.get(index) else {
            return;
        };
        if area.width < 24 || area.height < 10 {
            return;
        }

        // Fade approximated by growing the frame toward its full size
        let progress = self.fade_progress();
        let full_w = area.width.saturating_sub(10).min(56).max(20);
        let full_h = area.height.saturating_sub(6).min(20).max(8);
        let w = ((full_w as f32 * (0.7 + 0.3 * progress)) as u16).min(full_w);
        let h = ((full_h as f32 * (0.7 + 0.3 * progress)) as u16).min(full_h);

        let modal = Rect::new(
            area.x + (area.width - w) / 2,
            area.y + (area.height - h) / 2,
            w,
            h,
        );

        fill_rect(buf, modal, Style::default().bg(theme.panel_color), area);
        render_photo_tile(buf, modal, area, index, photo, progress < 1.0, theme);

        let counter = format!(" {}/{} ", index + 1, photos.len());
        put_str(
            buf,
            modal.x + modal.width.saturating_sub(counter.len() as u16 + 1),
            modal.y,
            &counter,
            Style::default().fg(theme.dim_color).bg(theme.panel_color),
            area,
        );
        put_str(
            buf,
            modal.x + 2,
            modal.y + modal.height.saturating_sub(1),
            " ←/→ browse · Esc close ",
            Style::default()
                .fg(theme.dim_color)
                .bg(theme.panel_color)
                .add_modifier(Modifier::DIM),
            area,
        );
    }
}

impl Default for Lightbox {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close_toggle() {
        let mut lightbox = Lightbox::new();
        assert!(!lightbox.is_open());

        lightbox.open(2);
        assert!(lightbox.is_open());
        assert_eq!(lightbox.current(), Some(2));

        lightbox.close();
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_step_clamps_to_collection() {
        let mut lightbox = Lightbox::new();
        lightbox.open(0);

        lightbox.step(-1, 6);
        assert_eq!(lightbox.current(), Some(0));

        lightbox.step(1, 6);
        assert_eq!(lightbox.current(), Some(1));

        lightbox.open(5);
        lightbox.step(1, 6);
        assert_eq!(lightbox.current(), Some(5));
    }

    #[test]
    fn test_step_when_closed_is_noop() {
        let mut lightbox = Lightbox::new();
        lightbox.step(1, 6);
        assert_eq!(lightbox.current(), None);
    }
}
