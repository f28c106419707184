//! Mouse event handlers
//!
//! Wheel deltas are arbitrated by the navigator: at a section boundary
//! they switch sections, otherwise they fall through to in-section
//! scrolling. Left-button press/release pairs classify as clicks (hit
//! tested against the cached layout) or swipes (reduced to touch
//! gestures).

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use driftwood_core::navigator::TouchGesture;

use crate::tui::app::{App, AppHooks};
use crate::tui::state::GestureOutcome;
use crate::tui::utils::contains;

/// Lines scrolled per wheel notch inside a section.
const WHEEL_SCROLL_LINES: usize = 3;

impl App {
    /// Main mouse event dispatcher
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.handle_wheel(1.0),
            MouseEventKind::ScrollUp => self.handle_wheel(-1.0),
            MouseEventKind::Down(MouseButton::Left) => {
                self.gesture.press(mouse.column, mouse.row);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                match self.gesture.release(mouse.column, mouse.row) {
                    Some(GestureOutcome::Click { x, y }) => self.handle_click(x, y),
                    Some(GestureOutcome::Swipe(gesture)) => self.handle_swipe(gesture),
                    None => {}
                }
            }
            _ => {}
        }
    }

    /// Wheel arbitration: section switch at the boundary, in-section
    /// scroll otherwise.
    fn handle_wheel(&mut self, delta: f32) {
        if self.lightbox.is_open() {
            return;
        }

        let (at_top, at_bottom) = {
            let scroll = self.navigator.active_scroll();
            (scroll.at_top(), scroll.at_bottom())
        };

        let mut hooks = AppHooks {
            reveal: &mut self.reveal,
            ornament: &mut self.ornament,
        };
        let outcome = self
            .navigator
            .handle_wheel(delta, at_top, at_bottom, &mut hooks);

        if !outcome.is_consumed() {
            // Native scroll path; the ornament samples the delta
            let scroll = self.navigator.active_scroll_mut();
            if delta > 0.0 {
                scroll.scroll_down(WHEEL_SCROLL_LINES);
            } else {
                scroll.scroll_up(WHEEL_SCROLL_LINES);
            }
            self.ornament.sample(delta);
        }
    }

    fn handle_swipe(&mut self, gesture: TouchGesture) {
        if self.lightbox.is_open() {
            return;
        }

        let (at_top, at_bottom) = {
            let scroll = self.navigator.active_scroll();
            (scroll.at_top(), scroll.at_bottom())
        };

        let mut hooks = AppHooks {
            reveal: &mut self.reveal,
            ornament: &mut self.ornament,
        };
        self.navigator
            .handle_touch(gesture, at_top, at_bottom, &mut hooks);
    }

    /// Hit-test a click against the cached layout, most specific first.
    fn handle_click(&mut self, x: u16, y: u16) {
        if self.lightbox.is_open() {
            self.lightbox.close();
            return;
        }

        if let Some(i) = self.layout.dots.iter().position(|r| contains(*r, x, y)) {
            self.nav_to(i);
            return;
        }
        if let Some(i) = self.layout.menu.iter().position(|r| contains(*r, x, y)) {
            self.nav_to(i);
            return;
        }

        // Content hit tests only apply inside the section body
        if let Some(body) = self.layout.section_body {
            if !contains(body, x, y) {
                return;
            }
        }

        if let Some((filter, _)) = self
            .layout
            .filters
            .iter()
            .find(|(_, r)| contains(*r, x, y))
        {
            self.filter = *filter;
            return;
        }

        // Seek bars sit inside their cards; test them first
        if let Some((card, rect)) = self
            .layout
            .seek_bars
            .iter()
            .copied()
            .find(|(_, r)| contains(*r, x, y))
        {
            let fraction = (x - rect.x) as f64 / rect.width.max(1) as f64;
            let events = self.deck.seek_fraction(card, fraction);
            self.apply_deck_events(events);
            return;
        }

        if let Some((card, _)) = self
            .layout
            .music_cards
            .iter()
            .copied()
            .find(|(_, r)| contains(*r, x, y))
        {
            let events = self.deck.toggle(card);
            self.apply_deck_events(events);
            return;
        }

        if let Some((photo, _)) = self
            .layout
            .photos
            .iter()
            .copied()
            .find(|(_, r)| contains(*r, x, y))
        {
            self.lightbox.open(photo);
        }
    }
}
