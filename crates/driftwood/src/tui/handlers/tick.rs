//! Animation tick handler
//!
//! Advances every time-driven piece once per loop iteration: the particle
//! field, the ornament spin, the navigator's settle lock, and the deck's
//! position clock.

use std::time::Instant;

use crate::tui::app::App;

impl App {
    /// Tick all animations. Returns true if anything needs a redraw.
    pub(crate) fn tick_animations(&mut self) -> bool {
        let now = Instant::now();
        let dt = now.duration_since(self.last_tick).as_secs_f64();
        self.last_tick = now;
        self.anim_frame = self.anim_frame.wrapping_add(1);

        self.particles.tick();
        self.ornament.tick();
        self.deck.tick(dt);

        if self.navigator.release_if_settled() {
            tracing::trace!("section transition settled");
        }

        // The particle field drifts continuously, so every tick redraws
        true
    }
}
