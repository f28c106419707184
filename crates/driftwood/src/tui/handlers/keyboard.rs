//! Keyboard event handlers
//!
//! Navigation keys go straight to the navigator and bypass boundary
//! checks; everything else maps to the widget the key belongs to. The
//! lightbox is modal and handled first.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use driftwood_core::navigator::NavKey;

use crate::tui::app::{App, AppHooks, SECTION_MUSIC, SECTION_PHOTOS};

/// Lines moved per j/k press when scrolling inside a section.
const KEY_SCROLL_LINES: usize = 2;

impl App {
    /// Main keyboard event dispatcher
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        if key_event.kind != KeyEventKind::Press && key_event.kind != KeyEventKind::Repeat {
            return;
        }
        let code = key_event.code;
        let modifiers = key_event.modifiers;

        // Ctrl+Q always quits
        if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        // Lightbox is modal - route keys there first
        if self.lightbox.is_open() {
            match code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => self.lightbox.close(),
                KeyCode::Left => self.lightbox.step(-1, self.catalog.photos.len()),
                KeyCode::Right => self.lightbox.step(1, self.catalog.photos.len()),
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('t') => self.cycle_theme(),
            KeyCode::Char('m') => {
                let event = self.deck.toggle_mute();
                self.apply_deck_events([event]);
            }
            KeyCode::Char('f') => self.filter = self.filter.next(),
            KeyCode::Char(' ') => self.toggle_playback(),
            KeyCode::Enter => {
                if self.navigator.current() == SECTION_PHOTOS && !self.catalog.photos.is_empty() {
                    self.lightbox.open(0);
                }
            }

            // In-section scrolling (the keyboard analog of native scroll)
            KeyCode::Char('j') => self.navigator.active_scroll_mut().scroll_down(KEY_SCROLL_LINES),
            KeyCode::Char('k') => self.navigator.active_scroll_mut().scroll_up(KEY_SCROLL_LINES),

            // Direct section jumps, like nav menu links
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if index < self.navigator.section_count() {
                    self.nav_to(index);
                }
            }

            // Section navigation - bypasses boundary checks
            KeyCode::Down => self.forward_nav_key(NavKey::ArrowDown),
            KeyCode::PageDown => self.forward_nav_key(NavKey::PageDown),
            KeyCode::Up => self.forward_nav_key(NavKey::ArrowUp),
            KeyCode::PageUp => self.forward_nav_key(NavKey::PageUp),

            _ => {}
        }
    }

    fn forward_nav_key(&mut self, key: NavKey) {
        let mut hooks = AppHooks {
            reveal: &mut self.reveal,
            ornament: &mut self.ornament,
        };
        self.navigator.handle_key(key, &mut hooks);
    }

    /// Space: pause/resume the active card, or start the first visible
    /// track when nothing has played yet on the music section.
    fn toggle_playback(&mut self) {
        let card = match self.deck.active() {
            Some(card) => Some(card),
            None if self.navigator.current() == SECTION_MUSIC => self
                .catalog
                .filtered_tracks(self.filter)
                .first()
                .map(|(i, _)| *i),
            None => None,
        };

        if let Some(card) = card {
            let events = self.deck.toggle(card);
            self.apply_deck_events(events);
        }
    }
}
