//! Audio deck state
//!
//! One deck manages playback state for every music card and enforces the
//! single-playing rule: starting one card pauses whichever card was playing.
//! The deck is pure state; it emits [`DeckEvent`]s that the TUI forwards to
//! its playback backend. Section changes never touch the deck, so a track
//! keeps playing when its card scrolls out of view.

use tracing::debug;

/// Playback state of a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

/// Per-card playback bookkeeping.
#[derive(Debug, Clone)]
pub struct CardState {
    pub playback: PlaybackState,
    /// Current position in seconds.
    pub position: f64,
    /// Total duration in seconds; 0.0 when unknown.
    pub duration: f64,
}

impl CardState {
    fn new(duration: f64) -> Self {
        Self {
            playback: PlaybackState::Stopped,
            position: 0.0,
            duration,
        }
    }

    /// Position as a fraction of the duration, for seek bars.
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.position / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// State change the playback backend should mirror.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeckEvent {
    /// Start the card's track from its current position.
    Play { card: usize },
    Pause { card: usize },
    Resume { card: usize },
    Seek { card: usize, position: f64 },
    Mute(bool),
}

/// The audio deck. Exactly zero or one card is playing at any time.
pub struct AudioDeck {
    cards: Vec<CardState>,
    active: Option<usize>,
    muted: bool,
}

impl AudioDeck {
    /// Create a deck over cards with the given track durations (seconds).
    pub fn new(durations: &[f64]) -> Self {
        Self {
            cards: durations.iter().map(|&d| CardState::new(d)).collect(),
            active: None,
            muted: false,
        }
    }

    pub fn card(&self, index: usize) -> Option<&CardState> {
        self.cards.get(index)
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// The card currently playing, if any.
    pub fn playing(&self) -> Option<usize> {
        self.active
            .filter(|&i| self.cards[i].playback == PlaybackState::Playing)
    }

    /// The card that most recently played (possibly paused).
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Toggle the card's playback. Starting a card pauses whichever other
    /// card was playing first. Out-of-range indices are ignored.
    pub fn toggle(&mut self, card: usize) -> Vec<DeckEvent> {
        if card >= self.cards.len() {
            return Vec::new();
        }

        let mut events = Vec::new();

        if self.active == Some(card) {
            let state = &mut self.cards[card];
            match state.playback {
                PlaybackState::Playing => {
                    state.playback = PlaybackState::Paused;
                    events.push(DeckEvent::Pause { card });
                }
                PlaybackState::Paused => {
                    state.playback = PlaybackState::Playing;
                    events.push(DeckEvent::Resume { card });
                }
                PlaybackState::Stopped => {
                    state.playback = PlaybackState::Playing;
                    state.position = 0.0;
                    events.push(DeckEvent::Play { card });
                }
            }
            return events;
        }

        // Single-playing rule: silence the previous card first
        if let Some(previous) = self.active {
            if self.cards[previous].playback == PlaybackState::Playing {
                self.cards[previous].playback = PlaybackState::Paused;
                events.push(DeckEvent::Pause { card: previous });
                debug!(previous, next = card, "switching playing card");
            }
        }

        let state = &mut self.cards[card];
        state.playback = PlaybackState::Playing;
        events.push(DeckEvent::Play { card });
        self.active = Some(card);
        events
    }

    /// Seek within a card: a click fraction over the seek bar maps linearly
    /// onto the track duration. Returns the event when the card exists and
    /// has a known duration.
    pub fn seek_fraction(&mut self, card: usize, fraction: f64) -> Option<DeckEvent> {
        let state = self.cards.get_mut(card)?;
        if state.duration <= 0.0 {
            return None;
        }

        state.position = fraction.clamp(0.0, 1.0) * state.duration;
        Some(DeckEvent::Seek {
            card,
            position: state.position,
        })
    }

    /// Flip the global mute flag. Playback state is unaffected.
    pub fn toggle_mute(&mut self) -> DeckEvent {
        self.muted = !self.muted;
        DeckEvent::Mute(self.muted)
    }

    /// Advance the playing card's position clock. The backend may be absent
    /// (no player binary, no stream URL), so the deck keeps its own time;
    /// a track that reaches its end stops and releases the deck.
    pub fn tick(&mut self, dt: f64) {
        let Some(card) = self.playing() else {
            return;
        };
        let state = &mut self.cards[card];
        state.position += dt;

        if state.duration > 0.0 && state.position >= state.duration {
            state.position = 0.0;
            state.playback = PlaybackState::Stopped;
            self.active = None;
            debug!(card, "track finished");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> AudioDeck {
        AudioDeck::new(&[180.0, 240.0, 200.0])
    }

    #[test]
    fn test_first_toggle_plays() {
        let mut deck = deck();
        let events = deck.toggle(1);

        assert_eq!(events, vec![DeckEvent::Play { card: 1 }]);
        assert_eq!(deck.playing(), Some(1));
    }

    #[test]
    fn test_single_playing_rule() {
        let mut deck = deck();
        deck.toggle(0);
        let events = deck.toggle(2);

        assert_eq!(
            events,
            vec![DeckEvent::Pause { card: 0 }, DeckEvent::Play { card: 2 }]
        );
        assert_eq!(deck.playing(), Some(2));
        assert_eq!(deck.card(0).unwrap().playback, PlaybackState::Paused);
    }

    #[test]
    fn test_toggle_pauses_and_resumes() {
        let mut deck = deck();
        deck.toggle(0);

        let events = deck.toggle(0);
        assert_eq!(events, vec![DeckEvent::Pause { card: 0 }]);
        assert_eq!(deck.playing(), None);
        assert_eq!(deck.active(), Some(0));

        let events = deck.toggle(0);
        assert_eq!(events, vec![DeckEvent::Resume { card: 0 }]);
        assert_eq!(deck.playing(), Some(0));
    }

    #[test]
    fn test_seek_fraction_maps_linearly_and_clamps() {
        let mut deck = deck();

        let event = deck.seek_fraction(0, 0.5);
        assert_eq!(
            event,
            Some(DeckEvent::Seek {
                card: 0,
                position: 90.0
            })
        );

        deck.seek_fraction(0, 7.0);
        assert_eq!(deck.card(0).unwrap().position, 180.0);

        deck.seek_fraction(0, -1.0);
        assert_eq!(deck.card(0).unwrap().position, 0.0);
    }

    #[test]
    fn test_seek_unknown_duration_is_noop() {
        let mut deck = AudioDeck::new(&[0.0]);
        assert_eq!(deck.seek_fraction(0, 0.5), None);
    }

    #[test]
    fn test_mute_does_not_change_playback() {
        let mut deck = deck();
        deck.toggle(1);

        assert_eq!(deck.toggle_mute(), DeckEvent::Mute(true));
        assert_eq!(deck.playing(), Some(1));
        assert_eq!(deck.toggle_mute(), DeckEvent::Mute(false));
    }

    #[test]
    fn test_tick_advances_and_finishes() {
        let mut deck = AudioDeck::new(&[10.0]);
        deck.toggle(0);

        deck.tick(4.0);
        assert_eq!(deck.card(0).unwrap().position, 4.0);

        deck.tick(7.0);
        assert_eq!(deck.playing(), None);
        assert_eq!(deck.card(0).unwrap().playback, PlaybackState::Stopped);
        assert_eq!(deck.card(0).unwrap().position, 0.0);
    }

    #[test]
    fn test_out_of_range_card_is_ignored() {
        let mut deck = deck();
        assert!(deck.toggle(9).is_empty());
        assert_eq!(deck.seek_fraction(9, 0.5), None);
    }
}
