//! Driftwood Core - Shared library for the terminal blog
//!
//! This crate provides everything the TUI needs that does not touch a
//! terminal:
//! - Section navigation state machine
//! - Staggered reveal scheduling for section content
//! - Content catalog (music, photos, games)
//! - Audio deck state (single playing card, seek, mute)
//! - Mood of the day
//! - Preference storage

pub mod audio;
pub mod content;
pub mod mood;
pub mod navigator;
pub mod paths;
pub mod reveal;
pub mod storage;

// Re-exports for convenience
pub use audio::{AudioDeck, DeckEvent, PlaybackState};
pub use content::{Catalog, Game, Genre, GenreFilter, MusicTrack, Photo};
pub use navigator::{
    InputOutcome, NavKey, SectionNavigator, SectionScroll, TouchGesture, TransitionHooks,
    TransitionId,
};
pub use reveal::{RevealPhase, RevealSchedule};
pub use storage::{Database, Preferences};
