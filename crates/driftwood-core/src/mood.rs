//! Mood of the day
//!
//! A fixed rotation of listening moods, one per weekday slot. The Home
//! section shows the current entry; the accent color tints the mood panel.

use chrono::{Datelike, Local};

use crate::content::Genre;

/// One entry in the mood rotation.
#[derive(Debug, Clone, Copy)]
pub struct Mood {
    pub genre: Genre,
    pub description: &'static str,
    /// Accent color as RGB, applied over whatever theme is active.
    pub accent: (u8, u8, u8),
}

/// The rotation, indexed by weekday modulo its length.
pub const MOODS: [Mood; 4] = [
    Mood {
        genre: Genre::Electronic,
        description: "Feeling energetic and futuristic",
        accent: (0xE6, 0x48, 0x33),
    },
    Mood {
        genre: Genre::Chill,
        description: "Relaxed and peaceful vibes",
        accent: (0x90, 0xAE, 0xAD),
    },
    Mood {
        genre: Genre::Rock,
        description: "Raw energy and power",
        accent: (0x87, 0x4F, 0x41),
    },
    Mood {
        genre: Genre::Ambient,
        description: "Atmospheric and dreamy",
        accent: (0x24, 0x48, 0x55),
    },
];

/// Mood for a weekday, where 0 = Sunday.
pub fn mood_for(weekday_from_sunday: u32) -> &'static Mood {
    &MOODS[weekday_from_sunday as usize % MOODS.len()]
}

/// Mood for the local calendar day.
pub fn todays_mood() -> &'static Mood {
    mood_for(Local::now().weekday().num_days_from_sunday())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_indexing_wraps() {
        assert_eq!(mood_for(0).genre, Genre::Electronic);
        assert_eq!(mood_for(3).genre, Genre::Ambient);
        assert_eq!(mood_for(4).genre, Genre::Electronic);
        assert_eq!(mood_for(6).genre, Genre::Rock);
    }
}
