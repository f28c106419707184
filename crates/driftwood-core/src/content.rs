//! Content catalog
//!
//! The blog's static content: music tracks, photos, and games. A built-in
//! catalog ships with the binary; a `content.toml` in the data directory
//! replaces it wholesale. A malformed file is a startup error, not a
//! per-render one.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Music genres used for mood and card filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Electronic,
    Chill,
    Rock,
    Ambient,
}

impl Genre {
    pub const ALL: [Genre; 4] = [Genre::Electronic, Genre::Chill, Genre::Rock, Genre::Ambient];

    /// Uppercase label as shown on cards and filter buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Genre::Electronic => "ELECTRONIC",
            Genre::Chill => "CHILL",
            Genre::Rock => "ROCK",
            Genre::Ambient => "AMBIENT",
        }
    }
}

/// Active music-grid filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenreFilter {
    #[default]
    All,
    Only(Genre),
}

impl GenreFilter {
    pub fn matches(&self, genre: Genre) -> bool {
        match self {
            GenreFilter::All => true,
            GenreFilter::Only(g) => *g == genre,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GenreFilter::All => "ALL",
            GenreFilter::Only(g) => g.label(),
        }
    }

    /// Next filter in display order (ALL, then each genre, wrapping).
    pub fn next(&self) -> GenreFilter {
        match self {
            GenreFilter::All => GenreFilter::Only(Genre::ALL[0]),
            GenreFilter::Only(g) => {
                let idx = Genre::ALL.iter().position(|x| x == g).unwrap_or(0);
                match Genre::ALL.get(idx + 1) {
                    Some(next) => GenreFilter::Only(*next),
                    None => GenreFilter::All,
                }
            }
        }
    }
}

/// A music card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MusicTrack {
    pub title: String,
    pub genre: Genre,
    /// Track length in seconds; drives the seek bar.
    #[serde(default)]
    pub duration_secs: f64,
    /// Optional playable source for the audio backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_url: Option<String>,
}

/// A photo card; the tile itself is rendered procedurally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub caption: String,
}

/// A game card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Everything the content sections show.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub tracks: Vec<MusicTrack>,
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub games: Vec<Game>,
}

/// Catalog loading failure; surfaced once at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Catalog {
    /// Load a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the user's catalog when one exists, otherwise the built-in
    /// default. A present-but-malformed file is an error.
    pub fn load_or_default(path: &Path) -> Result<Self, CatalogError> {
        if path.exists() {
            info!(path = %path.display(), "loading user catalog");
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Tracks matching the filter, with their deck indices preserved.
    pub fn filtered_tracks(&self, filter: GenreFilter) -> Vec<(usize, &MusicTrack)> {
        self.tracks
            .iter()
            .enumerate()
            .filter(|(_, t)| filter.matches(t.genre))
            .collect()
    }

    /// Track durations in deck order.
    pub fn durations(&self) -> Vec<f64> {
        self.tracks.iter().map(|t| t.duration_secs).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let track = |title: &str, genre, duration_secs: f64| MusicTrack {
            title: title.to_string(),
            genre,
            duration_secs,
            stream_url: None,
        };
        let photo = |caption: &str| Photo {
            caption: caption.to_string(),
        };
        let game = |title: &str, description: &str, tags: &[&str]| Game {
            title: title.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        };

        Self {
            tracks: vec![
                MusicTrack {
                    title: "Ascending: Rising Global Artists".to_string(),
                    genre: Genre::Electronic,
                    duration_secs: 312.0,
                    stream_url: Some(
                        "https://api.soundcloud.com/playlists/1692024463".to_string(),
                    ),
                },
                track("Chill Waves", Genre::Chill, 214.0),
                track("Rock Energy", Genre::Rock, 187.0),
                track("Ambient Dreams", Genre::Ambient, 265.0),
                track("Deep House", Genre::Electronic, 243.0),
                track("Lofi Study", Genre::Chill, 198.0),
                track("Indie Rock", Genre::Rock, 176.0),
                track("Space Ambient", Genre::Ambient, 331.0),
            ],
            photos: vec![
                photo("Sunset Vibes"),
                photo("Ocean Dreams"),
                photo("Mountain Peak"),
                photo("City Lights"),
                photo("Abstract Art"),
                photo("Flowing Lines"),
            ],
            games: vec![
                game(
                    "Epic Adventure",
                    "An epic journey through mystical lands filled with wonder and danger.",
                    &["RPG", "Adventure", "Fantasy"],
                ),
                game(
                    "Cyber Future",
                    "A futuristic cyberpunk world where technology meets humanity.",
                    &["Action", "Sci-Fi", "Open World"],
                ),
                game(
                    "Retro Warriors",
                    "Classic retro-style combat with modern mechanics.",
                    &["Platformer", "Retro", "Action"],
                ),
                game(
                    "Strategy Master",
                    "Build your empire and conquer the world.",
                    &["Strategy", "Simulation", "War"],
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_shape() {
        let catalog = Catalog::default();
        assert_eq!(catalog.tracks.len(), 8);
        assert_eq!(catalog.photos.len(), 6);
        assert_eq!(catalog.games.len(), 4);
    }

    #[test]
    fn test_genre_filter_preserves_indices() {
        let catalog = Catalog::default();
        let chill = catalog.filtered_tracks(GenreFilter::Only(Genre::Chill));

        assert_eq!(chill.len(), 2);
        assert_eq!(chill[0].0, 1);
        assert_eq!(chill[1].0, 5);
        assert_eq!(
            catalog.filtered_tracks(GenreFilter::All).len(),
            catalog.tracks.len()
        );
    }

    #[test]
    fn test_filter_cycle_wraps() {
        let mut filter = GenreFilter::All;
        for _ in 0..Genre::ALL.len() {
            filter = filter.next();
            assert_ne!(filter, GenreFilter::All);
        }
        assert_eq!(filter.next(), GenreFilter::All);
    }

    #[test]
    fn test_catalog_parses_from_toml() {
        let raw = r#"
            [[tracks]]
            title = "Night Drive"
            genre = "electronic"
            duration_secs = 205.0

            [[photos]]
            caption = "Harbor Fog"

            [[games]]
            title = "Tide Runner"
            description = "Race the waves."
            tags = ["Arcade"]
        "#;
        let catalog: Catalog = toml::from_str(raw).unwrap();

        assert_eq!(catalog.tracks[0].genre, Genre::Electronic);
        assert_eq!(catalog.tracks[0].stream_url, None);
        assert_eq!(catalog.photos[0].caption, "Harbor Fog");
        assert_eq!(catalog.games[0].tags, vec!["Arcade"]);
    }

    #[test]
    fn test_unknown_genre_fails_parse() {
        let raw = r#"
            [[tracks]]
            title = "Oops"
            genre = "polka"
        "#;
        assert!(toml::from_str::<Catalog>(raw).is_err());
    }

    #[test]
    fn test_load_or_default_falls_back_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.toml");

        let catalog = Catalog::load_or_default(&path).unwrap();
        assert_eq!(catalog.tracks.len(), 8);
    }

    #[test]
    fn test_load_or_default_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.toml");
        std::fs::write(&path, "not really toml [[").unwrap();

        assert!(matches!(
            Catalog::load_or_default(&path),
            Err(CatalogError::Parse { .. })
        ));
    }
}
