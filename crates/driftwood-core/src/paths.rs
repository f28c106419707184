//! Platform paths
//!
//! Well-known locations for Driftwood's data. Everything lives under one
//! per-user data directory.

use std::path::PathBuf;

/// Root data directory (`~/.local/share/driftwood` on Linux).
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("driftwood"))
        .unwrap_or_else(|| PathBuf::from(".driftwood"))
}

/// Log file directory.
pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

/// Preferences database.
pub fn preferences_db_path() -> PathBuf {
    data_dir().join("driftwood.db")
}

/// Optional user content catalog.
pub fn catalog_path() -> PathBuf {
    data_dir().join("content.toml")
}
