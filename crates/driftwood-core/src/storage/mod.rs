//! Persistence layer
//!
//! SQLite-based storage for user preferences (currently the selected
//! theme). Read once at startup, written on change.

mod database;
mod preferences;

pub use database::Database;
pub use preferences::{Preferences, DEFAULT_THEME};
