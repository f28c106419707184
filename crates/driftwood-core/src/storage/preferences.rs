//! User preferences storage

use anyhow::Result;
use rusqlite::params;

use super::database::Database;

/// Theme applied when no preference has been saved yet.
pub const DEFAULT_THEME: &str = "riverbed";

/// User preferences manager
pub struct Preferences {
    db: Database,
}

impl Preferences {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Get a preference value
    pub fn get(&self, key: &str) -> Option<String> {
        self.db
            .conn()
            .query_row(
                "SELECT value FROM user_preferences WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .ok()
    }

    /// Set a preference value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.db.conn().execute(
            "INSERT INTO user_preferences (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now'))
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = strftime('%s', 'now')",
            params![key, value],
        )?;
        Ok(())
    }

    /// Delete a preference
    pub fn delete(&self, key: &str) -> Result<()> {
        self.db
            .conn()
            .execute("DELETE FROM user_preferences WHERE key = ?1", params![key])?;
        Ok(())
    }

    /// Get theme name (defaults to "riverbed")
    pub fn get_theme(&self) -> String {
        self.get("theme").unwrap_or_else(|| DEFAULT_THEME.to_string())
    }

    /// Save theme name
    pub fn set_theme(&self, theme: &str) -> Result<()> {
        self.set("theme", theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs() -> (tempfile::TempDir, Preferences) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(&dir.path().join("driftwood.db")).unwrap();
        (dir, Preferences::new(db))
    }

    #[test]
    fn test_theme_round_trip() {
        let (_dir, prefs) = prefs();

        assert_eq!(prefs.get_theme(), DEFAULT_THEME);
        prefs.set_theme("ember").unwrap();
        assert_eq!(prefs.get_theme(), "ember");
    }

    #[test]
    fn test_set_overwrites() {
        let (_dir, prefs) = prefs();
        prefs.set("theme", "kelp").unwrap();
        prefs.set("theme", "midnight").unwrap();
        assert_eq!(prefs.get("theme").as_deref(), Some("midnight"));
    }

    #[test]
    fn test_delete_restores_default() {
        let (_dir, prefs) = prefs();
        prefs.set_theme("ember").unwrap();
        prefs.delete("theme").unwrap();
        assert_eq!(prefs.get_theme(), DEFAULT_THEME);
    }
}
