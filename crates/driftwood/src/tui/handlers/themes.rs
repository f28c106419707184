//! Theme management handlers
//!
//! Theme switching and persistence.

use std::sync::Arc;

use crate::tui::app::App;
use crate::tui::themes::THEME_REGISTRY;

impl App {
    /// Set theme and persist to preferences
    pub fn set_theme(&mut self, name: &str) {
        let theme = THEME_REGISTRY.get_or_default(name);
        self.theme = Arc::new(theme.clone());
        self.theme_name = theme.name.clone();

        if let Err(e) = self.preferences.set_theme(&self.theme_name) {
            tracing::warn!("Failed to save theme preference: {}", e);
        }
    }

    /// Step to the next theme in registry order
    pub fn cycle_theme(&mut self) {
        let next = THEME_REGISTRY.cycle_after(&self.theme_name).name.clone();
        self.set_theme(&next);
    }
}
