//! Theme registry for discovering and accessing themes

use std::collections::HashMap;

use driftwood_core::storage::DEFAULT_THEME;

use super::Theme;

/// Registry of all available themes
pub struct ThemeRegistry {
    themes: HashMap<String, Theme>,
    ordered_names: Vec<String>,
}

impl ThemeRegistry {
    /// Create a new registry with all built-in themes
    pub fn new() -> Self {
        let mut registry = Self {
            themes: HashMap::new(),
            ordered_names: Vec::new(),
        };

        use super::definitions::*;

        registry.register(riverbed());
        registry.register(ember());
        registry.register(kelp());
        registry.register(midnight());
        registry.register(tidelight());
        registry.register(terminal());

        registry
    }

    fn register(&mut self, theme: Theme) {
        self.ordered_names.push(theme.name.clone());
        self.themes.insert(theme.name.clone(), theme);
    }

    /// Get a theme by name, or the default theme
    pub fn get_or_default(&self, name: &str) -> &Theme {
        self.themes.get(name).unwrap_or_else(|| {
            self.themes
                .get(DEFAULT_THEME)
                .expect("Default theme must exist")
        })
    }

    /// Whether a theme with this exact name exists
    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// List all themes in registration order
    pub fn list(&self) -> Vec<(&String, &Theme)> {
        self.ordered_names
            .iter()
            .filter_map(|name| self.themes.get(name).map(|theme| (name, theme)))
            .collect()
    }

    /// The theme following `name` in registration order, wrapping at the
    /// end. Unknown names cycle to the first theme.
    pub fn cycle_after(&self, name: &str) -> &Theme {
        let idx = self
            .ordered_names
            .iter()
            .position(|n| n == name)
            .map(|i| (i + 1) % self.ordered_names.len())
            .unwrap_or(0);
        self.get_or_default(&self.ordered_names[idx])
    }

    /// Get the number of registered themes
    pub fn count(&self) -> usize {
        self.themes.len()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_exists() {
        let registry = ThemeRegistry::new();
        assert_eq!(registry.get_or_default("no-such-theme").name, DEFAULT_THEME);
        assert!(registry.contains(DEFAULT_THEME));
    }

    #[test]
    fn test_cycle_visits_every_theme_and_wraps() {
        let registry = ThemeRegistry::new();
        let mut seen = vec![DEFAULT_THEME.to_string()];

        let mut current = DEFAULT_THEME.to_string();
        for _ in 1..registry.count() {
            current = registry.cycle_after(&current).name.clone();
            assert!(!seen.contains(&current), "cycle revisited {}", current);
            seen.push(current.clone());
        }

        assert_eq!(registry.cycle_after(&current).name, DEFAULT_THEME);
    }
}
