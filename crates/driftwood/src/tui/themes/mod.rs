//! Theme system
//!
//! A theme is a fixed set of named colors applied across the whole UI.
//! Themes are cycled at runtime and the chosen name is persisted in
//! preferences, so the blog reopens the way it was left.

mod definitions;
mod registry;

use once_cell::sync::Lazy;
use ratatui::style::Color;

pub use registry::ThemeRegistry;

/// Global theme registry with all built-in themes.
pub static THEME_REGISTRY: Lazy<ThemeRegistry> = Lazy::new(ThemeRegistry::new);

/// A named color scheme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Stable identifier used in preferences and on the CLI.
    pub name: String,
    /// Human-readable name shown in the status bar.
    pub display_name: String,

    pub bg_color: Color,
    pub panel_color: Color,
    pub text_color: Color,
    pub dim_color: Color,
    pub accent_color: Color,
    pub border_color: Color,
    pub highlight_color: Color,
}
