//! Built-in theme definitions

use ratatui::style::Color;

use super::Theme;

fn theme(name: &str, display_name: &str) -> Theme {
    Theme {
        name: name.to_string(),
        display_name: display_name.to_string(),
        bg_color: Color::Reset,
        panel_color: Color::Reset,
        text_color: Color::Reset,
        dim_color: Color::DarkGray,
        accent_color: Color::Cyan,
        border_color: Color::DarkGray,
        highlight_color: Color::White,
    }
}

/// Deep river teal, ember accent, seafoam dims, cream text. Default
/// theme.
pub fn riverbed() -> Theme {
    Theme {
        bg_color: Color::Rgb(0x24, 0x48, 0x55),
        panel_color: Color::Rgb(0x1c, 0x3a, 0x45),
        text_color: Color::Rgb(0xfb, 0xe9, 0xd0),
        dim_color: Color::Rgb(0x90, 0xae, 0xad),
        accent_color: Color::Rgb(0xe6, 0x48, 0x33),
        border_color: Color::Rgb(0x87, 0x4f, 0x41),
        highlight_color: Color::Rgb(0xff, 0xff, 0xff),
        ..theme("riverbed", "Riverbed")
    }
}

/// Warm dark theme built around the ember accent.
pub fn ember() -> Theme {
    Theme {
        bg_color: Color::Rgb(0x1f, 0x16, 0x13),
        panel_color: Color::Rgb(0x2a, 0x1d, 0x18),
        text_color: Color::Rgb(0xf2, 0xe5, 0xd7),
        dim_color: Color::Rgb(0xa8, 0x8a, 0x7a),
        accent_color: Color::Rgb(0xff, 0x6b, 0x4a),
        border_color: Color::Rgb(0x6e, 0x3b, 0x2a),
        highlight_color: Color::Rgb(0xff, 0xd9, 0xc2),
        ..theme("ember", "Ember")
    }
}

/// Green-on-dark, kelp forest feel.
pub fn kelp() -> Theme {
    Theme {
        bg_color: Color::Rgb(0x12, 0x1f, 0x18),
        panel_color: Color::Rgb(0x18, 0x2b, 0x20),
        text_color: Color::Rgb(0xd8, 0xe8, 0xd4),
        dim_color: Color::Rgb(0x6f, 0x9a, 0x7f),
        accent_color: Color::Rgb(0x8f, 0xd6, 0x6b),
        border_color: Color::Rgb(0x3c, 0x5c, 0x46),
        highlight_color: Color::Rgb(0xef, 0xff, 0xe3),
        ..theme("kelp", "Kelp")
    }
}

/// Blue-black night sky.
pub fn midnight() -> Theme {
    Theme {
        bg_color: Color::Rgb(0x10, 0x14, 0x21),
        panel_color: Color::Rgb(0x17, 0x1d, 0x30),
        text_color: Color::Rgb(0xd5, 0xdc, 0xf2),
        dim_color: Color::Rgb(0x6c, 0x78, 0xa0),
        accent_color: Color::Rgb(0x7a, 0xa2, 0xf7),
        border_color: Color::Rgb(0x33, 0x3e, 0x63),
        highlight_color: Color::Rgb(0xc0, 0xca, 0xf5),
        ..theme("midnight", "Midnight")
    }
}

/// Light theme, paper and tide-pool blues.
pub fn tidelight() -> Theme {
    Theme {
        bg_color: Color::Rgb(0xf4, 0xef, 0xe6),
        panel_color: Color::Rgb(0xe8, 0xe0, 0xd2),
        text_color: Color::Rgb(0x2b, 0x33, 0x3b),
        dim_color: Color::Rgb(0x7d, 0x8c, 0x8c),
        accent_color: Color::Rgb(0xc2, 0x41, 0x2d),
        border_color: Color::Rgb(0xa9, 0x99, 0x84),
        highlight_color: Color::Rgb(0x00, 0x00, 0x00),
        ..theme("tidelight", "Tidelight")
    }
}

/// System/Terminal theme - uses native terminal colors.
pub fn terminal() -> Theme {
    theme("terminal", "Terminal")
}
