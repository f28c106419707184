//! Menu and hint bars
//!
//! The top bar carries the site title and the nav menu (one entry per
//! section, active entry highlighted); the bottom bar shows today's mood
//! and the key hints. Menu entry rects are cached for click navigation.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use driftwood_core::mood::Mood;

use crate::tui::state::LayoutState;
use crate::tui::themes::Theme;
use crate::tui::utils::put_str;

/// Section titles in nav order.
pub const SECTION_TITLES: [&str; 4] = ["Home", "Music", "Photos", "Games"];

/// Render the top menu bar and record menu hit rects.
pub fn render_menu_bar(
    buf: &mut Buffer,
    area: Rect,
    current: usize,
    theme: &Theme,
    layout: &mut LayoutState,
) {
    let title_style = Style::default()
        .fg(theme.accent_color)
        .add_modifier(Modifier::BOLD);
    let mut x = put_str(buf, area.x + 2, area.y, "driftwood", title_style, area);
    x += 3;

    for (i, entry) in SECTION_TITLES.iter().enumerate() {
        let style = if i == current {
            Style::default()
                .fg(theme.highlight_color)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.dim_color)
        };

        let start = x;
        x = put_str(buf, x, area.y, entry, style, area);
        layout
            .menu
            .push(Rect::new(start, area.y, x.saturating_sub(start), 1));
        x += 2;
    }
}

/// Render the bottom hint bar with the mood of the day.
pub fn render_hint_bar(buf: &mut Buffer, area: Rect, mood: &Mood, theme_name: &str, theme: &Theme) {
    let (r, g, b) = mood.accent;
    let mood_style = Style::default()
        .fg(ratatui::style::Color::Rgb(r, g, b))
        .add_modifier(Modifier::BOLD);

    let mut x = put_str(
        buf,
        area.x + 2,
        area.y,
        "TODAY'S MOOD ",
        Style::default().fg(theme.dim_color),
        area,
    );
    x = put_str(buf, x, area.y, mood.genre.label(), mood_style, area);
    x = put_str(
        buf,
        x,
        area.y,
        &format!("  {}", mood.description),
        Style::default().fg(theme.dim_color),
        area,
    );

    let hints = format!("[t]heme:{}  [m]ute  [q]uit", theme_name);
    let hx = (area.x + area.width).saturating_sub(hints.len() as u16 + 2);
    if hx > x + 2 {
        put_str(
            buf,
            hx,
            area.y,
            &hints,
            Style::default().fg(theme.dim_color),
            area,
        );
    }
}
