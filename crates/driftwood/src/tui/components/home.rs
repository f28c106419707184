//! Home section
//!
//! Hero banner, the mood-of-the-day panel, and a short about blurb. The
//! three blocks participate in the reveal cascade like any card grid.

use driftwood_core::mood::Mood;
use driftwood_core::reveal::{RevealPhase, RevealSchedule};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};

use crate::tui::themes::Theme;
use crate::tui::utils::{draw_frame, put_str};

/// Number of reveal items on the home section.
pub const HOME_ITEMS: usize = 3;

const HERO: [&str; 3] = [
    "≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈",
    "d  r  i  f  t  w  o  o  d",
    "≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈≈",
];

const ABOUT: [&str; 3] = [
    "A quiet corner of the internet: the music I keep coming",
    "back to, photos from slow afternoons, and the games that",
    "ate my weekends. Scroll, or just drift.",
];

/// Total content height in lines for the home section.
pub fn home_lines() -> usize {
    HERO.len() + 2 + 5 + 1 + ABOUT.len() + 2
}

/// Render the home section.
pub fn render_home(
    buf: &mut Buffer,
    body: Rect,
    offset: usize,
    mood: &Mood,
    reveal: &RevealSchedule,
    theme: &Theme,
) {
    let center = |width: u16| body.x + body.width.saturating_sub(width) / 2;
    let mut y = body.y as i32 - offset as i32 + 1;

    // Item 0: hero banner
    if let Some(style) = item_style(reveal, 0, theme, theme.accent_color) {
        for line in HERO {
            let width = line.chars().count() as u16;
            draw_line(buf, body, center(width), y, line, style);
            y += 1;
        }
    } else {
        y += HERO.len() as i32;
    }
    y += 2;

    // Item 1: mood panel
    if let Some(style) = item_style(reveal, 1, theme, theme.text_color) {
        let (r, g, b) = mood.accent;
        let panel_w = 44u16.min(body.width.saturating_sub(2));
        let px = center(panel_w);
        if y >= body.y as i32 && y + 5 <= (body.y + body.height) as i32 {
            let panel = Rect::new(px, y as u16, panel_w, 5);
            draw_frame(buf, panel, Style::default().fg(Color::Rgb(r, g, b)), body);
            put_str(
                buf,
                px + 2,
                y as u16 + 1,
                "TODAY'S MOOD",
                Style::default().fg(theme.dim_color),
                body,
            );
            put_str(
                buf,
                px + 2,
                y as u16 + 2,
                mood.genre.label(),
                Style::default()
                    .fg(Color::Rgb(r, g, b))
                    .add_modifier(Modifier::BOLD),
                body,
            );
            put_str(
                buf,
                px + 2,
                y as u16 + 3,
                mood.description,
                style,
                body,
            );
        }
    }
    y += 6;

    // Item 2: about blurb
    if let Some(style) = item_style(reveal, 2, theme, theme.dim_color) {
        for line in ABOUT {
            let width = line.chars().count() as u16;
            draw_line(buf, body, center(width), y, line, style);
            y += 1;
        }
    }
}

/// Style for a reveal item, or `None` while hidden.
fn item_style(
    reveal: &RevealSchedule,
    item: usize,
    theme: &Theme,
    settled: Color,
) -> Option<Style> {
    match reveal.phase(item) {
        RevealPhase::Hidden => None,
        RevealPhase::Entering(_) => Some(Style::default().fg(theme.dim_color)),
        RevealPhase::Settled => Some(Style::default().fg(settled)),
    }
}

fn draw_line(buf: &mut Buffer, body: Rect, x: u16, y: i32, line: &str, style: Style) {
    if y >= body.y as i32 && y < (body.y + body.height) as i32 {
        put_str(buf, x, y as u16, line, style, body);
    }
}
