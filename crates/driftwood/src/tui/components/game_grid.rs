//! Games section
//!
//! Full-width game cards: title, wrapped description, and a tag row.

use driftwood_core::content::Game;
use driftwood_core::reveal::{RevealPhase, RevealSchedule};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::tui::themes::Theme;
use crate::tui::utils::{draw_frame, fill_rect, put_str};

const CARD_H: u16 = 6;
const CARD_MAX_W: u16 = 70;

/// Total content height in lines for the games section.
pub fn game_grid_lines(game_count: usize) -> usize {
    (game_count as u16 * (CARD_H + 1)) as usize
}

/// Render the game card list.
pub fn render_game_grid(
    buf: &mut Buffer,
    body: Rect,
    offset: usize,
    games: &[Game],
    reveal: &RevealSchedule,
    theme: &Theme,
) {
    let card_w = body.width.saturating_sub(4).min(CARD_MAX_W);
    let x0 = body.x + body.width.saturating_sub(card_w) / 2;

    for (i, game) in games.iter().enumerate() {
        let (lift, entering) = match reveal.phase(i) {
            RevealPhase::Hidden => continue,
            RevealPhase::Entering(p) => ((((1.0 - p) * 2.0) as u16), true),
            RevealPhase::Settled => (0, false),
        };

        let y = body.y as i32 + (i as u16 * (CARD_H + 1)) as i32 - offset as i32 + lift as i32;
        if y + (CARD_H as i32) < body.y as i32 || y >= (body.y + body.height) as i32 {
            continue;
        }

        let card = Rect::new(x0, y.max(0) as u16, card_w, CARD_H);
        render_card(buf, card, body, game, entering, theme);
    }
}

fn render_card(
    buf: &mut Buffer,
    card: Rect,
    bounds: Rect,
    game: &Game,
    entering: bool,
    theme: &Theme,
) {
    let text_style = if entering {
        Style::default().fg(theme.dim_color)
    } else {
        Style::default().fg(theme.text_color)
    };

    fill_rect(buf, card, Style::default().bg(theme.panel_color), bounds);
    draw_frame(buf, card, Style::default().fg(theme.border_color), bounds);

    let inner_x = card.x + 2;
    let inner_w = card.width.saturating_sub(4) as usize;

    put_str(
        buf,
        inner_x,
        card.y + 1,
        &game.title,
        text_style.add_modifier(Modifier::BOLD),
        bounds,
    );

    for (line_idx, line) in textwrap::wrap(&game.description, inner_w)
        .iter()
        .take(2)
        .enumerate()
    {
        put_str(
            buf,
            inner_x,
            card.y + 2 + line_idx as u16,
            line,
            Style::default().fg(theme.dim_color),
            bounds,
        );
    }

    let mut x = inner_x;
    for tag in &game.tags {
        let label = format!("[{}]", tag);
        x = put_str(
            buf,
            x,
            card.y + 4,
            &label,
            Style::default().fg(theme.accent_color),
            bounds,
        );
        x += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_lines_scale_with_count() {
        assert_eq!(game_grid_lines(0), 0);
        assert_eq!(game_grid_lines(4), (4 * (CARD_H + 1)) as usize);
    }
}
