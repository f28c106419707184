//! Music section
//!
//! Genre filter row followed by a grid of music cards. The playing card
//! animates a small equalizer; every card carries a seek bar that maps a
//! click fraction onto the track position. Cards fade in per the reveal
//! schedule when the section is entered.

use driftwood_core::audio::{AudioDeck, PlaybackState};
use driftwood_core::content::{Catalog, Genre, GenreFilter, MusicTrack};
use driftwood_core::reveal::{RevealPhase, RevealSchedule};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::tui::state::LayoutState;
use crate::tui::themes::Theme;
use crate::tui::utils::{draw_frame, fill_rect, format_duration, put_str, truncate_ellipsis};

const CARD_W: u16 = 30;
const CARD_H: u16 = 6;
const CARD_GAP: u16 = 2;
const FILTER_ROWS: u16 = 2;

/// Equalizer bar glyphs by level.
const EQ_LEVELS: [char; 5] = ['▁', '▂', '▄', '▆', '█'];

/// Total content height in lines for the music section at the given width.
pub fn music_grid_lines(catalog: &Catalog, filter: GenreFilter, width: u16) -> usize {
    let count = catalog.filtered_tracks(filter).len() as u16;
    let cols = columns(width);
    let rows = count.div_ceil(cols);
    (FILTER_ROWS + rows * (CARD_H + 1)) as usize
}

fn columns(width: u16) -> u16 {
    ((width.saturating_sub(2)) / (CARD_W + CARD_GAP)).max(1)
}

/// Render the filter row and card grid; records hit rects for filters,
/// cards, and seek bars.
#[allow(clippy::too_many_arguments)]
pub fn render_music_grid(
    buf: &mut Buffer,
    body: Rect,
    offset: usize,
    catalog: &Catalog,
    filter: GenreFilter,
    deck: &AudioDeck,
    reveal: &RevealSchedule,
    anim_frame: usize,
    theme: &Theme,
    layout: &mut LayoutState,
) {
    render_filter_row(buf, body, offset, filter, theme, layout);

    let tracks = catalog.filtered_tracks(filter);
    let cols = columns(body.width);
    let grid_w = cols * (CARD_W + CARD_GAP) - CARD_GAP;
    let x0 = body.x + body.width.saturating_sub(grid_w) / 2;

    for (grid_idx, (deck_idx, track)) in tracks.iter().enumerate() {
        let row = grid_idx as u16 / cols;
        let col = grid_idx as u16 % cols;

        let phase = reveal.phase(grid_idx);
        let (lift, entering) = match phase {
            RevealPhase::Hidden => continue,
            RevealPhase::Entering(p) => ((((1.0 - p) * 2.0) as u16), true),
            RevealPhase::Settled => (0, false),
        };

        let y = body.y as i32 + (FILTER_ROWS + row * (CARD_H + 1)) as i32 - offset as i32
            + lift as i32;
        if y + (CARD_H as i32) < body.y as i32 || y >= (body.y + body.height) as i32 {
            continue;
        }

        let card = Rect::new(x0 + col * (CARD_W + CARD_GAP), y.max(0) as u16, CARD_W, CARD_H);
        render_card(
            buf, card, body, *deck_idx, track, deck, entering, anim_frame, theme, layout,
        );
    }
}

fn render_filter_row(
    buf: &mut Buffer,
    body: Rect,
    offset: usize,
    filter: GenreFilter,
    theme: &Theme,
    layout: &mut LayoutState,
) {
    if offset > 0 {
        // Filter row scrolls away with the content
        return;
    }

    let mut filters = vec![GenreFilter::All];
    filters.extend(Genre::ALL.map(GenreFilter::Only));

    let mut x = body.x + 2;
    for f in filters {
        let label = format!(" {} ", f.label());
        let style = if f == filter {
            Style::default()
                .fg(theme.bg_color)
                .bg(theme.accent_color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim_color)
        };

        let start = x;
        x = put_str(buf, x, body.y, &label, style, body);
        layout
            .filters
            .push((f, Rect::new(start, body.y, x.saturating_sub(start), 1)));
        x += 1;
    }
}

#[allow(clippy::too_many_arguments)]
fn render_card(
    buf: &mut Buffer,
    card: Rect,
    bounds: Rect,
    deck_idx: usize,
    track: &MusicTrack,
    deck: &AudioDeck,
    entering: bool,
    anim_frame: usize,
    theme: &Theme,
    layout: &mut LayoutState,
) {
    let state = deck.card(deck_idx);
    let playing = state.map(|s| s.playback) == Some(PlaybackState::Playing);

    let border_style = if playing && !entering {
        Style::default().fg(theme.accent_color)
    } else {
        Style::default().fg(theme.border_color)
    };
    let text_style = if entering {
        Style::default().fg(theme.dim_color)
    } else {
        Style::default().fg(theme.text_color)
    };

    fill_rect(buf, card, Style::default().bg(theme.panel_color), bounds);
    draw_frame(buf, card, border_style, bounds);

    let inner_x = card.x + 2;
    let inner_w = card.width.saturating_sub(4) as usize;

    // Equalizer / play marker line
    let marker = match state.map(|s| s.playback) {
        Some(PlaybackState::Playing) => equalizer(anim_frame),
        Some(PlaybackState::Paused) => "▶ paused".to_string(),
        _ => "▶".to_string(),
    };
    put_str(
        buf,
        inner_x,
        card.y + 1,
        &marker,
        Style::default().fg(theme.accent_color),
        bounds,
    );

    put_str(
        buf,
        inner_x,
        card.y + 2,
        &truncate_ellipsis(&track.title, inner_w),
        text_style.add_modifier(Modifier::BOLD),
        bounds,
    );
    put_str(
        buf,
        inner_x,
        card.y + 3,
        track.genre.label(),
        Style::default().fg(theme.dim_color),
        bounds,
    );

    render_seek_bar(buf, card, bounds, deck_idx, deck, theme, layout);

    layout.music_cards.push((deck_idx, card));
}

fn render_seek_bar(
    buf: &mut Buffer,
    card: Rect,
    bounds: Rect,
    deck_idx: usize,
    deck: &AudioDeck,
    theme: &Theme,
    layout: &mut LayoutState,
) {
    let Some(state) = deck.card(deck_idx) else {
        return;
    };

    let time = format!(
        "{}/{}",
        format_duration(state.position),
        format_duration(state.duration)
    );
    let bar_x = card.x + 2;
    let bar_y = card.y + 4;
    let bar_w = card.width.saturating_sub(4 + time.len() as u16 + 1);

    let filled = (bar_w as f64 * state.progress()) as u16;
    for i in 0..bar_w {
        let (ch, style) = if i < filled {
            ('━', Style::default().fg(theme.accent_color))
        } else {
            ('─', Style::default().fg(theme.dim_color))
        };
        crate::tui::utils::put_char(buf, bar_x + i, bar_y, ch, style, bounds);
    }
    put_str(
        buf,
        bar_x + bar_w + 1,
        bar_y,
        &time,
        Style::default().fg(theme.dim_color),
        bounds,
    );

    if bar_w > 0 {
        layout
            .seek_bars
            .push((deck_idx, Rect::new(bar_x, bar_y, bar_w, 1)));
    }
}

fn equalizer(anim_frame: usize) -> String {
    (0..5)
        .map(|bar| {
            // Each bar bobs on its own phase
            let level = (anim_frame / 2 + bar * 2) % (EQ_LEVELS.len() * 2 - 2);
            let level = if level >= EQ_LEVELS.len() {
                EQ_LEVELS.len() * 2 - 2 - level
            } else {
                level
            };
            EQ_LEVELS[level]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_lines_grow_with_rows() {
        let catalog = Catalog::default();
        let narrow = music_grid_lines(&catalog, GenreFilter::All, 40);
        let wide = music_grid_lines(&catalog, GenreFilter::All, 140);
        assert!(narrow > wide);
    }

    #[test]
    fn test_equalizer_levels_stay_in_range() {
        for frame in 0..50 {
            let eq = equalizer(frame);
            assert_eq!(eq.chars().count(), 5);
        }
    }

    #[test]
    fn test_render_records_hit_rects() {
        let catalog = Catalog::default();
        let deck = AudioDeck::new(&catalog.durations());
        let reveal = RevealSchedule::new();
        let mut layout = LayoutState::new();
        let theme = crate::tui::themes::THEME_REGISTRY.get_or_default("riverbed");
        let body = Rect::new(0, 3, 100, 40);
        let mut buf = Buffer::empty(Rect::new(0, 0, 100, 43));

        render_music_grid(
            &mut buf,
            body,
            0,
            &catalog,
            GenreFilter::All,
            &deck,
            &reveal,
            0,
            theme,
            &mut layout,
        );

        assert_eq!(layout.filters.len(), 5);
        assert!(!layout.music_cards.is_empty());
        assert_eq!(layout.music_cards.len(), layout.seek_bars.len());
    }
}
