//! Photo section
//!
//! A grid of photo tiles. There are no bitmap assets; each tile is a
//! procedural gradient seeded by its index, with the caption overlaid on
//! the bottom edge. Clicking a tile opens the lightbox.

use driftwood_core::content::Photo;
use driftwood_core::reveal::{RevealPhase, RevealSchedule};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};

use crate::tui::state::LayoutState;
use crate::tui::themes::Theme;
use crate::tui::utils::{draw_frame, put_char, put_str, truncate_ellipsis};

const TILE_W: u16 = 24;
const TILE_H: u16 = 8;
const TILE_GAP: u16 = 2;

/// Shade ramp used for the gradient fill.
const SHADES: [char; 4] = ['░', '▒', '▓', '█'];

/// Total content height in lines for the photo section at the given width.
pub fn photo_grid_lines(photo_count: usize, width: u16) -> usize {
    let cols = columns(width);
    let rows = (photo_count as u16).div_ceil(cols);
    (rows * (TILE_H + 1)) as usize
}

fn columns(width: u16) -> u16 {
    ((width.saturating_sub(2)) / (TILE_W + TILE_GAP)).max(1)
}

/// Per-photo hue, cycling a small palette so neighboring tiles differ.
fn tile_color(index: usize) -> Color {
    const PALETTE: [(u8, u8, u8); 6] = [
        (0xe6, 0x48, 0x33),
        (0x90, 0xae, 0xad),
        (0xfb, 0xe9, 0xd0),
        (0x87, 0x4f, 0x41),
        (0x7a, 0xa2, 0xf7),
        (0x8f, 0xd6, 0x6b),
    ];
    let (r, g, b) = PALETTE[index % PALETTE.len()];
    Color::Rgb(r, g, b)
}

/// Render the photo grid; records tile hit rects.
pub fn render_photo_grid(
    buf: &mut Buffer,
    body: Rect,
    offset: usize,
    photos: &[Photo],
    reveal: &RevealSchedule,
    theme: &Theme,
    layout: &mut LayoutState,
) {
    let cols = columns(body.width);
    let grid_w = cols * (TILE_W + TILE_GAP) - TILE_GAP;
    let x0 = body.x + body.width.saturating_sub(grid_w) / 2;

    for (i, photo) in photos.iter().enumerate() {
        let row = i as u16 / cols;
        let col = i as u16 % cols;

        let (lift, entering) = match reveal.phase(i) {
            RevealPhase::Hidden => continue,
            RevealPhase::Entering(p) => ((((1.0 - p) * 2.0) as u16), true),
            RevealPhase::Settled => (0, false),
        };

        let y = body.y as i32 + (row * (TILE_H + 1)) as i32 - offset as i32 + lift as i32;
        if y + (TILE_H as i32) < body.y as i32 || y >= (body.y + body.height) as i32 {
            continue;
        }

        let tile = Rect::new(x0 + col * (TILE_W + TILE_GAP), y.max(0) as u16, TILE_W, TILE_H);
        render_photo_tile(buf, tile, body, i, photo, entering, theme);
        layout.photos.push((i, tile));
    }
}

/// Render a single tile; shared with the lightbox, which draws the same
/// gradient at a larger size.
pub fn render_photo_tile(
    buf: &mut Buffer,
    tile: Rect,
    bounds: Rect,
    index: usize,
    photo: &Photo,
    entering: bool,
    theme: &Theme,
) {
    let color = if entering {
        theme.dim_color
    } else {
        tile_color(index)
    };
    let fill = Style::default().fg(color).bg(theme.panel_color);

    // Diagonal gradient fill
    for y in tile.y + 1..tile.y + tile.height.saturating_sub(1) {
        for x in tile.x + 1..tile.x + tile.width.saturating_sub(1) {
            let dx = (x - tile.x) as usize;
            let dy = (y - tile.y) as usize;
            let shade = SHADES[(dx / 3 + dy + index) % SHADES.len()];
            put_char(buf, x, y, shade, fill, bounds);
        }
    }

    draw_frame(buf, tile, Style::default().fg(theme.border_color), bounds);

    let caption = truncate_ellipsis(&photo.caption, tile.width.saturating_sub(4) as usize);
    let caption_y = tile.y + tile.height.saturating_sub(2);
    put_str(
        buf,
        tile.x + 2,
        caption_y,
        &caption,
        Style::default()
            .fg(theme.text_color)
            .bg(theme.panel_color)
            .add_modifier(Modifier::BOLD),
        bounds,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use driftwood_core::content::Catalog;

    #[test]
    fn test_grid_lines_match_rows() {
        // 6 photos, 2 columns -> 3 rows
        let lines = photo_grid_lines(6, 2 * (TILE_W + TILE_GAP) + 2);
        assert_eq!(lines, (3 * (TILE_H + 1)) as usize);
    }

    #[test]
    fn test_render_records_tiles() {
        let catalog = Catalog::default();
        let reveal = RevealSchedule::new();
        let mut layout = LayoutState::new();
        let theme = crate::tui::themes::THEME_REGISTRY.get_or_default("riverbed");
        let body = Rect::new(0, 3, 100, 40);
        let mut buf = Buffer::empty(Rect::new(0, 0, 100, 43));

        render_photo_grid(
            &mut buf,
            body,
            0,
            &catalog.photos,
            &reveal,
            theme,
            &mut layout,
        );
        assert_eq!(layout.photos.len(), catalog.photos.len());
    }
}
