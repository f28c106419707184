//! Indicator dots
//!
//! A vertical dot column on the right edge, one dot per section, the
//! active one filled with the accent color. Dot rects are cached in the
//! layout state so clicks jump straight to a section.

use driftwood_core::navigator::Indicator;
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::tui::state::LayoutState;
use crate::tui::themes::Theme;
use crate::tui::utils::put_str;

/// Vertical spacing between dots, in rows.
const DOT_GAP: u16 = 2;

/// Render the dot column and record hit rects.
pub fn render_dots(
    buf: &mut Buffer,
    area: Rect,
    indicators: &[Indicator],
    theme: &Theme,
    layout: &mut LayoutState,
) {
    let count = indicators.len() as u16;
    if count == 0 || area.width < 3 {
        return;
    }

    let column_height = count * DOT_GAP;
    let x = area.x + area.width - 3;
    let top = area.y + area.height.saturating_sub(column_height) / 2;

    for (i, indicator) in indicators.iter().enumerate() {
        let y = top + i as u16 * DOT_GAP;
        if y >= area.y + area.height {
            break;
        }

        let (glyph, style) = if indicator.active {
            ("●", Style::default().fg(theme.accent_color))
        } else {
            ("○", Style::default().fg(theme.dim_color))
        };
        put_str(buf, x, y, glyph, style, area);

        layout.dots.push(Rect::new(x.saturating_sub(1), y, 3, 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_one_hit_rect_per_dot() {
        let indicators: Vec<Indicator> = (0..4).map(|i| Indicator { active: i == 0 }).collect();
        let mut layout = LayoutState::new();
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 24));

        render_dots(
            &mut buf,
            Rect::new(0, 0, 80, 24),
            &indicators,
            crate::tui::themes::THEME_REGISTRY.get_or_default("riverbed"),
            &mut layout,
        );

        assert_eq!(layout.dots.len(), 4);
        // Dots stack vertically in section order
        assert!(layout.dots[0].y < layout.dots[3].y);
    }
}
