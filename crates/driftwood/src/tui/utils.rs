//! Small rendering and text helpers shared across components

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthChar;

/// Write a string into the buffer starting at (x, y), clipped to `bounds`.
/// Returns the x position after the last written cell.
pub fn put_str(buf: &mut Buffer, x: u16, y: u16, text: &str, style: Style, bounds: Rect) -> u16 {
    if y < bounds.y || y >= bounds.y + bounds.height {
        return x;
    }

    let mut cx = x;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(1) as u16;
        if cx < bounds.x {
            cx += w;
            continue;
        }
        if cx + w > bounds.x + bounds.width {
            break;
        }
        if let Some(cell) = buf.cell_mut((cx, y)) {
            cell.set_char(ch).set_style(style);
        }
        cx += w;
    }
    cx
}

/// Write a single character, clipped to `bounds`.
pub fn put_char(buf: &mut Buffer, x: u16, y: u16, ch: char, style: Style, bounds: Rect) {
    if x < bounds.x
        || y < bounds.y
        || x >= bounds.x + bounds.width
        || y >= bounds.y + bounds.height
    {
        return;
    }
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_char(ch).set_style(style);
    }
}

/// Truncate to `max_width` display cells, appending an ellipsis when
/// anything was cut.
pub fn truncate_ellipsis(text: &str, max_width: usize) -> String {
    let mut width = 0usize;
    let mut out = String::new();
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + w > max_width.saturating_sub(1) {
            out.push('…');
            return out;
        }
        out.push(ch);
        width += w;
    }
    out
}

/// Format seconds as m:ss.
pub fn format_duration(secs: f64) -> String {
    let total = secs.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Draw a rounded border around `rect`, clipped to `bounds`.
pub fn draw_frame(buf: &mut Buffer, rect: Rect, style: Style, bounds: Rect) {
    if rect.width < 2 || rect.height < 2 {
        return;
    }
    let right = rect.x + rect.width - 1;
    let bottom = rect.y + rect.height - 1;

    put_char(buf, rect.x, rect.y, '╭', style, bounds);
    put_char(buf, right, rect.y, '╮', style, bounds);
    put_char(buf, rect.x, bottom, '╰', style, bounds);
    put_char(buf, right, bottom, '╯', style, bounds);
    for x in (rect.x + 1)..right {
        put_char(buf, x, rect.y, '─', style, bounds);
        put_char(buf, x, bottom, '─', style, bounds);
    }
    for y in (rect.y + 1)..bottom {
        put_char(buf, rect.x, y, '│', style, bounds);
        put_char(buf, right, y, '│', style, bounds);
    }
}

/// Fill a rect's interior with spaces on the panel color.
pub fn fill_rect(buf: &mut Buffer, rect: Rect, style: Style, bounds: Rect) {
    for y in rect.y..rect.y + rect.height {
        for x in rect.x..rect.x + rect.width {
            put_char(buf, x, y, ' ', style, bounds);
        }
    }
}

/// Whether a point falls inside a rect.
pub fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ellipsis() {
        assert_eq!(truncate_ellipsis("short", 10), "short");
        assert_eq!(truncate_ellipsis("a longer caption", 8), "a longe…");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "0:00");
        assert_eq!(format_duration(65.4), "1:05");
        assert_eq!(format_duration(600.0), "10:00");
    }

    #[test]
    fn test_contains() {
        let rect = Rect::new(2, 3, 4, 2);
        assert!(contains(rect, 2, 3));
        assert!(contains(rect, 5, 4));
        assert!(!contains(rect, 6, 4));
        assert!(!contains(rect, 2, 5));
    }
}
