//! Layout state - cached areas for mouse hit testing
//!
//! Rebuilt on every render; handlers test click positions against these
//! rects on the next event.

use driftwood_core::content::GenreFilter;
use ratatui::layout::Rect;

/// Cached hit-test areas from the last render.
#[derive(Debug, Default)]
pub struct LayoutState {
    /// Body area of the active section (content under the top bar).
    pub section_body: Option<Rect>,
    /// One rect per indicator dot, in section order.
    pub dots: Vec<Rect>,
    /// One rect per nav menu entry, in section order.
    pub menu: Vec<Rect>,
    /// Music card rects with their deck indices.
    pub music_cards: Vec<(usize, Rect)>,
    /// Seek bar rects with their deck indices.
    pub seek_bars: Vec<(usize, Rect)>,
    /// Genre filter buttons.
    pub filters: Vec<(GenreFilter, Rect)>,
    /// Photo card rects with their photo indices.
    pub photos: Vec<(usize, Rect)>,
}

impl LayoutState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything; called at the start of each render pass.
    pub fn clear(&mut self) {
        self.section_body = None;
        self.dots.clear();
        self.menu.clear();
        self.music_cards.clear();
        self.seek_bars.clear();
        self.filters.clear();
        self.photos.clear();
    }
}
