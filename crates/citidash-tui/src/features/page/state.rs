use std::cell::Cell;

use citidash_core::catalog::PageId;
use enum_map::EnumMap;
use ratatui::layout::{Position, Rect};

/// Scroll position of every page plus the geometry seen by the last render.
///
/// Offsets are kept per page so returning to a page restores where the
/// reader left it.
#[derive(Debug, Default)]
pub struct PageBodyState {
    scroll: EnumMap<PageId, u16>,
    pub(crate) viewport: Cell<Rect>,
    pub(crate) content_height: Cell<u16>,
}

impl PageBodyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self, page: PageId) -> u16 {
        self.scroll[page]
    }

    /// Largest offset that still fills the viewport.
    pub fn max_offset(&self) -> u16 {
        self.content_height
            .get()
            .saturating_sub(self.viewport.get().height)
    }

    /// Rows moved by a page-up/page-down.
    pub fn page_rows(&self) -> u16 {
        self.viewport.get().height.saturating_sub(1).max(1)
    }

    pub fn scroll_by(&mut self, page: PageId, delta: i32) {
        let current = i32::from(self.scroll[page].min(self.max_offset()));
        let target = (current + delta).clamp(0, i32::from(self.max_offset()));
        self.scroll[page] = target as u16;
    }

    pub fn scroll_to_top(&mut self, page: PageId) {
        self.scroll[page] = 0;
    }

    pub fn scroll_to_end(&mut self, page: PageId) {
        self.scroll[page] = self.max_offset();
    }

    pub fn is_over_body(&self, column: u16, row: u16) -> bool {
        self.viewport.get().contains(Position::new(column, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(content: u16, viewport: u16) -> PageBodyState {
        let state = PageBodyState::new();
        state.content_height.set(content);
        state.viewport.set(Rect::new(0, 0, 80, viewport));
        state
    }

    #[test]
    fn test_scroll_clamps_to_content() {
        let mut body = state(50, 20);
        body.scroll_by(PageId::Usage, -5);
        assert_eq!(body.offset(PageId::Usage), 0);
        body.scroll_by(PageId::Usage, 100);
        assert_eq!(body.offset(PageId::Usage), 30);
        body.scroll_to_top(PageId::Usage);
        assert_eq!(body.offset(PageId::Usage), 0);
        body.scroll_to_end(PageId::Usage);
        assert_eq!(body.offset(PageId::Usage), 30);
    }

    #[test]
    fn test_offsets_are_per_page() {
        let mut body = state(50, 20);
        body.scroll_by(PageId::Usage, 7);
        assert_eq!(body.offset(PageId::Usage), 7);
        assert_eq!(body.offset(PageId::Routes), 0);
    }

    #[test]
    fn test_short_content_never_scrolls() {
        let mut body = state(10, 20);
        body.scroll_by(PageId::Intro, 3);
        assert_eq!(body.offset(PageId::Intro), 0);
        assert_eq!(body.page_rows(), 19);
    }
}
