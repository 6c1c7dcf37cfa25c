use std::cell::Cell;

use citidash_core::selector::SelectorSync;
use ratatui::layout::{Position, Rect};

#[derive(Debug, Default)]
pub struct SidebarState {
    pub selector: SelectorSync,
    /// Inner list area from the last render.
    pub(crate) list_area: Cell<Rect>,
    /// First visible row from the last render.
    pub(crate) list_offset: Cell<usize>,
}

impl SidebarState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog row under `(column, row)`, if the click landed on an item.
    pub fn row_at(&self, column: u16, row: u16, len: usize) -> Option<usize> {
        let area = self.list_area.get();
        if !area.contains(Position::new(column, row)) {
            return None;
        }
        let index = self.list_offset.get() + usize::from(row - area.y);
        (index < len).then_some(index)
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.list_area.get().contains(Position::new(column, row))
    }
}
