//! Direct page selector kept in sync with [`NavigationState`].
//!
//! The selector never stores which page is selected. The displayed value is
//! always derived from the navigation index. While the selector has focus it
//! owns a transient highlight cursor; committing the cursor goes through
//! [`NavigationState::goto`] with the highlighted title.

use crate::catalog::PageId;
use crate::navigation::{NavigationError, NavigationState, StepDirection};

#[derive(Debug, Clone, Default)]
pub struct SelectorSync {
    /// Highlighted row while browsing; `None` when the selector is closed.
    cursor: Option<usize>,
}

impl SelectorSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value shown as selected: always `catalog[index]`.
    pub fn selected(&self, nav: &NavigationState) -> PageId {
        nav.current_page()
    }

    pub fn is_open(&self) -> bool {
        self.cursor.is_some()
    }

    /// Row to highlight. Falls back to the selected row when closed.
    pub fn highlighted(&self, nav: &NavigationState) -> usize {
        self.cursor.unwrap_or_else(|| nav.index())
    }

    /// Opens the selector with the cursor on the current page.
    pub fn open(&mut self, nav: &NavigationState) {
        self.cursor = Some(nav.index());
    }

    /// Closes the selector, discarding any uncommitted cursor movement.
    pub fn close(&mut self) {
        self.cursor = None;
    }

    /// Moves the highlight cursor one row, clamped. Opens the selector first
    /// if needed. Does not touch the navigation index.
    pub fn move_cursor(&mut self, direction: StepDirection, nav: &NavigationState) {
        let current = self.highlighted(nav);
        let last = nav.catalog().last_index() as isize;
        let next = (current as isize + direction.delta()).clamp(0, last) as usize;
        self.cursor = Some(next);
    }

    /// Places the cursor on `row` (mouse click), clamped to the catalog.
    pub fn set_cursor(&mut self, row: usize, nav: &NavigationState) {
        self.cursor = Some(row.min(nav.catalog().last_index()));
    }

    /// Commits the highlighted row as the new page and closes the selector.
    ///
    /// Returns whether the page changed.
    ///
    /// # Errors
    /// Propagates `NavigationError` from `goto`; the selector stays open.
    pub fn commit(&mut self, nav: &mut NavigationState) -> Result<bool, NavigationError> {
        let row = self.highlighted(nav);
        let title = nav
            .catalog()
            .get(row)
            .map(PageId::title)
            .ok_or_else(|| NavigationError::InvalidPage(format!("row {row}")))?;
        let changed = nav.goto(title)?;
        self.close();
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_tracks_navigation_after_any_sequence() {
        let mut nav = NavigationState::default();
        let mut selector = SelectorSync::new();

        nav.step(StepDirection::Forward);
        assert_eq!(selector.selected(&nav), nav.current_page());

        selector.open(&nav);
        selector.move_cursor(StepDirection::Forward, &nav);
        selector.move_cursor(StepDirection::Forward, &nav);
        selector.commit(&mut nav).unwrap();
        assert_eq!(nav.index(), 3);
        assert_eq!(selector.selected(&nav), PageId::Routes);

        nav.step(StepDirection::Backward);
        nav.goto("Recommendations").unwrap();
        nav.step(StepDirection::Forward);
        assert_eq!(selector.selected(&nav), PageId::Recommendations);
        assert_eq!(selector.highlighted(&nav), nav.index());
    }

    #[test]
    fn test_cursor_movement_does_not_navigate() {
        let nav = NavigationState::default();
        let mut selector = SelectorSync::new();
        selector.move_cursor(StepDirection::Forward, &nav);
        assert!(selector.is_open());
        assert_eq!(selector.highlighted(&nav), 1);
        assert_eq!(selector.selected(&nav), PageId::Intro);
    }

    #[test]
    fn test_close_discards_cursor() {
        let mut nav = NavigationState::default();
        let mut selector = SelectorSync::new();
        selector.open(&nav);
        selector.move_cursor(StepDirection::Forward, &nav);
        selector.close();
        nav.step(StepDirection::Forward);
        nav.step(StepDirection::Forward);
        assert_eq!(selector.highlighted(&nav), 2);
    }

    #[test]
    fn test_cursor_clamps_at_bounds() {
        let nav = NavigationState::default();
        let mut selector = SelectorSync::new();
        selector.move_cursor(StepDirection::Backward, &nav);
        assert_eq!(selector.highlighted(&nav), 0);
        selector.set_cursor(99, &nav);
        assert_eq!(selector.highlighted(&nav), 6);
    }

    #[test]
    fn test_commit_same_page_reports_no_change() {
        let mut nav = NavigationState::default();
        let mut selector = SelectorSync::new();
        selector.open(&nav);
        assert_eq!(selector.commit(&mut nav), Ok(false));
        assert!(!selector.is_open());
    }
}
