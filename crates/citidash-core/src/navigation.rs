//! Navigation state machine.
//!
//! A single index into the [`PageCatalog`]. It changes only through
//! [`NavigationState::goto`] (direct selection) and [`NavigationState::step`]
//! (next/previous). The index is always a valid catalog position.
//!
//! ```text
//!   step(Backward)            step(Forward)
//!  ◄──────────────  [ index ]  ──────────────►
//!   clamped at 0               clamped at len-1
//!
//!   goto(title) ── jumps to the title's position (strict: unknown title is an error)
//! ```

use std::fmt;

use crate::catalog::{PageCatalog, PageId};

/// Direction of a single next/previous step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Backward,
    Forward,
}

impl StepDirection {
    pub fn delta(self) -> isize {
        match self {
            StepDirection::Backward => -1,
            StepDirection::Forward => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// The requested page is not part of the catalog.
    InvalidPage(String),
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::InvalidPage(name) => write!(f, "unknown page: '{name}'"),
        }
    }
}

impl std::error::Error for NavigationError {}

/// Current-page pointer shared by every navigation control of one session.
#[derive(Debug, Clone)]
pub struct NavigationState {
    catalog: PageCatalog,
    index: usize,
}

impl NavigationState {
    /// Starts at the first catalog entry.
    pub fn new(catalog: PageCatalog) -> Self {
        Self { catalog, index: 0 }
    }

    pub fn catalog(&self) -> &PageCatalog {
        &self.catalog
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_page(&self) -> PageId {
        // Invariant: index < catalog.len() and the catalog is never empty.
        self.catalog.get(self.index).unwrap_or(PageId::Intro)
    }

    /// Jumps to the page with the given title.
    ///
    /// Returns `Ok(true)` if the index changed, `Ok(false)` if the title is
    /// already current.
    ///
    /// # Errors
    /// Returns `NavigationError::InvalidPage` if no catalog entry has this
    /// title. The index is left untouched.
    pub fn goto(&mut self, title: &str) -> Result<bool, NavigationError> {
        let position = self
            .catalog
            .position_of_title(title)
            .ok_or_else(|| NavigationError::InvalidPage(title.to_string()))?;
        Ok(self.move_to(position))
    }

    /// Typed variant of [`goto`](Self::goto).
    ///
    /// # Errors
    /// Returns `NavigationError::InvalidPage` if `page` is not in the catalog.
    pub fn goto_page(&mut self, page: PageId) -> Result<bool, NavigationError> {
        let position = self
            .catalog
            .position(page)
            .ok_or_else(|| NavigationError::InvalidPage(page.title().to_string()))?;
        Ok(self.move_to(position))
    }

    /// Moves one page in `direction`, clamped to the catalog bounds.
    ///
    /// Returns whether the index changed. Stepping past either end is a no-op.
    pub fn step(&mut self, direction: StepDirection) -> bool {
        let last = self.catalog.last_index() as isize;
        let target = (self.index as isize + direction.delta()).clamp(0, last) as usize;
        self.move_to(target)
    }

    /// Whether a step in `direction` would change the page.
    pub fn can_step(&self, direction: StepDirection) -> bool {
        match direction {
            StepDirection::Backward => self.index > 0,
            StepDirection::Forward => self.index < self.catalog.last_index(),
        }
    }

    fn move_to(&mut self, position: usize) -> bool {
        if position == self.index {
            return false;
        }
        tracing::debug!(
            from = self.current_page().title(),
            to = self.catalog.get(position).map(PageId::title),
            "page change"
        );
        self.index = position;
        true
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(PageCatalog::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_at(index: usize) -> NavigationState {
        let mut nav = NavigationState::default();
        for _ in 0..index {
            nav.step(StepDirection::Forward);
        }
        assert_eq!(nav.index(), index);
        nav
    }

    #[test]
    fn test_starts_at_first_page() {
        let nav = NavigationState::default();
        assert_eq!(nav.index(), 0);
        assert_eq!(nav.current_page(), PageId::Intro);
    }

    #[test]
    fn test_step_forward_and_backward_clamp_for_every_index() {
        let len = PageCatalog::default().len();
        for i in 0..len {
            let mut nav = state_at(i);
            nav.step(StepDirection::Forward);
            assert_eq!(nav.index(), (i + 1).min(len - 1));

            let mut nav = state_at(i);
            nav.step(StepDirection::Backward);
            assert_eq!(nav.index(), i.saturating_sub(1));
        }
    }

    #[test]
    fn test_step_is_idempotent_at_the_end() {
        let mut nav = state_at(6);
        for _ in 0..5 {
            assert!(!nav.step(StepDirection::Forward));
            assert_eq!(nav.index(), 6);
        }
        assert_eq!(nav.current_page(), PageId::Recommendations);
    }

    #[test]
    fn test_step_backward_at_start_is_noop() {
        let mut nav = NavigationState::default();
        assert!(!nav.step(StepDirection::Backward));
        assert_eq!(nav.index(), 0);
    }

    #[test]
    fn test_three_steps_then_goto() {
        let mut nav = NavigationState::default();
        for _ in 0..3 {
            nav.step(StepDirection::Forward);
        }
        assert_eq!(nav.index(), 3);
        assert_eq!(nav.current_page().title(), "Most Popular Bike Routes");

        assert_eq!(nav.goto("Busiest stations"), Ok(true));
        assert_eq!(nav.index(), 4);
    }

    #[test]
    fn test_goto_then_current_page_for_every_title() {
        let mut nav = NavigationState::default();
        for page in PageId::all() {
            nav.goto(page.title()).unwrap();
            assert_eq!(nav.current_page(), *page);
        }
    }

    #[test]
    fn test_goto_current_page_is_noop() {
        let mut nav = NavigationState::default();
        assert_eq!(nav.goto("Intro page"), Ok(false));
        assert_eq!(nav.index(), 0);
    }

    #[test]
    fn test_goto_unknown_title_is_error_and_keeps_index() {
        let mut nav = state_at(2);
        let err = nav.goto("Weather forecast").unwrap_err();
        assert_eq!(err, NavigationError::InvalidPage("Weather forecast".to_string()));
        assert_eq!(nav.index(), 2);
    }

    #[test]
    fn test_goto_page_missing_from_custom_catalog() {
        let catalog = PageCatalog::new(vec![PageId::Intro, PageId::Routes]).unwrap();
        let mut nav = NavigationState::new(catalog);
        assert!(nav.goto_page(PageId::Stations).is_err());
        assert_eq!(nav.goto_page(PageId::Routes), Ok(true));
        assert!(!nav.can_step(StepDirection::Forward));
        assert!(nav.can_step(StepDirection::Backward));
    }
}
