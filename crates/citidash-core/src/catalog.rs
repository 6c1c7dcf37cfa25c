//! Page identifiers and the ordered page catalog.
//!
//! The catalog is fixed at startup and defines the only valid navigation
//! targets. Its order defines adjacency for next/previous stepping.

use std::fmt;

use enum_map::Enum;

/// One screen of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum PageId {
    Intro,
    Usage,
    Membership,
    Routes,
    Stations,
    Expansion,
    Recommendations,
}

impl PageId {
    /// Returns every page in presentation order.
    pub fn all() -> &'static [PageId] {
        &[
            PageId::Intro,
            PageId::Usage,
            PageId::Membership,
            PageId::Routes,
            PageId::Stations,
            PageId::Expansion,
            PageId::Recommendations,
        ]
    }

    /// Stable display name, also used as the selector value.
    pub fn title(self) -> &'static str {
        match self {
            PageId::Intro => "Intro page",
            PageId::Usage => "When and how are people using Citibike?",
            PageId::Membership => "Membership and Vehicle Types",
            PageId::Routes => "Most Popular Bike Routes",
            PageId::Stations => "Busiest stations",
            PageId::Expansion => "Expansion Considerations: Population, Income and Subway Network",
            PageId::Recommendations => "Recommendations",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Empty,
    Duplicate(PageId),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "page catalog must not be empty"),
            CatalogError::Duplicate(page) => {
                write!(f, "page catalog lists '{}' more than once", page.title())
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Ordered, non-empty list of unique pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCatalog {
    pages: Vec<PageId>,
}

impl PageCatalog {
    /// Builds a catalog, rejecting empty or duplicated page lists.
    ///
    /// # Errors
    /// Returns `CatalogError` if `pages` is empty or repeats a page.
    pub fn new(pages: Vec<PageId>) -> Result<Self, CatalogError> {
        if pages.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (i, page) in pages.iter().enumerate() {
            if pages[..i].contains(page) {
                return Err(CatalogError::Duplicate(*page));
            }
        }
        Ok(Self { pages })
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<PageId> {
        self.pages.get(index).copied()
    }

    pub fn position(&self, page: PageId) -> Option<usize> {
        self.pages.iter().position(|p| *p == page)
    }

    /// Position of the page whose title equals `title`.
    pub fn position_of_title(&self, title: &str) -> Option<usize> {
        self.pages.iter().position(|p| p.title() == title)
    }

    pub fn last_index(&self) -> usize {
        self.pages.len() - 1
    }

    pub fn iter(&self) -> impl Iterator<Item = PageId> + '_ {
        self.pages.iter().copied()
    }
}

impl Default for PageCatalog {
    fn default() -> Self {
        Self {
            pages: PageId::all().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_has_seven_pages_in_order() {
        let catalog = PageCatalog::default();
        assert_eq!(catalog.len(), 7);
        assert_eq!(catalog.get(0), Some(PageId::Intro));
        assert_eq!(catalog.get(3).map(PageId::title), Some("Most Popular Bike Routes"));
        assert_eq!(catalog.get(6), Some(PageId::Recommendations));
        assert_eq!(catalog.get(7), None);
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(PageCatalog::new(Vec::new()), Err(CatalogError::Empty));
    }

    #[test]
    fn test_duplicate_page_rejected() {
        let result = PageCatalog::new(vec![PageId::Intro, PageId::Routes, PageId::Intro]);
        assert_eq!(result, Err(CatalogError::Duplicate(PageId::Intro)));
    }

    #[test]
    fn test_position_of_title_respects_custom_order() {
        let catalog = PageCatalog::new(vec![PageId::Stations, PageId::Intro]).unwrap();
        assert_eq!(catalog.position_of_title("Intro page"), Some(1));
        assert_eq!(catalog.position_of_title("Recommendations"), None);
    }
}
