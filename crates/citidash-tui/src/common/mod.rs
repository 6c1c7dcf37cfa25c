//! Shared TUI helpers.

mod scrollbar;
pub mod text;

pub use scrollbar::Scrollbar;
