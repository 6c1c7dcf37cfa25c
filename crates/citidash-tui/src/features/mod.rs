//! Feature slices for the TUI (state/render per slice).

pub mod navigation;
pub mod page;
pub mod sidebar;
pub mod statusline;
