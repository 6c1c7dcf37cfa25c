//! Sidebar page selector.

mod render;
mod state;

pub use render::{SIDEBAR_LABEL, render_sidebar};
pub use state::SidebarState;
