//! Scrollable page body.
//!
//! ## Module Structure
//!
//! - `state.rs`: per-page scroll offsets and the last measured geometry
//! - `layout.rs`: section heights and drawing, shared by measuring and drawing
//! - `render.rs`: draws the full page offscreen and copies the visible rows

mod layout;
mod render;
mod state;

pub use layout::{draw_sections, sections_height};
pub use render::render_page_body;
pub use state::PageBodyState;
