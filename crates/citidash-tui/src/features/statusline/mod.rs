//! Status line feature slice.
//!
//! Shows a short-lived flash message (navigation errors, browser launch
//! results, startup warnings) or the key hints, plus the page position.
//!
//! ## Module Structure
//!
//! - `state.rs`: `StatusState` holding the current flash and its countdown
//! - `render.rs`: status line rendering

mod render;
mod state;

pub use render::render_status_line;
pub use state::{Flash, FlashLevel, StatusState};
