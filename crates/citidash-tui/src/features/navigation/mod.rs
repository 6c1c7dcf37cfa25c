//! Previous/next control pairs.
//!
//! Two pairs are drawn, one above and one below the page body. Both only
//! report clicks; every page change goes through
//! [`apply_nav_command`](crate::update::apply_nav_command).

mod render;
mod state;

pub use render::render_nav_controls;
pub use state::{ControlSite, NavControlsState};
