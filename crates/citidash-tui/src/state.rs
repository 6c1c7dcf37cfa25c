//! Application state composition.
//!
//! ```text
//! AppState
//! ├── bundle: Arc<DatasetBundle>  (read-only, shared)
//! ├── nav: NavigationState        (the only page index)
//! ├── options: PageOptions        (map layer, map height)
//! ├── focus: Focus                (content or sidebar)
//! ├── sidebar: SidebarState       (selector cursor, hit area)
//! ├── controls: NavControlsState  (button hit areas)
//! ├── body: PageBodyState         (per-page scroll)
//! └── status: StatusState         (flash message)
//! ```

use std::sync::Arc;

use citidash_core::config::Config;
use citidash_core::data::DatasetBundle;
use citidash_core::navigation::NavigationState;
use citidash_core::pages::{self, PageContent, PageOptions};

use crate::navigation::NavControlsState;
use crate::page::PageBodyState;
use crate::sidebar::SidebarState;
use crate::statusline::StatusState;

/// Which pane receives arrow keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Content,
    Sidebar,
}

pub struct AppState {
    pub bundle: Arc<DatasetBundle>,
    pub nav: NavigationState,
    pub options: PageOptions,
    pub focus: Focus,
    pub sidebar: SidebarState,
    pub controls: NavControlsState,
    pub body: PageBodyState,
    pub status: StatusState,
    /// Terminal size from the latest frame event.
    pub size: (u16, u16),
    pub should_quit: bool,
}

impl AppState {
    pub fn new(bundle: Arc<DatasetBundle>, config: &Config) -> Self {
        let options = PageOptions {
            map_height: config.effective_map_height(),
            ..PageOptions::default()
        };
        let mut status = StatusState::new();
        let warnings = bundle.warnings();
        if !warnings.is_empty() {
            status.flash_error(format!(
                "{} optional input(s) missing, see the log for details",
                warnings.len()
            ));
        }
        Self {
            bundle,
            nav: NavigationState::default(),
            options,
            focus: Focus::default(),
            sidebar: SidebarState::new(),
            controls: NavControlsState::new(),
            body: PageBodyState::new(),
            status,
            size: (0, 0),
            should_quit: false,
        }
    }

    /// Content of the current page.
    pub fn page_content(&self) -> PageContent<'_> {
        pages::render(self.nav.current_page(), &self.bundle, &self.options)
    }
}
