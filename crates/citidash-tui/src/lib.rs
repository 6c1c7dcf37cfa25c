//! Full-screen terminal dashboard for citidash.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;
pub mod widgets;

use std::io::{IsTerminal, stdout};
use std::sync::Arc;

use anyhow::Result;
use citidash_core::config::Config;
use citidash_core::data::DatasetBundle;
pub use features::{navigation, page, sidebar, statusline};
pub use runtime::TuiRuntime;

/// Runs the dashboard until the user quits.
///
/// # Errors
/// Returns an error if stdout is not a terminal or the terminal fails.
pub fn run_dashboard(config: &Config, bundle: Arc<DatasetBundle>) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The dashboard requires a terminal.\n\
             Use `citidash check` for a non-interactive summary."
        );
    }

    tracing::info!(pages = citidash_core::catalog::PageId::all().len(), "starting dashboard");
    let mut runtime = TuiRuntime::new(config, bundle)?;
    runtime.run()
}
