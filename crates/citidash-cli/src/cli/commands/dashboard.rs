//! Dashboard command handler.

use std::path::Path;

use anyhow::Result;
use citidash_core::config::Config;

#[cfg(feature = "tui")]
pub fn run(root: &Path, config: &Config) -> Result<()> {
    use std::sync::Arc;

    use anyhow::Context;
    use citidash_core::data::{DataPaths, DatasetBundle};

    let paths = DataPaths::new(root, config);
    let bundle = DatasetBundle::load(&paths)
        .with_context(|| format!("load dashboard data under {}", root.display()))?;
    for warning in bundle.warnings() {
        tracing::warn!(%warning, "optional input unavailable");
    }
    citidash_tui::run_dashboard(config, Arc::new(bundle))
}

#[cfg(not(feature = "tui"))]
pub fn run(_root: &Path, _config: &Config) -> Result<()> {
    anyhow::bail!("citidash was built without the `tui` feature; use `citidash check`")
}
