//! Configuration management for citidash.
//!
//! Loads configuration from ${CITIDASH_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Page title shown in the title bar. Fixed for the whole process.
pub const DASHBOARD_TITLE: &str = "Citibike NY Strategy Dashboard";

/// How the main content area uses the terminal width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Content spans the full width next to the sidebar.
    Wide,
}

/// Layout mode for the dashboard. Fixed for the whole process.
pub const LAYOUT_MODE: LayoutMode = LayoutMode::Wide;

fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for citidash configuration and log directories.
    //!
    //! CITIDASH_HOME resolution order:
    //! 1. CITIDASH_HOME environment variable (if set)
    //! 2. ~/.config/citidash (default)
    //! 3. ./.citidash when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the citidash home directory.
    pub fn citidash_home() -> PathBuf {
        if let Ok(home) = std::env::var("CITIDASH_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".citidash"),
            |h| h.join(".config").join("citidash"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        citidash_home().join("config.toml")
    }

    /// Returns the directory that receives log files.
    pub fn logs_dir() -> PathBuf {
        citidash_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory with the CSV tables, relative to the dashboard root.
    pub data_dir: PathBuf,

    /// Directory with map documents and images, relative to the dashboard root.
    pub assets_dir: PathBuf,

    /// Height of embedded map documents in terminal rows.
    pub map_height_rows: u16,

    /// Event poll interval in milliseconds.
    pub tick_ms: u64,

    /// Default tracing filter when CITIDASH_LOG is unset.
    pub log_level: String,
}

impl Config {
    const DEFAULT_DATA_DIR: &str = "Data";
    const DEFAULT_ASSETS_DIR: &str = "visualisations";
    /// 500px in the browser layout is roughly 20 terminal rows.
    const DEFAULT_MAP_HEIGHT_ROWS: u16 = 20;
    const MIN_MAP_HEIGHT_ROWS: u16 = 3;
    const MAX_MAP_HEIGHT_ROWS: u16 = 200;
    const DEFAULT_TICK_MS: u64 = 100;
    const DEFAULT_LOG_LEVEL: &str = "info";

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Generates a fresh config TOML from Rust defaults.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn generate() -> Result<String> {
        toml::to_string(&Config::default()).context("Failed to serialize default config to TOML")
    }

    /// Resolves the table directory against the dashboard root.
    pub fn data_path(&self, root: &Path) -> PathBuf {
        root.join(&self.data_dir)
    }

    /// Resolves the asset directory against the dashboard root.
    pub fn assets_path(&self, root: &Path) -> PathBuf {
        root.join(&self.assets_dir)
    }

    /// Map height clamped so the container always has a visible body and
    /// never dominates the page buffer.
    pub fn effective_map_height(&self) -> u16 {
        self.map_height_rows
            .clamp(Self::MIN_MAP_HEIGHT_ROWS, Self::MAX_MAP_HEIGHT_ROWS)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
            assets_dir: PathBuf::from(Self::DEFAULT_ASSETS_DIR),
            map_height_rows: Self::DEFAULT_MAP_HEIGHT_ROWS,
            tick_ms: Self::DEFAULT_TICK_MS,
            log_level: Self::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.data_dir, PathBuf::from("Data"));
    }

    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "map_height_rows = 12\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.map_height_rows, 12);
        assert_eq!(config.assets_dir, PathBuf::from("visualisations"));
    }

    #[test]
    fn test_load_invalid_toml_is_error() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "map_height_rows = \"tall\"\n").unwrap();

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn test_init_creates_config_with_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();

        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("data_dir = \"Data\""));
        let parsed = Config::load_from(&config_path).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "").unwrap();

        assert!(Config::init(&config_path).is_err());
    }

    #[test]
    fn test_generate_round_trips() {
        let generated = Config::generate().unwrap();
        let parsed: Config = toml::from_str(&generated).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_map_height_has_floor() {
        let config = Config {
            map_height_rows: 0,
            ..Default::default()
        };
        assert_eq!(config.effective_map_height(), 3);
    }

    #[test]
    fn test_map_height_has_ceiling() {
        let config = Config {
            map_height_rows: u16::MAX,
            ..Default::default()
        };
        assert_eq!(config.effective_map_height(), 200);
    }
}
