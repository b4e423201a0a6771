//! Application configuration for filebay
//!
//! Stored as YAML. Default location: `<config dir>/filebay/config.yaml`

use std::path::{Path, PathBuf};

use filebay_core::config::{default_config_path, load_config, save_config};
use filebay_core::{SortDirection, SortKey, ViewMode};
use serde::{Deserialize, Serialize};

const CONFIG_FILENAME: &str = "config.yaml";

/// Shortest and longest notice display time the presentation layer may use
const NOTICE_DURATION_RANGE_MS: (u64, u64) = (500, 60_000);

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Start with the two demo records (a PDF and a JPEG)
    pub seed_demo_files: bool,
    /// Initial view settings
    pub view: ViewDefaults,
    /// How long notices stay on screen
    pub notice_duration_ms: u64,
    /// Files larger than this are skipped by the picker
    pub max_picked_file_bytes: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_demo_files: true,
            view: ViewDefaults::default(),
            notice_duration_ms: 2600,
            max_picked_file_bytes: 64 * 1024 * 1024,
        }
    }
}

impl AppConfig {
    /// Clamp values into supported ranges
    pub fn validate(&mut self) {
        let (min, max) = NOTICE_DURATION_RANGE_MS;
        self.notice_duration_ms = self.notice_duration_ms.clamp(min, max);
        if self.max_picked_file_bytes == 0 {
            self.max_picked_file_bytes = Self::default().max_picked_file_bytes;
        }
    }
}

/// Initial presentation and ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewDefaults {
    pub mode: ViewMode,
    pub sort_by: SortKey,
    pub sort_dir: SortDirection,
}

/// Get the default config file path
pub fn default_app_config_path() -> PathBuf {
    default_config_path(CONFIG_FILENAME)
}

/// Load and validate the configuration, falling back to defaults
pub fn load_app_config(path: &Path) -> AppConfig {
    let mut config: AppConfig = load_config(path);
    config.validate();
    log::info!(
        "load_app_config: seed_demo_files={}, view={:?}/{:?}/{:?}",
        config.seed_demo_files,
        config.view.mode,
        config.view.sort_by,
        config.view.sort_dir
    );
    config
}

/// Save the configuration
pub fn save_app_config(config: &AppConfig, path: &Path) -> anyhow::Result<()> {
    save_config(config, path)
}
