use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::app_dirs::AppDirs;

pub const DEFAULT_BLINK_INTERVAL_MS: u64 = 500;
pub const MIN_BLINK_INTERVAL_MS: u64 = 50;

/// Colour names or ANSI indices, as accepted by `ratatui::style::Color`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub correct: String,
    pub incorrect: String,
    pub cursor: String,
    pub heading: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            correct: "10".to_string(),
            incorrect: "9".to_string(),
            cursor: "15".to_string(),
            heading: "12".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub blink_interval_ms: u64,
    pub theme: ThemeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            blink_interval_ms: DEFAULT_BLINK_INTERVAL_MS,
            theme: ThemeConfig::default(),
        }
    }
}

impl Config {
    pub fn blink_interval(&self) -> Duration {
        Duration::from_millis(self.blink_interval_ms.max(MIN_BLINK_INTERVAL_MS))
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
}

/// Reads `config.json`; anything missing or malformed falls back to defaults
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = AppDirs::config_path().unwrap_or_else(|| PathBuf::from("typist_config.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let Ok(bytes) = fs::read(&self.path) else {
            return Config::default();
        };

        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg,
            Err(err) => {
                warn!("ignoring invalid config {}: {err}", self.path.display());
                Config::default()
            }
        }
    }
}
