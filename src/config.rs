//! Application configuration
//!
//! Settings are persisted with `confy` in the OS-specific config directory.
//! Every field falls back to its default when missing from the file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::engine::Algorithm;
use crate::model::Side;

/// Name used for the config directory and file
pub const APP_NAME: &str = "sidediff";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Confy(#[from] confy::ConfyError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub settings: Settings,
}

impl Config {
    /// Load configuration from disk, creating the default file if missing
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Settings = confy::load(APP_NAME, None)?;
        info!("Load config from {:?}", Self::config_path()?);
        Ok(Self { settings })
    }

    /// Load configuration, falling back to defaults when the file is unreadable
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!("Using default settings: {}", e);
            Self::default()
        })
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings: Settings = confy::load_path(path)?;
        info!("Load config from {:?}", path);
        Ok(Self { settings })
    }

    /// Save current configuration to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, None, &self.settings)?;
        info!("Save config to {:?}", Self::config_path()?);
        Ok(())
    }

    /// Save configuration to an explicit file
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        confy::store_path(path, &self.settings)?;
        info!("Save config to {:?}", path);
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(confy::get_configuration_file_path(APP_NAME, None)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Delay between the last edit and the recomputation
    pub debounce_ms: u64,

    /// Line alignment strategy
    pub algorithm: Algorithm,

    /// Tab key inserts a literal tab instead of spaces
    pub hard_tab: bool,

    /// Display width of a tab
    pub tab_width: u8,

    /// Notification lifetime in seconds
    pub toast_secs: u64,

    /// Directory for saved panes (current directory when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    pub left_file_name: String,

    pub right_file_name: String,

    /// Log file; logging is disabled when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            algorithm: Algorithm::Myers,
            hard_tab: true,
            tab_width: 4,
            toast_secs: 3,
            output_dir: None,
            left_file_name: "original.txt".to_string(),
            right_file_name: "modified.txt".to_string(),
            log_file: None,
        }
    }
}

impl Settings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn toast_ttl(&self) -> Duration {
        Duration::from_secs(self.toast_secs)
    }

    /// File name used when saving a side
    pub fn file_name(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.left_file_name,
            Side::Right => &self.right_file_name,
        }
    }

    /// Full path used when saving a side
    pub fn output_path(&self, side: Side) -> PathBuf {
        let dir = self.output_dir.clone().unwrap_or_default();
        dir.join(self.file_name(side))
    }
}
