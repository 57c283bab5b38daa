//! Configuration handling for the TUI

use crate::state::{FormKind, Theme};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// Color theme name
    pub theme: Option<String>,
    /// Tab shown at startup
    pub initial_tab: Option<String>,
    /// Fixed submit latency for every form, in milliseconds
    pub simulated_delay_ms: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "formkit", "formkit-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Get the log file path
    pub fn log_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "formkit", "formkit-tui")
            .map(|dirs| dirs.data_dir().join("formkit-tui.log"))
    }

    /// Open `path` for appending log lines, creating parent directories
    pub fn open_log(path: &Path) -> Result<File> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open {}", path.display()))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Configured theme; unknown names fall back to the default
    pub fn theme(&self) -> Theme {
        self.theme
            .as_deref()
            .and_then(Theme::from_name)
            .unwrap_or_default()
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = Some(theme.name().to_string());
    }

    pub fn initial_tab(&self) -> FormKind {
        self.initial_tab
            .as_deref()
            .and_then(FormKind::from_name)
            .unwrap_or_default()
    }

    pub fn simulated_delay(&self) -> Option<Duration> {
        self.simulated_delay_ms.map(Duration::from_millis)
    }
}
