//! Configuration handling for the TUI

use crate::publication::Publication;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Publication the form is opened for
    pub publication: Option<Publication>,
    /// Show the last submitted report below the form
    pub show_report_panel: Option<bool>,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("ua", "ad-board", "ad-board-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, writing the defaults out on first run
    /// so the file exists for the user to edit
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_or_create_at(&path),
            None => Ok(Self::default()),
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn load_or_create_at(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load_from(path);
        }

        let config = Self::with_defaults();
        config.save_to(path)?;
        tracing::info!("Wrote default config to {}", path.display());
        Ok(config)
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Every option spelled out with its default value
    fn with_defaults() -> Self {
        let defaults = Self::default();
        Self {
            publication: Some(defaults.publication()),
            show_report_panel: Some(defaults.show_report_panel()),
        }
    }

    pub fn publication(&self) -> Publication {
        self.publication.unwrap_or_default()
    }

    pub fn show_report_panel(&self) -> bool {
        self.show_report_panel.unwrap_or(true)
    }
}
