//! Configuration handling for the TUI

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::state::DEFAULT_SUBMIT_DELAY;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Simulated submission delay in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// Contact email shown in the footer
    pub contact_email: Option<String>,
    /// Contact phone shown in the footer
    pub contact_phone: Option<String>,
    /// Show the shortcut help line under the form
    pub show_help: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "contact", "contact-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, falling back to defaults when absent
    pub fn load() -> Result<Self, ConfigError> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<(), ConfigError> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Effective submission delay
    pub fn submit_delay(&self) -> Duration {
        self.submit_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SUBMIT_DELAY)
    }

    pub fn contact_email(&self) -> &str {
        self.contact_email.as_deref().unwrap_or("hello@company.com")
    }

    pub fn contact_phone(&self) -> &str {
        self.contact_phone.as_deref().unwrap_or("(555) 123-4567")
    }

    pub fn show_help(&self) -> bool {
        self.show_help.unwrap_or(true)
    }
}
