//! Configuration types for tempo.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::panel::PanelLayout;

/// Main configuration for tempo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Calendar feed URL shown in the calendar pane.
    #[serde(default = "default_calendar_url")]
    pub calendar_url: String,

    /// Delay between a successful delivery and the calendar reload, in
    /// milliseconds.
    #[serde(default = "default_refresh_delay_ms")]
    pub refresh_delay_ms: u64,

    /// Panel layout at startup.
    #[serde(default)]
    pub initial_layout: PanelLayout,

    /// Where submitted messages are journaled.
    #[serde(default = "default_journal_path")]
    pub journal_path: PathBuf,
}

fn default_calendar_url() -> String {
    "https://calendar.google.com/calendar/embed".into()
}

fn default_refresh_delay_ms() -> u64 {
    2000
}

fn default_journal_path() -> PathBuf {
    PathBuf::from(".tempo").join("journal.jsonl")
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Save configuration to a file, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// The refresh delay as a `Duration`.
    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            calendar_url: default_calendar_url(),
            refresh_delay_ms: default_refresh_delay_ms(),
            initial_layout: PanelLayout::default(),
            journal_path: default_journal_path(),
        }
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}
