//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub greeting: GreetingConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("ui.tick_rate_ms must be between 10 and 1000, got {0}")]
    TickRateOutOfRange(u64),
    #[error("greeting.name must not be empty while the greeting is enabled")]
    EmptyGreetingName,
    #[error("logging.level {0:?} is not a valid level")]
    InvalidLogLevel(String),
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(10..=1000).contains(&self.ui.tick_rate_ms) {
            return Err(ConfigError::TickRateOutOfRange(self.ui.tick_rate_ms));
        }
        if self.greeting.enabled && self.greeting.name.trim().is_empty() {
            return Err(ConfigError::EmptyGreetingName);
        }
        self.logging.level_filter()?;
        Ok(())
    }
}

/// The greeting line shown above the counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreetingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_name")]
    pub name: String,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            name: default_name(),
        }
    }
}

/// UI refresh and input settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Capture mouse clicks so the controls can be pressed with the mouse.
    #[serde(default = "default_true")]
    pub mouse: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            mouse: true,
        }
    }
}

/// Diagnostic log settings. The terminal belongs to the UI, so logs go to a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_level")]
    pub level: String,
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::InvalidLogLevel(self.level.clone()))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_name() -> String {
    "World".to_string()
}
fn default_tick_rate() -> u64 {
    50 // 20 FPS
}
fn default_log_dir() -> String {
    "~/.local/share/tally/logs".to_string()
}
fn default_level() -> String {
    "info".to_string()
}
