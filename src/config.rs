//! Settings for the game front ends.
//!
//! Settings come from an optional TOML file:
//!
//! ```toml
//! [display]
//! show_coordinates = true
//! announce_draw = true
//! highlight_winning_line = true
//! move_order = "descending"
//!
//! [logging]
//! file = "strictly_rewind.log"
//! filter = "strictly_rewind=debug"
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use crate::games::tictactoe::ViewOptions;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "STRICTLY_REWIND_CONFIG";

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Presentation switches for the board and move list.
    display: ViewOptions,

    /// Log destination and filter.
    logging: LoggingConfig,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// File the terminal UI writes its log to.
    file: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("strictly_rewind.log"),
            filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let settings = Self::from_toml(&content)?;
        info!(display = ?settings.display, "Settings loaded");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Resolves settings from an explicit path, then [`CONFIG_ENV`],
    /// then defaults.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => {
                debug!(env = CONFIG_ENV, "Using config path from environment");
                Self::from_file(PathBuf::from(path))
            }
            _ => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces the display options.
    pub fn set_display(&mut self, display: ViewOptions) {
        self.display = display;
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
