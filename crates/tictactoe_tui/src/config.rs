//! User settings, loaded from an optional TOML file and CLI overrides.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings error with location tracking.
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
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Presentation settings. The engine itself has none.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// How long a freshly placed mark stays emphasised, in milliseconds.
    pop_duration_ms: u64,
    /// Log file path.
    log_file: PathBuf,
    /// Whether to render the key-help footer.
    show_footer: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pop_duration_ms: 350,
            log_file: PathBuf::from("tictactoe.log"),
            show_footer: true,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file; absent keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(pop_ms = settings.pop_duration_ms, "Settings loaded");
        Ok(settings)
    }

    /// Resolves the effective settings: file (if given), then CLI flags.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut settings = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(ms) = cli.pop_ms {
            settings.pop_duration_ms = ms;
        }
        if let Some(path) = &cli.log_file {
            settings.log_file = path.clone();
        }
        Ok(settings)
    }

    /// Pop duration as a [`Duration`].
    pub fn pop_duration(&self) -> Duration {
        Duration::from_millis(self.pop_duration_ms)
    }
}
