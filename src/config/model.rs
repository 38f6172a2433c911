//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the quiz runs without a config file.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub round: RoundConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Reject values that would leave the quiz unplayable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.round.length == 0 {
            return Err(ConfigError::EmptyRound);
        }
        if self.timing.feedback_delay_ms == 0 {
            return Err(ConfigError::ZeroDelay("timing.feedback_delay_ms"));
        }
        if self.timing.restart_delay_ms == 0 {
            return Err(ConfigError::ZeroDelay("timing.restart_delay_ms"));
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("round.length must be at least 1")]
    EmptyRound,
    #[error("{0} must be greater than zero")]
    ZeroDelay(&'static str),
}

/// Round rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Questions answered before the completion screen.
    #[serde(default = "default_round_length")]
    pub length: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            length: default_round_length(),
        }
    }
}

/// Delays for the two timed transitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// How long answer feedback stays up before the next question.
    #[serde(default = "default_feedback_delay")]
    pub feedback_delay_ms: u64,
    /// How long the completion screen stays up before a new round.
    #[serde(default = "default_restart_delay")]
    pub restart_delay_ms: u64,
}

impl TimingConfig {
    pub fn feedback_delay(&self) -> Duration {
        Duration::from_millis(self.feedback_delay_ms)
    }

    pub fn restart_delay(&self) -> Duration {
        Duration::from_millis(self.restart_delay_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            feedback_delay_ms: default_feedback_delay(),
            restart_delay_ms: default_restart_delay(),
        }
    }
}

/// UI appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_explanations: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_explanations: true,
        }
    }
}

/// Diagnostic log settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `tracing_subscriber::EnvFilter` directive, e.g. `"debug"`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_round_length() -> u32 {
    crate::quiz::session::DEFAULT_ROUND_LENGTH
}
fn default_feedback_delay() -> u64 {
    3000
}
fn default_restart_delay() -> u64 {
    5000
}
fn default_true() -> bool {
    true
}
fn default_log_dir() -> String {
    "~/.local/share/crabquiz/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
