//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ROLLING_WINDOW_MONTHS, DEFAULT_ROSTER_DAYS};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ledger: LedgerConfig,
    #[serde(default)]
    pub roster: RosterConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Overtime ledger configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Number of month buckets in the rolling evolution.
    pub rolling_window_months: u32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self { rolling_window_months: DEFAULT_ROLLING_WINDOW_MONTHS }
    }
}

/// Roster configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Days covered by a roster when the caller does not say otherwise.
    pub default_days: u32,
    /// Rotation patterns registered on top of the built-in ones.
    #[serde(default)]
    pub patterns: Vec<PatternDefinition>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self { default_days: DEFAULT_ROSTER_DAYS, patterns: Vec::new() }
    }
}

/// A rotation rule: `cycle_length` days, on duty at the listed offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternDefinition {
    pub name: String,
    pub cycle_length: u32,
    pub working_offsets: Vec<u32>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive; `RUST_LOG` takes precedence.
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}
