//! Configuration loader
//!
//! Loads application configuration from a file and environment variables.
//!
//! ## Loading Strategy
//! 1. Probes the standard locations for a config file
//! 2. Falls back to built-in defaults when no file exists
//! 3. Applies environment variable overrides on top
//! 4. Builds the rotation pattern table once to reject bad definitions
//!    and range-checks the rolling window
//!
//! ## Environment Variables
//! - `PLANTAO_ROLLING_WINDOW_MONTHS`: Months in the rolling evolution
//! - `PLANTAO_ROSTER_DAYS`: Default roster length in days
//! - `PLANTAO_LOG_LEVEL`: Default `tracing` filter directive
//! - `PLANTAO_LOG_JSON`: JSON log output (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./plantao.json` or `./plantao.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. The same names in the parent and grandparent directories
//! 4. The same names next to the executable

use std::path::{Path, PathBuf};

use plantao_core::PatternRegistry;
use plantao_domain::constants::MAX_ROLLING_WINDOW_MONTHS;
use plantao_domain::{Config, PlantaoError, Result};

const FILE_NAMES: [&str; 4] = ["plantao.json", "plantao.toml", "config.json", "config.toml"];

/// Load configuration: file (if any), then environment overrides.
///
/// # Errors
/// Returns `PlantaoError::Config` for unreadable or malformed files, invalid
/// environment values, invalid rotation pattern definitions and an
/// out-of-range rolling window.
pub fn load() -> Result<Config> {
    let base = match probe_config_paths() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    let config = apply_env_overrides(base)?;
    validate(&config)?;
    Ok(config)
}

/// Defaults with environment variable overrides applied.
///
/// # Errors
/// Returns `PlantaoError::Config` when a variable is set to an invalid value.
pub fn load_from_env() -> Result<Config> {
    let config = apply_env_overrides(Config::default())?;
    validate(&config)?;
    tracing::info!("Configuration loaded from environment variables");
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. JSON and TOML are
/// supported, detected by file extension. Missing sections fall back to
/// their defaults.
///
/// # Errors
/// Returns `PlantaoError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(PlantaoError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            PlantaoError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| PlantaoError::Config(format!("Failed to read config file: {e}")))?;

    let config = parse_config(&contents, &config_path)?;
    validate(&config)?;
    Ok(config)
}

/// Overwrite fields of `config` with any `PLANTAO_*` variables that are set.
///
/// # Errors
/// Returns `PlantaoError::Config` when a numeric variable does not parse.
pub fn apply_env_overrides(mut config: Config) -> Result<Config> {
    if let Some(months) = env_number("PLANTAO_ROLLING_WINDOW_MONTHS")? {
        config.ledger.rolling_window_months = months;
    }
    if let Some(days) = env_number("PLANTAO_ROSTER_DAYS")? {
        config.roster.default_days = days;
    }
    if let Some(level) = env_string("PLANTAO_LOG_LEVEL") {
        config.logging.level = level;
    }
    config.logging.json = env_bool("PLANTAO_LOG_JSON", config.logging.json);

    Ok(config)
}

/// Probe the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd.clone());
        dirs.push(cwd.join(".."));
        dirs.push(cwd.join("../.."));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| PlantaoError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| PlantaoError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(PlantaoError::Config(format!("Unsupported config format: {extension}"))),
    }
}

fn validate(config: &Config) -> Result<()> {
    let months = config.ledger.rolling_window_months;
    if months > MAX_ROLLING_WINDOW_MONTHS {
        return Err(PlantaoError::Config(format!(
            "rolling_window_months must be at most {MAX_ROLLING_WINDOW_MONTHS}, got {months}"
        )));
    }

    PatternRegistry::from_config(&config.roster)
        .map(|_| ())
        .map_err(|e| match e {
            PlantaoError::Validation(msg) => PlantaoError::Config(msg),
            other => other,
        })
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn env_number(key: &str) -> Result<Option<u32>> {
    env_string(key)
        .map(|s| {
            s.parse::<u32>()
                .map_err(|e| PlantaoError::Config(format!("Invalid value for {key}: {e}")))
        })
        .transpose()
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    env_string(key)
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
