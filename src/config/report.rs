//! Reporting configuration for locally recovered errors.

use super::{parse_env_bool, parse_env_var, Config};
use crate::error::{ArrayError, Result};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Log level used when a recovered error is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportLevel {
    /// `log::Level::Error`
    Error,
    /// `log::Level::Warn`
    Warn,
    /// `log::Level::Info`
    Info,
    /// `log::Level::Debug`
    Debug,
    /// `log::Level::Trace`
    Trace,
}

impl ReportLevel {
    /// Map to the `log` facade level.
    pub fn to_log_level(self) -> log::Level {
        match self {
            Self::Error => log::Level::Error,
            Self::Warn => log::Level::Warn,
            Self::Info => log::Level::Info,
            Self::Debug => log::Level::Debug,
            Self::Trace => log::Level::Trace,
        }
    }
}

impl Default for ReportLevel {
    fn default() -> Self {
        Self::Warn
    }
}

impl FromStr for ReportLevel {
    type Err = ArrayError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            other => Err(ArrayError::configuration(format!(
                "unknown report level '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for ReportLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(name)
    }
}

/// Controls how recovered errors are written to the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Emit a log record for every recovered error
    pub enabled: bool,
    /// Level of the emitted record
    pub level: ReportLevel,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: ReportLevel::Warn,
        }
    }
}

impl Config for ReportConfig {
    fn validate(&self) -> Result<()> {
        // every combination of switch and level is usable
        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.enabled = parse_env_bool(&format!("{}REPORT_ENABLED", prefix), config.enabled);
        config.level = parse_env_var(&format!("{}REPORT_LEVEL", prefix), config.level);
        config.validate()?;
        Ok(config)
    }

    fn quiet_preset() -> Self {
        Self {
            enabled: false,
            level: ReportLevel::Warn,
        }
    }

    fn verbose_preset() -> Self {
        Self {
            enabled: true,
            level: ReportLevel::Info,
        }
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self).map_err(|e| {
            ArrayError::configuration(format!("Failed to serialize report config: {}", e))
        })?;
        std::fs::write(path, serialized).map_err(|e| {
            ArrayError::configuration(format!("Failed to write report config file: {}", e))
        })?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ArrayError::configuration(format!("Failed to read report config file: {}", e))
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            ArrayError::configuration(format!("Failed to parse report config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }
}

static REPORT: Lazy<RwLock<ReportConfig>> = Lazy::new(|| RwLock::new(ReportConfig::default()));

/// Snapshot of the process-wide report configuration.
pub fn report_config() -> ReportConfig {
    REPORT.read().clone()
}

/// Validate and install a process-wide report configuration.
pub fn set_report_config(config: ReportConfig) -> Result<()> {
    config.validate()?;
    log::debug!(
        "report config: enabled={} level={}",
        config.enabled,
        config.level
    );
    *REPORT.write() = config;
    Ok(())
}
