//! Configuration APIs for exactvec
//!
//! The container itself has no tunables; what can be configured is how the
//! library reports the errors it recovers from locally.
//!
//! # Configuration Traits
//!
//! The [`Config`] trait provides validation, environment initialization,
//! presets and JSON file persistence for configuration types.
//!
//! # Environment Initialization
//!
//! ```rust
//! use exactvec::config::{Config, ReportConfig};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads EXACTVEC_REPORT_ENABLED and EXACTVEC_REPORT_LEVEL
//! let config = ReportConfig::from_env()?;
//!
//! // Same fields with a custom prefix
//! let config = ReportConfig::from_env_with_prefix("MYAPP_")?;
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use std::env;
use std::fmt;
use std::path::Path;

pub mod report;


pub use report::{report_config, set_report_config, ReportConfig, ReportLevel};

/// Common configuration trait providing validation, environment initialization,
/// and preset management functionality.
pub trait Config: Clone + fmt::Debug {
    /// Validate the configuration for correctness and consistency.
    fn validate(&self) -> Result<()>;

    /// Initialize configuration from environment variables.
    ///
    /// Environment variables use the format `EXACTVEC_{COMPONENT}_{FIELD}`,
    /// for example `EXACTVEC_REPORT_LEVEL=debug`.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix("EXACTVEC_")
    }

    /// Initialize configuration from environment variables with a custom prefix.
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Preset that keeps the library silent.
    fn quiet_preset() -> Self;

    /// Preset that reports as much as possible.
    fn verbose_preset() -> Self;

    /// Save configuration to a JSON file.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Load and validate configuration from a JSON file.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

/// Parse an environment variable, falling back to `default` when it is unset
/// or does not parse.
pub fn parse_env_var<T>(var_name: &str, default: T) -> T
where
    T: std::str::FromStr + Clone,
{
    env::var(var_name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Parse a boolean environment variable.
///
/// Accepts: "true", "1", "yes", "on" (case-insensitive) as true,
/// everything else as false.
pub fn parse_env_bool(var_name: &str, default: bool) -> bool {
    env::var(var_name)
        .ok()
        .map(|s| {
            let s = s.to_lowercase();
            matches!(s.as_str(), "true" | "1" | "yes" | "on")
        })
        .unwrap_or(default)
}
