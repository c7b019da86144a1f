//! Log level preference for the Jamf Pro SDK.
//!
//! The SDK itself only emits `tracing` events; this value is a preference
//! carried in [`JamfConfig`](super::JamfConfig) so applications (and the demo
//! programs) can install a matching subscriber filter.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How verbose the application wants SDK logging to be.
///
/// # Example
///
/// ```rust
/// use jamfpro::LogLevel;
///
/// let level: LogLevel = "LogLevelDebug".parse().unwrap();
/// assert_eq!(level, LogLevel::Debug);
/// assert_eq!(level.as_filter(), "debug");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LogLevel {
    /// No SDK logging.
    None,
    /// Errors only.
    Error,
    /// Warnings and errors.
    #[default]
    Warn,
    /// Informational messages.
    Info,
    /// Everything, including per-request debug events.
    Debug,
}

impl LogLevel {
    /// Returns the `tracing-subscriber` filter directive for this level.
    #[must_use]
    pub const fn as_filter(&self) -> &'static str {
        match self {
            Self::None => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    /// Accepts plain names (`debug`) as well as the `LogLevelDebug` spelling
    /// used in client-config files.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let normalized = normalized.strip_prefix("loglevel").unwrap_or(&normalized);

        match normalized {
            "none" | "off" => Ok(Self::None),
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            _ => Err(ConfigError::InvalidLogLevel {
                level: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, ConfigError> {
        value.parse()
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.as_filter().to_string()
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_filter())
    }
}
