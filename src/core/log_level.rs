//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity threshold for loggers and records.
///
/// Lower discriminants are more severe. `Disabled` and `Everything` are
/// sentinel thresholds only; record construction clamps its level into
/// `[Fatal, Trace]` so neither sentinel is ever attached to a real record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
pub enum LogLevel {
    /// No logging. A logger at this threshold enables nothing.
    #[default]
    Disabled = 0,
    Fatal = 1,
    Error = 2,
    Warn = 3,
    Info = 4,
    Debug = 5,
    Trace = 6,
    /// Log everything. Threshold use only.
    Everything = 7,
}

impl LogLevel {
    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Disabled => "DISABLED",
            LogLevel::Fatal => "FATAL",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
            LogLevel::Everything => "EVERYTHING",
        }
    }

    /// Numeric form used by the `%levelnum` layout token.
    #[must_use]
    pub fn as_number(self) -> u8 {
        self as u8
    }

    /// Clamp into the range usable on a real record.
    #[must_use]
    pub(crate) fn clamp_record(self) -> Self {
        match self {
            LogLevel::Disabled => LogLevel::Fatal,
            LogLevel::Everything => LogLevel::Trace,
            other => other,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DISABLED" | "OFF" | "NONE" => Ok(LogLevel::Disabled),
            "FATAL" => Ok(LogLevel::Fatal),
            "ERROR" => Ok(LogLevel::Error),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            "TRACE" => Ok(LogLevel::Trace),
            "EVERYTHING" | "ALL" => Ok(LogLevel::Everything),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
