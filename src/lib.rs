//! # Relog
//!
//! A reconfigurable logging runtime: named loggers resolved through
//! wildcard patterns, thread-safe fan-out to shared appenders, and
//! hot reload of a JSON configuration file watched by a background monitor.
//!
//! ## Quick start
//!
//! ```no_run
//! use relog::LoggerRegistry;
//!
//! fn main() -> relog::Result<()> {
//!     let registry = LoggerRegistry::new();
//!     registry.configure("relog.json")?;
//!
//!     relog::info!(registry, "listening on port {}", 8080);
//!
//!     registry.shutdown();
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`core::registry::LoggerRegistry`] owns the configuration: the appender
//!   table holds the only strong references, loggers hold weak ones.
//! - Reload builds a fresh generation and swaps it atomically; in-flight
//!   writers drain against the old one.
//! - A background thread polls the configuration file's mtime and size and
//!   reloads on change.
//!
//! The process-wide instance in [`global`] serves call sites that do not
//! want to thread a registry handle around.

pub mod appenders;
pub mod config;
pub mod core;
pub mod global;
pub mod layouts;
pub mod macros;

pub use crate::core::{
    logger_name_from_signature, wildcard_match, Append, Appender, AppenderRef, LogLevel,
    LogRecord, Logger, LoggerError, LoggerRegistry, ReloadBaseline, Result,
    DEFAULT_REFRESH_INTERVAL,
};

/// Commonly used types for glob import.
pub mod prelude {
    pub use crate::core::{
        LogLevel, LogRecord, Logger, LoggerError, LoggerRegistry, ReloadBaseline, Result,
    };
    pub use crate::{debug, error, fatal, info, log, trace, warn};
}
