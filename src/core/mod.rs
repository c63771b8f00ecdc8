//! Core logging runtime components

pub mod appender;
pub mod error;
pub mod log_level;
pub mod logger;
pub(crate) mod monitor;
pub mod record;
pub mod registry;

pub use appender::{Append, Appender, AppenderRef};
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use logger::Logger;
pub use record::{logger_name_from_signature, LogRecord};
pub use registry::{
    wildcard_match, LoggerRegistry, ReloadBaseline, DEFAULT_REFRESH_INTERVAL,
};
