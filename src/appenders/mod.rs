//! Appender implementations
//!
//! Each module owns one sink kind; the factory maps configured type strings
//! onto them. Unknown type strings come back as `None` so the loader can
//! warn and skip the element.

pub mod console;
pub mod file;
pub mod rolling_file;

pub use console::ConsoleAppender;
pub use file::FileAppender;
pub use rolling_file::RollingFileAppender;

pub use crate::core::appender::{Append, Appender, AppenderRef};

use crate::config::Properties;

/// Factory lookup by configured type string.
pub(crate) fn create(kind: &str, properties: &Properties) -> Option<Box<dyn Append>> {
    match kind {
        "console" | "consoleAppender" => Some(Box::new(ConsoleAppender::new())),
        "file" | "fileAppender" => Some(Box::new(FileAppender::from_properties(properties))),
        "rollingFile" | "rollingFileAppender" => {
            Some(Box::new(RollingFileAppender::from_properties(properties)))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_kinds() {
        let properties = Properties::default();
        assert!(create("console", &properties).is_some());
        assert!(create("consoleAppender", &properties).is_some());
        assert!(create("file", &properties).is_some());
        assert!(create("rollingFileAppender", &properties).is_some());
    }

    #[test]
    fn test_factory_unknown_kind() {
        assert!(create("syslog", &Properties::default()).is_none());
        assert!(create("", &Properties::default()).is_none());
    }
}
