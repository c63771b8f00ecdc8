//! Logging macros
//!
//! Each macro resolves the logger named after the call site's module path,
//! checks the severity gate before formatting, and fans the record out. The
//! gate check first means a suppressed call costs one name resolution and
//! no allocation for the message.

/// Log at an explicit level through a registry handle.
#[macro_export]
macro_rules! log {
    ($registry:expr, $level:expr, $($arg:tt)+) => {{
        let logger = $registry.resolve(&$crate::logger_name_from_signature(module_path!()));
        if logger.enabled($level) {
            let record = $crate::LogRecord::new($level, file!(), line!(), module_path!())
                .with_text(format!($($arg)+));
            logger.write_line(&record);
        }
    }};
}

/// Log at [`LogLevel::Fatal`](crate::LogLevel::Fatal).
#[macro_export]
macro_rules! fatal {
    ($registry:expr, $($arg:tt)+) => {
        $crate::log!($registry, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Log at [`LogLevel::Error`](crate::LogLevel::Error).
#[macro_export]
macro_rules! error {
    ($registry:expr, $($arg:tt)+) => {
        $crate::log!($registry, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log at [`LogLevel::Warn`](crate::LogLevel::Warn).
#[macro_export]
macro_rules! warn {
    ($registry:expr, $($arg:tt)+) => {
        $crate::log!($registry, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log at [`LogLevel::Info`](crate::LogLevel::Info).
#[macro_export]
macro_rules! info {
    ($registry:expr, $($arg:tt)+) => {
        $crate::log!($registry, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log at [`LogLevel::Debug`](crate::LogLevel::Debug).
#[macro_export]
macro_rules! debug {
    ($registry:expr, $($arg:tt)+) => {
        $crate::log!($registry, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log at [`LogLevel::Trace`](crate::LogLevel::Trace).
#[macro_export]
macro_rules! trace {
    ($registry:expr, $($arg:tt)+) => {
        $crate::log!($registry, $crate::LogLevel::Trace, $($arg)+)
    };
}
