//! Log record structure

use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use std::cell::RefCell;

// Thread-local cache for the thread identifier to avoid repeated allocations
thread_local! {
    static THREAD_ID_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Get cached thread ID, computing and caching it on first access
fn get_thread_id() -> String {
    THREAD_ID_CACHE.with(|cache| {
        let mut cache = cache.borrow_mut();
        if cache.is_none() {
            *cache = Some(format!("{:?}", std::thread::current().id()));
        }
        cache
            .as_ref()
            .expect("thread_id cache initialized in previous line")
            .clone()
    })
}

/// Derive a dotted logger name from a `::`-separated call-site signature.
///
/// Only the last three components are kept: function, enclosing class and
/// module. `"app::net::Session::connect"` therefore resolves to the logger
/// name `"net.Session.connect"`.
#[must_use]
pub fn logger_name_from_signature(signature: &str) -> String {
    let (module, class, function) = split_signature(signature);

    let mut name = String::new();
    if !module.is_empty() {
        name.push_str(module);
        name.push('.');
    }
    if !class.is_empty() {
        name.push_str(class);
        name.push('.');
    }
    name.push_str(function);
    name
}

/// Split a signature into (module, class, function) components.
///
/// Signatures from C-style sources may carry a return type and parameter
/// list (`"void app::Session::connect( int )"`); everything outside the
/// qualified name is discarded before splitting on `::`.
fn split_signature(signature: &str) -> (&str, &str, &str) {
    let mut qualified = signature;

    // strip the parameter list and anything before the last space ahead of it
    if let Some(end) = qualified.find('(') {
        let begin = qualified[..end].rfind(' ').map_or(0, |pos| pos + 1);
        qualified = &qualified[begin..end];
    }

    let mut components = qualified.rsplit("::");
    let function = components.next().unwrap_or("");
    let class = components.next().unwrap_or("");
    let module = components.next().unwrap_or("");
    (module, class, function)
}

/// One emitted log line, immutable after construction apart from its text.
///
/// Created at the log call site, consumed by exactly one logger, then
/// discarded. Text may be appended only before the record reaches a sink.
#[derive(Debug, Clone)]
pub struct LogRecord {
    level: LogLevel,
    module: String,
    class: String,
    function: String,
    file: String,
    line: u32,
    timestamp: DateTime<Utc>,
    thread_id: String,
    text: String,
}

impl LogRecord {
    /// Sanitize log text to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// to prevent attackers from injecting fake log entries.
    fn sanitize(text: &str) -> String {
        text.replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    /// Build a record from call-site data.
    ///
    /// `signature` is a `::`-separated call-site signature, typically
    /// `module_path!()`. The level is clamped into `[Fatal, Trace]`; the
    /// sentinels are thresholds only.
    pub fn new(level: LogLevel, file: &str, line: u32, signature: &str) -> Self {
        let (module, class, function) = split_signature(signature);

        Self {
            level: level.clamp_record(),
            module: module.to_string(),
            class: class.to_string(),
            function: function.to_string(),
            file: file.to_string(),
            line,
            timestamp: Utc::now(),
            thread_id: get_thread_id(),
            text: String::new(),
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: impl AsRef<str>) -> Self {
        self.text = Self::sanitize(text.as_ref());
        self
    }

    /// Append to the record text. Valid only before the record is handed
    /// to a sink.
    pub fn append_text(&mut self, text: impl AsRef<str>) {
        self.text.push_str(&Self::sanitize(text.as_ref()));
    }

    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Dotted logger name this record resolves against.
    #[must_use]
    pub fn logger_name(&self) -> String {
        let mut name = String::new();
        if !self.module.is_empty() {
            name.push_str(&self.module);
            name.push('.');
        }
        if !self.class.is_empty() {
            name.push_str(&self.class);
            name.push('.');
        }
        name.push_str(&self.function);
        name
    }

    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }

    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }

    #[must_use]
    pub fn function(&self) -> &str {
        &self.function
    }

    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    #[must_use]
    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_split() {
        let record = LogRecord::new(LogLevel::Info, "server.rs", 10, "app::net::Session::connect");
        assert_eq!(record.module(), "net");
        assert_eq!(record.class(), "Session");
        assert_eq!(record.function(), "connect");
        assert_eq!(record.logger_name(), "net.Session.connect");
    }

    #[test]
    fn test_signature_short_forms() {
        let record = LogRecord::new(LogLevel::Info, "main.rs", 1, "main");
        assert_eq!(record.logger_name(), "main");
        assert_eq!(record.module(), "");
        assert_eq!(record.class(), "");

        let record = LogRecord::new(LogLevel::Info, "lib.rs", 1, "app::run");
        assert_eq!(record.logger_name(), "app.run");
    }

    #[test]
    fn test_signature_with_parameter_list() {
        let record = LogRecord::new(
            LogLevel::Debug,
            "session.cpp",
            42,
            "void app::Session::connect( int port )",
        );
        assert_eq!(record.logger_name(), "app.Session.connect");
    }

    #[test]
    fn test_level_clamped() {
        let record = LogRecord::new(LogLevel::Disabled, "a.rs", 1, "a");
        assert_eq!(record.level(), LogLevel::Fatal);

        let record = LogRecord::new(LogLevel::Everything, "a.rs", 1, "a");
        assert_eq!(record.level(), LogLevel::Trace);
    }

    #[test]
    fn test_text_sanitized() {
        let record = LogRecord::new(LogLevel::Info, "a.rs", 1, "a")
            .with_text("line one\nFAKE entry\tdone");
        assert_eq!(record.text(), "line one\\nFAKE entry\\tdone");
    }

    #[test]
    fn test_append_text() {
        let mut record = LogRecord::new(LogLevel::Info, "a.rs", 1, "a").with_text("status=");
        record.append_text("ok");
        assert_eq!(record.text(), "status=ok");
    }

    #[test]
    fn test_logger_name_from_signature() {
        assert_eq!(logger_name_from_signature("relog::core::registry"), "relog.core.registry");
        assert_eq!(logger_name_from_signature("main"), "main");
    }
}
