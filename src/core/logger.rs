//! Named severity gate with thread-safe appender fan-out

use super::appender::AppenderRef;
use super::log_level::LogLevel;
use super::record::LogRecord;
use parking_lot::RwLock;

/// A named severity gate plus an ordered list of non-owning appender
/// references.
///
/// Loggers are created wholesale during configuration load and replaced
/// wholesale on reload; the setters exist for the load path only. The
/// appender list is guarded independently of the registry's generation lock
/// so a fan-out snapshot is never torn by a concurrent reload.
pub struct Logger {
    level: RwLock<LogLevel>,
    appenders: RwLock<Vec<AppenderRef>>,
}

impl Logger {
    /// New logger with nothing enabled and no appenders.
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: RwLock::new(LogLevel::Disabled),
            appenders: RwLock::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    pub fn set_level(&self, level: LogLevel) {
        *self.level.write() = level;
    }

    /// Whether a record at `level` would be written.
    #[inline]
    #[must_use]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level <= self.level()
    }

    /// Snapshot of the appender reference list.
    #[must_use]
    pub fn appenders(&self) -> Vec<AppenderRef> {
        self.appenders.read().clone()
    }

    pub fn set_appenders(&self, appenders: Vec<AppenderRef>) {
        *self.appenders.write() = appenders;
    }

    /// Fan a record out to every live appender.
    ///
    /// The reference list is snapshotted under the lock, then released
    /// before any I/O. A reference that no longer resolves was destroyed by
    /// a concurrent reload; it is skipped silently since this logger
    /// instance is itself stale and about to be replaced.
    pub fn write_line(&self, record: &LogRecord) {
        if !self.enabled(record.level()) {
            return;
        }

        let appenders = self.appenders();

        for reference in &appenders {
            if let Some(appender) = reference.upgrade() {
                appender.write_record(record);
            }
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
