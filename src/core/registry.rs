//! Logger registry: configuration load, name resolution, hot reload
//!
//! The registry owns the active configuration generation (appender table,
//! logger table, root logger) behind one reader-writer lock. Reload builds a
//! replacement generation and swaps it in atomically; stale loggers held by
//! in-flight writers keep working against weak appender references until
//! they drain.

use super::appender::Appender;
use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::logger::Logger;
use super::monitor::ConfigMonitor;
use super::record::LogRecord;
use crate::config::{ConfigDocument, LoggerElement};
use crate::{appenders, layouts};
use parking_lot::{Mutex, RwLock};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

/// How often the monitor re-checks the configuration source by default.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5);

/// When the change-detection baseline advances during reload.
///
/// `Always` records the source's current mtime and size even when it fails
/// to parse, so a broken file is reported once rather than every poll.
/// `OnSuccess` keeps the old baseline on failure, retrying the same file
/// until it parses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReloadBaseline {
    #[default]
    Always,
    OnSuccess,
}

/// Match a logger name against a pattern containing `*` (any run of
/// characters, including none) and `?` (exactly one character).
#[must_use]
pub fn wildcard_match(pattern: &str, name: &str) -> bool {
    let Some(head) = pattern.chars().next() else {
        return name.is_empty();
    };
    let rest = &pattern[head.len_utf8()..];

    match head {
        '*' => {
            wildcard_match(rest, name)
                || name
                    .chars()
                    .next()
                    .is_some_and(|c| wildcard_match(pattern, &name[c.len_utf8()..]))
        }
        '?' => name
            .chars()
            .next()
            .is_some_and(|c| wildcard_match(rest, &name[c.len_utf8()..])),
        literal => name
            .chars()
            .next()
            .is_some_and(|c| c == literal && wildcard_match(rest, &name[c.len_utf8()..])),
    }
}

/// One loaded configuration: the appender table (sole strong references),
/// the named logger table in declaration order, and the root logger.
struct Generation {
    appenders: BTreeMap<String, Arc<Appender>>,
    loggers: Vec<(String, Arc<Logger>)>,
    root: Arc<Logger>,
}

impl Generation {
    fn empty() -> Self {
        Self {
            appenders: BTreeMap::new(),
            loggers: Vec::new(),
            root: Arc::new(Logger::new()),
        }
    }

    /// Flush and close every appender in this generation.
    fn close_appenders(&self) {
        for appender in self.appenders.values() {
            appender.close();
        }
    }

    /// Build a generation from a parsed document.
    ///
    /// Malformed elements are warned about and skipped; an element-level
    /// problem never fails the whole load. Appenders that fail to open stay
    /// in the table unopened, so their writes drop silently.
    fn build(document: &ConfigDocument) -> Self {
        let mut appenders = BTreeMap::new();

        for element in &document.appenders {
            let Some(name) = element.name.as_deref() else {
                warn(&LoggerError::element("appender", "missing 'name' attribute"));
                continue;
            };
            let Some(kind) = element.kind.as_deref() else {
                warn(&LoggerError::element(name, "missing 'type' attribute"));
                continue;
            };
            let Some(sink) = appenders::create(kind, &element.properties) else {
                warn(&LoggerError::unknown_type("appender", kind));
                continue;
            };

            let layout = match &element.layout {
                Some(layout_element) => layouts::create(layout_element).unwrap_or_else(|| {
                    let kind = layout_element.kind.as_deref().unwrap_or("<missing>");
                    warn(&LoggerError::unknown_type("layout", kind));
                    layouts::Layout::Basic
                }),
                None => layouts::Layout::Basic,
            };

            let appender = Appender::new(name, sink, layout);
            if let Err(e) = appender.open() {
                warn(&e);
            }
            appenders.insert(name.to_string(), appender);
        }

        let root = Arc::new(build_logger(
            document.root.as_ref(),
            &appenders,
        ));

        let mut loggers = Vec::with_capacity(document.loggers.len());
        for element in &document.loggers {
            let Some(name) = element.name.as_deref() else {
                warn(&LoggerError::element("logger", "missing 'name' attribute"));
                continue;
            };
            loggers.push((
                name.to_string(),
                Arc::new(build_logger(Some(element), &appenders)),
            ));
        }

        Self {
            appenders,
            loggers,
            root,
        }
    }
}

fn build_logger(
    element: Option<&LoggerElement>,
    appenders: &BTreeMap<String, Arc<Appender>>,
) -> Logger {
    let logger = Logger::new();
    let Some(element) = element else {
        return logger;
    };

    let level = element
        .level
        .as_deref()
        .and_then(|text| text.parse().ok())
        .unwrap_or(LogLevel::Disabled);
    logger.set_level(level);

    let references = element
        .appender_refs
        .iter()
        .filter_map(|name| match appenders.get(name) {
            Some(appender) => Some(Arc::downgrade(appender)),
            None => {
                warn(&LoggerError::element(
                    name.as_str(),
                    "appender-ref does not name a configured appender",
                ));
                None
            }
        })
        .collect();
    logger.set_appenders(references);
    logger
}

fn warn(error: &LoggerError) {
    eprintln!("[RELOG WARNING] {error}");
}

/// Change-detection baseline for the configuration source.
struct Source {
    path: PathBuf,
    modified: Option<SystemTime>,
    size: u64,
}

/// Stat the source file; unreadable files report as (None, 0), which still
/// compares unequal to any real baseline and triggers a reload attempt.
fn stat_source(path: &Path) -> (Option<SystemTime>, u64) {
    match std::fs::metadata(path) {
        Ok(metadata) => (metadata.modified().ok(), metadata.len()),
        Err(_) => (None, 0),
    }
}

struct State {
    generation: Generation,
    source: Option<Source>,
}

/// Registry internals shared with the monitor thread.
pub(crate) struct Shared {
    state: RwLock<State>,
    refresh_interval: Mutex<Duration>,
    baseline: ReloadBaseline,
}

impl Shared {
    fn new(baseline: ReloadBaseline) -> Self {
        Self {
            state: RwLock::new(State {
                generation: Generation::empty(),
                source: None,
            }),
            refresh_interval: Mutex::new(DEFAULT_REFRESH_INTERVAL),
            baseline,
        }
    }

    /// Resolve a logger name: first declared pattern that matches wins;
    /// no match falls back to the root logger.
    fn resolve(&self, name: &str) -> Arc<Logger> {
        let state = self.state.read();
        for (pattern, logger) in &state.generation.loggers {
            if wildcard_match(pattern, name) {
                return Arc::clone(logger);
            }
        }
        Arc::clone(&state.generation.root)
    }

    /// Adopt a configuration source and load it.
    ///
    /// Re-configuring with the path already in use is a no-op; use
    /// [`Shared::reload`] to force a re-read.
    fn configure(&self, path: &Path) -> Result<()> {
        let mut state = self.state.write();

        if state
            .source
            .as_ref()
            .is_some_and(|source| source.path == path)
        {
            return Ok(());
        }

        let document = ConfigDocument::from_path(path)?;
        let (modified, size) = stat_source(path);

        state.generation.close_appenders();
        state.generation = Generation::build(&document);
        state.source = Some(Source {
            path: path.to_path_buf(),
            modified,
            size,
        });
        Ok(())
    }

    /// Re-read the configured source and swap in a fresh generation.
    ///
    /// On parse failure the active generation stays in place; whether the
    /// change baseline advances anyway depends on the configured
    /// [`ReloadBaseline`].
    fn reload(&self) -> Result<()> {
        let mut state = self.state.write();

        let Some(source) = state.source.as_ref() else {
            return Err(LoggerError::NoSource);
        };
        let path = source.path.clone();

        let (modified, size) = stat_source(&path);
        let parsed = ConfigDocument::from_path(&path);

        if parsed.is_ok() || self.baseline == ReloadBaseline::Always {
            state.source = Some(Source {
                path,
                modified,
                size,
            });
        }

        let document = parsed?;
        state.generation.close_appenders();
        state.generation = Generation::build(&document);
        Ok(())
    }

    /// One monitor pass: reload when the source's mtime or size moved off
    /// the baseline. Reload errors were already reported when recorded.
    pub(crate) fn poll_source(&self) {
        let snapshot = {
            let state = self.state.read();
            state
                .source
                .as_ref()
                .map(|source| (source.path.clone(), source.modified, source.size))
        };
        let Some((path, modified, size)) = snapshot else {
            return;
        };

        let (current_modified, current_size) = stat_source(&path);
        if current_modified == modified && current_size == size {
            return;
        }

        if let Err(e) = self.reload() {
            warn(&e);
        }
    }

    pub(crate) fn refresh_interval(&self) -> Duration {
        *self.refresh_interval.lock()
    }

    fn set_refresh_interval(&self, interval: Duration) {
        *self.refresh_interval.lock() = interval;
    }

    /// Close every appender and drop the source; the registry returns to its
    /// initial empty state.
    fn close_all(&self) {
        let mut state = self.state.write();
        state.generation.close_appenders();
        state.generation = Generation::empty();
        state.source = None;
    }
}

/// The top-level logging runtime: configuration registry, name resolution,
/// and the background source monitor.
///
/// Resolution is read-locked and cheap; reload takes the write lock for the
/// duration of one build and swap. Dropping the registry stops the monitor
/// and closes all appenders.
pub struct LoggerRegistry {
    shared: Arc<Shared>,
    monitor: Mutex<Option<ConfigMonitor>>,
}

impl LoggerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::with_baseline(ReloadBaseline::default())
    }

    /// Build a registry with an explicit reload-baseline policy.
    #[must_use]
    pub fn with_baseline(baseline: ReloadBaseline) -> Self {
        let shared = Arc::new(Shared::new(baseline));
        let monitor = ConfigMonitor::spawn(Arc::clone(&shared));
        Self {
            shared,
            monitor: Mutex::new(Some(monitor)),
        }
    }

    /// Load configuration from a file and start tracking it for changes.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed; the current
    /// configuration stays active in that case.
    pub fn configure<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.shared.configure(path.as_ref())
    }

    /// Force a re-read of the configured source.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::NoSource`] before any [`Self::configure`]
    /// call, or a parse error when the source no longer parses.
    pub fn reload(&self) -> Result<()> {
        self.shared.reload()
    }

    /// Look up the logger for a dotted name. Never fails; unmatched names
    /// resolve to the root logger.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Arc<Logger> {
        self.shared.resolve(name)
    }

    /// Resolve the record's logger name and write through it.
    pub fn emit(&self, record: &LogRecord) {
        self.resolve(&record.logger_name()).write_line(record);
    }

    #[must_use]
    pub fn refresh_interval(&self) -> Duration {
        self.shared.refresh_interval()
    }

    /// Change how often the monitor polls the source. Takes effect on the
    /// monitor's next wakeup.
    pub fn set_refresh_interval(&self, interval: Duration) {
        self.shared.set_refresh_interval(interval);
    }

    /// Stop the monitor thread, then close every appender.
    ///
    /// The monitor stops first so no reload can resurrect appenders after
    /// they flush. Idempotent.
    pub fn shutdown(&self) {
        if let Some(mut monitor) = self.monitor.lock().take() {
            monitor.stop();
        }
        self.shared.close_all();
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LoggerRegistry {
    fn drop(&mut self) {
        self.shutdown();
    }
}
