//! Process-wide registry instance
//!
//! The logging macros route through one shared registry so call sites need
//! no handle of their own. The instance is created lazily on first use and
//! can be torn down explicitly with [`finalize`] before process exit.

use crate::core::error::Result;
use crate::core::registry::LoggerRegistry;
use parking_lot::Mutex;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

static INSTANCE: Mutex<Option<Arc<LoggerRegistry>>> = Mutex::new(None);

/// Handle to the process-wide registry, creating it on first use.
#[must_use]
pub fn instance() -> Arc<LoggerRegistry> {
    let mut guard = INSTANCE.lock();
    Arc::clone(guard.get_or_insert_with(|| Arc::new(LoggerRegistry::new())))
}

/// Configure the process-wide registry from a file.
///
/// # Errors
///
/// Returns an error when the file cannot be read or parsed.
pub fn init<P: AsRef<Path>>(path: P) -> Result<()> {
    instance().configure(path)
}

#[must_use]
pub fn refresh_interval() -> Duration {
    instance().refresh_interval()
}

pub fn set_refresh_interval(interval: Duration) {
    instance().set_refresh_interval(interval);
}

/// Crate version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Shut down the process-wide registry: stop the monitor, flush and close
/// every appender, and drop the instance. A later [`instance`] call starts
/// fresh.
pub fn finalize() {
    let taken = INSTANCE.lock().take();
    if let Some(registry) = taken {
        registry.shutdown();
    }
}
