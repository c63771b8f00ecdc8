//! Appender wrapper and the sink trait it serializes access to

use super::{error::Result, record::LogRecord};
use crate::layouts::Layout;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};

/// Sink capability implemented by each output destination.
///
/// Implementations own the destination resource (console stream, open file
/// handle). `open` and `close` are idempotent; `write` appends raw bytes and
/// flushes before returning, trading throughput for durability so that a
/// crash does not lose the most recent lines.
pub trait Append: Send {
    /// Open the destination. Calling on an already-open sink is a no-op.
    fn open(&mut self) -> Result<()>;

    /// Close the destination. Safe to call on an unopened sink.
    fn close(&mut self);

    /// Append text and flush. A write on an unopened sink is silently
    /// dropped; log failures never propagate to the caller.
    fn write(&mut self, text: &str) -> Result<()>;
}

/// A named output destination plus its layout.
///
/// The registry's appender table holds the single strong reference per name;
/// loggers hold [`AppenderRef`] weak handles that must be upgraded before
/// use, because a reload can destroy an appender while a stale logger still
/// names it. The sink sits behind its own mutex so concurrent writers
/// interleave whole laid-out lines, never partial ones.
pub struct Appender {
    name: String,
    layout: Layout,
    sink: Mutex<Box<dyn Append>>,
}

/// Non-owning handle to an appender held by loggers.
pub type AppenderRef = Weak<Appender>;

impl Appender {
    pub fn new(name: impl Into<String>, sink: Box<dyn Append>, layout: Layout) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            layout,
            sink: Mutex::new(sink),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Open the underlying sink.
    pub fn open(&self) -> Result<()> {
        self.sink.lock().open()
    }

    /// Close the underlying sink.
    pub fn close(&self) {
        self.sink.lock().close();
    }

    /// Lay out the record and write it to the sink.
    ///
    /// The layout runs outside the sink lock; only the write itself is
    /// serialized. Write failures are swallowed here — losing a log line is
    /// preferable to destabilizing the caller.
    pub fn write_record(&self, record: &LogRecord) {
        let text = self.layout.format(record);

        let mut sink = self.sink.lock();
        if let Err(e) = sink.write(&text) {
            eprintln!("[RELOG WARNING] appender '{}' write failed: {}", self.name, e);
        }
    }
}
