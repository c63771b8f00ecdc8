//! Console appender implementation

use crate::core::appender::Append;
use crate::core::error::Result;
use std::io::Write;

/// Writes laid-out text to standard output.
///
/// The console needs no open/close lifecycle; the stream is always
/// available. Each write takes the stdout lock so lines from concurrent
/// appenders do not shear.
pub struct ConsoleAppender;

impl ConsoleAppender {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Append for ConsoleAppender {
    fn open(&mut self) -> Result<()> {
        Ok(())
    }

    fn close(&mut self) {}

    fn write(&mut self, text: &str) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(text.as_bytes())?;
        handle.flush()?;
        Ok(())
    }
}
