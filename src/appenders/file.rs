//! Plain file appender implementation

use crate::config::Properties;
use crate::core::appender::Append;
use crate::core::error::{LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes laid-out text to a single file.
///
/// The appender tracks its own write position rather than re-stating the
/// file on every write; the position starts at the existing file length in
/// append mode and at zero after truncation. Writes before `open` (or after
/// a failed `open`) are silently dropped.
pub struct FileAppender {
    path: Option<PathBuf>,
    append_to_file: bool,
    file: Option<File>,
    position: u64,
}

impl FileAppender {
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: None,
            append_to_file: true,
            file: None,
            position: 0,
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_append_to_file(mut self, append_to_file: bool) -> Self {
        self.append_to_file = append_to_file;
        self
    }

    /// Build from configuration properties: `file` and `appendToFile`.
    pub(crate) fn from_properties(properties: &Properties) -> Self {
        let mut appender = Self::new();
        if let Some(path) = properties.string("file") {
            appender.path = Some(PathBuf::from(path));
        }
        if let Some(append_to_file) = properties.boolean("appendToFile") {
            appender.append_to_file = append_to_file;
        }
        appender
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Current write position in bytes.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.position
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }
}

impl Default for FileAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Append for FileAppender {
    fn open(&mut self) -> Result<()> {
        if self.file.is_some() {
            return Ok(());
        }

        let Some(path) = self.path.as_deref() else {
            return Err(LoggerError::element(
                "fileAppender",
                "missing 'file' property",
            ));
        };

        let mut options = OpenOptions::new();
        options.create(true);
        if self.append_to_file {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }

        let file = options
            .open(path)
            .map_err(|e| LoggerError::io("opening", path.display().to_string(), e))?;

        self.position = if self.append_to_file {
            file.metadata().map(|m| m.len()).unwrap_or(0)
        } else {
            0
        };
        self.file = Some(file);
        Ok(())
    }

    fn close(&mut self) {
        if let Some(mut file) = self.file.take() {
            let _ = file.flush();
        }
    }

    fn write(&mut self, text: &str) -> Result<()> {
        let Some(file) = self.file.as_mut() else {
            return Ok(());
        };

        if let Err(e) = file.write_all(text.as_bytes()).and_then(|()| file.flush()) {
            let path = self
                .path
                .as_deref()
                .map_or_else(|| "<unset>".to_string(), |p| p.display().to_string());
            return Err(LoggerError::io("writing", path, e));
        }

        self.position += text.len() as u64;
        Ok(())
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        self.close();
    }
}
