//! Size-based rolling file appender implementation

use super::file::FileAppender;
use crate::config::Properties;
use crate::core::appender::Append;
use crate::core::error::Result;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Size thresholds are configured in mebibytes.
pub const BYTES_PER_MIB: u64 = 1_048_576;

/// A file appender that rotates the live file when it reaches a size
/// threshold.
///
/// Rotation renames `file` to `file.1`, shifting existing backups up
/// (`file.1` becomes `file.2` and so on); the backup at `max_backups` is
/// deleted. The roll check happens before each write, so the live file can
/// exceed the threshold by at most one laid-out line. A threshold of zero
/// disables rotation entirely.
pub struct RollingFileAppender {
    inner: FileAppender,
    maximum_file_size: u64,
    max_backups: usize,
}

impl RollingFileAppender {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: FileAppender::new(),
            maximum_file_size: 0,
            max_backups: 0,
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.inner = self.inner.with_path(path);
        self
    }

    #[must_use]
    pub fn with_append_to_file(mut self, append_to_file: bool) -> Self {
        self.inner = self.inner.with_append_to_file(append_to_file);
        self
    }

    /// Size threshold in MiB; zero disables rotation.
    #[must_use]
    pub fn with_maximum_file_size(mut self, mib: u64) -> Self {
        self.maximum_file_size = mib;
        self
    }

    #[must_use]
    pub fn with_max_backups(mut self, max_backups: usize) -> Self {
        self.max_backups = max_backups;
        self
    }

    /// Build from configuration properties: the plain-file properties plus
    /// `maximumFileSize` (MiB) and `maxSizeRollBackups`.
    pub(crate) fn from_properties(properties: &Properties) -> Self {
        Self {
            inner: FileAppender::from_properties(properties),
            maximum_file_size: properties.integer("maximumFileSize").unwrap_or(0),
            max_backups: properties.integer("maxSizeRollBackups").unwrap_or(0) as usize,
        }
    }

    #[must_use]
    pub fn maximum_file_size(&self) -> u64 {
        self.maximum_file_size
    }

    #[must_use]
    pub fn max_backups(&self) -> usize {
        self.max_backups
    }

    fn should_roll(&self) -> bool {
        self.maximum_file_size != 0
            && self.maximum_file_size * BYTES_PER_MIB <= self.inner.position()
    }

    /// Shift the backup chain up by one and reopen an empty live file.
    ///
    /// With no backups configured the live file is simply removed. Rename
    /// failures propagate; the appender is left closed, so subsequent writes
    /// drop until a reload reopens it.
    fn roll(&mut self) -> Result<()> {
        let Some(path) = self.inner.path().map(Path::to_path_buf) else {
            return Ok(());
        };

        self.inner.close();

        if self.max_backups == 0 {
            if path.exists() {
                std::fs::remove_file(&path)?;
            }
        } else {
            for index in (1..=self.max_backups).rev() {
                let from = if index == 1 {
                    path.clone()
                } else {
                    backup_path(&path, index - 1)
                };
                if !from.exists() {
                    continue;
                }
                let to = backup_path(&path, index);
                if to.exists() {
                    std::fs::remove_file(&to)?;
                }
                std::fs::rename(&from, &to)?;
            }
        }

        self.inner.open()
    }
}

/// Backup file name for `index`: the full live file name with `.{index}`
/// appended, extension included.
fn backup_path(path: &Path, index: usize) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(format!(".{index}"));
    PathBuf::from(name)
}

impl Default for RollingFileAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Append for RollingFileAppender {
    fn open(&mut self) -> Result<()> {
        self.inner.open()
    }

    fn close(&mut self) {
        self.inner.close();
    }

    fn write(&mut self, text: &str) -> Result<()> {
        if self.inner.is_open() && self.should_roll() {
            self.roll()?;
        }
        self.inner.write(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn mib_line(tag: u8) -> String {
        let mut line = vec![b'a' + tag; BYTES_PER_MIB as usize];
        line.push(b'\n');
        String::from_utf8(line).unwrap()
    }

    #[test]
    fn test_backup_path_keeps_extension() {
        assert_eq!(
            backup_path(Path::new("/var/log/app.log"), 3),
            Path::new("/var/log/app.log.3")
        );
    }

    #[test]
    fn test_no_rotation_when_disabled() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");

        let mut appender = RollingFileAppender::new().with_path(&path);
        appender.open().unwrap();
        for tag in 0..3 {
            appender.write(&mib_line(tag)).unwrap();
        }
        appender.close();

        assert!(path.exists());
        assert!(!backup_path(&path, 1).exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 3 * BYTES_PER_MIB);
    }

    #[test]
    fn test_backup_count_is_bounded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");

        let mut appender = RollingFileAppender::new()
            .with_path(&path)
            .with_maximum_file_size(1)
            .with_max_backups(2);
        appender.open().unwrap();

        // each write fills the live file past the 1 MiB threshold, so the
        // next write rolls first
        for tag in 0..5 {
            appender.write(&mib_line(tag)).unwrap();
        }
        appender.close();

        assert!(path.exists());
        assert!(backup_path(&path, 1).exists());
        assert!(backup_path(&path, 2).exists());
        assert!(!backup_path(&path, 3).exists());
    }

    #[test]
    fn test_backups_shift_newest_first() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");

        let mut appender = RollingFileAppender::new()
            .with_path(&path)
            .with_maximum_file_size(1)
            .with_max_backups(3);
        appender.open().unwrap();
        for tag in 0..4 {
            appender.write(&mib_line(tag)).unwrap();
        }
        appender.close();

        // writes: a b c d; live holds d, .1 holds c, .2 holds b, .3 holds a
        let first_char = |p: &Path| {
            std::fs::read_to_string(p)
                .unwrap()
                .chars()
                .next()
                .unwrap()
        };
        assert_eq!(first_char(&path), 'd');
        assert_eq!(first_char(&backup_path(&path, 1)), 'c');
        assert_eq!(first_char(&backup_path(&path, 2)), 'b');
        assert_eq!(first_char(&backup_path(&path, 3)), 'a');
    }

    #[test]
    fn test_zero_backups_truncates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");

        let mut appender = RollingFileAppender::new()
            .with_path(&path)
            .with_maximum_file_size(1)
            .with_max_backups(0);
        appender.open().unwrap();
        appender.write(&mib_line(0)).unwrap();
        appender.write("small line\n").unwrap();
        appender.close();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "small line\n");
        assert!(!backup_path(&path, 1).exists());
    }

    #[test]
    fn test_from_properties() {
        let json = r#"{ "file": "/tmp/roll.log",
                        "maximumFileSize": 25, "maxSizeRollBackups": 4 }"#;
        let properties: Properties = serde_json::from_str(json).unwrap();
        let appender = RollingFileAppender::from_properties(&properties);

        assert_eq!(appender.maximum_file_size(), 25);
        assert_eq!(appender.max_backups(), 4);
    }
}
