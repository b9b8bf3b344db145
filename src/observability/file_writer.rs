//! Rotating file writer with size-based rotation and backup retention.
//!
//! Used as the `tracing-subscriber` output so log files never grow without
//! bound. When the active file passes the size limit it is renamed to
//! `<name>.<unix-millis>` and a fresh file is started; only the newest few
//! backups are kept.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default size before rotation (5 MB).
const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Default number of rotated files kept.
const DEFAULT_MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating log file.
///
/// `&FileWriter` implements [`io::Write`], so an `Arc<FileWriter>` can be
/// handed straight to `tracing_subscriber::fmt::layer().with_writer(..)`.
pub struct FileWriter {
    file_path: PathBuf,
    max_file_size: u64,
    max_backups: usize,
    writer: Mutex<Option<fs::File>>,
}

impl FileWriter {
    /// Creates a writer for `file_path`. The file is opened on first write.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            max_file_size: DEFAULT_MAX_FILE_SIZE_BYTES,
            max_backups: DEFAULT_MAX_BACKUP_FILES,
            writer: Mutex::new(None),
        }
    }

    /// Overrides the rotation threshold and backup count.
    #[must_use]
    pub const fn with_limits(mut self, max_file_size: u64, max_backups: usize) -> Self {
        self.max_file_size = max_file_size;
        self.max_backups = max_backups;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Appends `bytes`, rotating first if the file is over the limit.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors while rotating, opening, or writing, or when the
    /// internal lock is poisoned.
    pub fn write_bytes(&self, bytes: &[u8]) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        file.write_all(bytes)?;
        file.flush()
    }

    fn check_and_rotate(&self, writer: &mut Option<fs::File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_file_size {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    fn rotate_files(&self) -> io::Result<()> {
        let millis = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_millis());

        let mut backup_name = self.file_path.as_os_str().to_os_string();
        backup_name.push(format!(".{millis}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, PathBuf::from(backup_name))?;
        }

        self.cleanup_old_backups()
    }

    /// Deletes rotated files beyond `max_backups`, newest kept.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = match self.file_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let prefix = self
            .file_path
            .file_name()
            .and_then(|s| s.to_str())
            .map(|name| format!("{name}."))
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Invalid file name"))?;

        let mut backups: Vec<(u128, PathBuf)> = fs::read_dir(parent_dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter_map(|path| {
                let stamp = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .and_then(|name| name.strip_prefix(prefix.as_str()))
                    .and_then(|suffix| suffix.parse::<u128>().ok())?;
                Some((stamp, path))
            })
            .collect();

        backups.sort_by(|a, b| b.0.cmp(&a.0));

        for (_, old_backup) in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }
}

impl Write for &FileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_file_size", &self.max_file_size)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotated(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with("console.log."))
            .count()
    }

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FileWriter::new(dir.path().join("console.log"));

        writer.write_bytes(b"first\n").unwrap();
        (&writer).write_all(b"second\n").unwrap();

        let contents = fs::read_to_string(writer.path()).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn rotates_past_limit_and_prunes_backups() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FileWriter::new(dir.path().join("console.log")).with_limits(8, 2);

        for i in 0..6 {
            writer.write_bytes(format!("line number {i}\n").as_bytes()).unwrap();
            std::thread::sleep(std::time::Duration::from_millis(2));
        }

        assert!(rotated(dir.path()) <= 2);
        assert!(rotated(dir.path()) >= 1);
        let current = fs::read_to_string(writer.path()).unwrap();
        assert_eq!(current, "line number 5\n");
    }
}
