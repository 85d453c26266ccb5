//! File stream implementation

use crate::core::{Event, LevelFilter, LoggerError, Result, Stream};
use parking_lot::{Mutex, RwLock};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// File written by a [`FileStream`] created with `Default`
pub const DEFAULT_LOG_FILE: &str = "log.txt";

/// Appends rendered events to a text file.
///
/// The file is opened in append mode, written and closed again for every
/// event, so no handle or buffered data outlives a single `handle` call.
/// Events are written back to back; enable [`FileStream::with_newline`] to
/// put each one on its own line.
pub struct FileStream {
    levels: LevelFilter,
    path: RwLock<PathBuf>,
    newline: bool,
    /// Serializes writers within this process
    write_lock: Mutex<()>,
}

impl FileStream {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            levels: LevelFilter::default(),
            path: RwLock::new(path.into()),
            newline: false,
            write_lock: Mutex::new(()),
        }
    }

    /// Terminate every event with `\n`
    #[must_use]
    pub fn with_newline(mut self, newline: bool) -> Self {
        self.newline = newline;
        self
    }

    pub fn path(&self) -> PathBuf {
        self.path.read().clone()
    }

    /// Point the stream at a different file; takes effect on the next event
    pub fn set_path(&self, path: impl Into<PathBuf>) {
        *self.path.write() = path.into();
    }

    fn append(&self, path: &Path, output: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log file",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;

        // Advisory only; filesystems without flock support still get the write
        let locked = lock_exclusive(&file);
        write_event(&mut file, output, locked)
            .map_err(|e| LoggerError::file_stream(path.display().to_string(), e.to_string()))
    }
}

/// Take the cross-process advisory lock, reporting whether it is held
fn lock_exclusive(file: &File) -> bool {
    #[cfg(feature = "file")]
    {
        fs2::FileExt::lock_exclusive(file).is_ok()
    }
    #[cfg(not(feature = "file"))]
    {
        let _ = file;
        false
    }
}

fn write_event(file: &mut File, output: &str, locked: bool) -> io::Result<()> {
    let written = file.write_all(output.as_bytes());

    #[cfg(feature = "file")]
    {
        if locked {
            let _ = fs2::FileExt::unlock(&*file);
        }
    }
    #[cfg(not(feature = "file"))]
    let _ = locked;

    written
}

impl Default for FileStream {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }
}

impl Stream for FileStream {
    fn levels(&self) -> &LevelFilter {
        &self.levels
    }

    fn handle(&self, event: &Event) -> Result<()> {
        let mut output = event.render();
        if self.newline {
            output.push('\n');
        }

        let path = self.path();
        let _guard = self.write_lock.lock();
        self.append(&path, &output)
    }

    fn name(&self) -> &str {
        "file"
    }
}
