//! Activity log: a bounded in-memory buffer backed by a text file.
//!
//! The buffer keeps the first [`MAX_LOGS`] entries and rejects the rest;
//! nothing is evicted. Saving appends the whole buffer to a file without
//! clearing it, so saving twice writes every entry twice. Loading appends
//! file lines into the buffer until it is full.
//!
//! [`ActivityLog::show`] is deliberately separate from the buffer: it
//! always reads [`LOG_FILE`] from the working directory.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::constants::capacity::MAX_LOGS;
use crate::constants::LOG_FILE;
use crate::error::{CityError, Result};

#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: Vec<String>,
    capacity: usize,
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new()
    }
}

fn unavailable(path: &Path, err: std::io::Error) -> CityError {
    CityError::FileUnavailable {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::with_capacity(MAX_LOGS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn add(&mut self, entry: impl Into<String>) -> Result<()> {
        if self.is_full() {
            return Err(CityError::CapacityExceeded {
                collection: "Log",
                capacity: self.capacity,
            });
        }
        self.entries.push(entry.into());
        Ok(())
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Append every buffered entry to `path`, one per line.
    ///
    /// Returns the number of lines written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| unavailable(path, e))?;
        for entry in &self.entries {
            writeln!(file, "{entry}").map_err(|e| unavailable(path, e))?;
        }
        log::info!("Saved {} log entries to {}", self.entries.len(), path.display());
        Ok(self.entries.len())
    }

    /// Append lines from `path` until the file ends or the buffer is full.
    ///
    /// Returns the number of lines taken. Lines past capacity are dropped
    /// without error. The buffer is untouched unless the whole file was read.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let text = read_log_file(path)?;
        let room = self.capacity.saturating_sub(self.entries.len());
        let before = self.entries.len();
        self.entries.extend(text.lines().take(room).map(str::to_string));
        let loaded = self.entries.len() - before;
        log::info!("Loaded {} log entries from {}", loaded, path.display());
        Ok(loaded)
    }

    /// Full contents of [`LOG_FILE`], ignoring the in-memory buffer.
    pub fn show() -> Result<String> {
        read_log_file(LOG_FILE)
    }
}

/// Read a log file whole. Bytes that are not UTF-8 become U+FFFD.
pub fn read_log_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| unavailable(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
