//! The action history: one line appended per catalog change.
//!
//! Lines look like `[17-10-2026 14:03:22] Added book: Dune`, in local time.
//! Reading a history that was never written is not an error; it yields `None`.

use crate::error::{Result, ShelfError};
use chrono::{DateTime, Local};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

pub fn format_entry(at: DateTime<Local>, action: &str) -> String {
    format!("[{}] {}", at.format(TIMESTAMP_FORMAT), action)
}

pub trait HistoryLog {
    /// Append one action line.
    fn append(&mut self, action: &str) -> Result<()>;

    /// The whole history verbatim, or `None` when nothing has been logged yet.
    fn read(&self) -> Result<Option<String>>;
}

pub struct FileHistory {
    path: PathBuf,
}

impl FileHistory {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl HistoryLog for FileHistory {
    fn append(&mut self, action: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ShelfError::Io)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(ShelfError::Io)?;
        writeln!(file, "{}", format_entry(Local::now(), action)).map_err(ShelfError::Io)?;
        Ok(())
    }

    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(ShelfError::Io)?;
        Ok(Some(content))
    }
}

/// Keeps the history in memory. For tests.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    actions: Vec<String>,
    entries: Vec<String>,
    fail_appends: bool,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A history whose every append fails, for exercising error paths.
    pub fn failing() -> Self {
        Self {
            fail_appends: true,
            ..Self::default()
        }
    }

    /// The raw actions, without timestamps.
    pub fn actions(&self) -> &[String] {
        &self.actions
    }
}

impl HistoryLog for MemoryHistory {
    fn append(&mut self, action: &str) -> Result<()> {
        if self.fail_appends {
            return Err(ShelfError::Store("append rejected by in-memory history".to_string()));
        }
        self.entries.push(format_entry(Local::now(), action));
        self.actions.push(action.to_string());
        Ok(())
    }

    fn read(&self) -> Result<Option<String>> {
        if self.entries.is_empty() {
            return Ok(None);
        }
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(entry);
            out.push('\n');
        }
        Ok(Some(out))
    }
}
