//! # Todo Store
//!
//! Persists today's task list to a single JSON file (`~/daily_todos.json` by
//! default). The record is only valid on the day it was written: reading a
//! record from another day deletes the file and reports nothing.
//!
//! ```text
//! read()  →  Current(todos) | Absent | Stale { date } | Corrupt(reason)
//! load()  →  read() collapsed to Vec<String> (empty unless Current)
//! ```
//!
//! Writes go through a `.tmp` sibling and `rename()` so a crash mid-save
//! never leaves half a record behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::{debug, info};
use serde::Serialize;
use serde_json::Value;

use crate::core::clock::Clock;
use crate::core::record::DailyRecord;

/// Default file name, placed in the user's home directory.
pub const DEFAULT_FILE_NAME: &str = "daily_todos.json";

/// What a read of the backing file found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A record for today.
    Current(Vec<String>),
    /// No backing file.
    Absent,
    /// A record from another day (or with no date). The file has been removed.
    Stale { date: Option<String> },
    /// The file exists but could not be read or parsed.
    Corrupt(String),
}

impl LoadOutcome {
    /// Collapse to the caller's view: today's todos, or nothing.
    pub fn into_todos(self) -> Vec<String> {
        match self {
            LoadOutcome::Current(todos) => todos,
            _ => Vec::new(),
        }
    }
}

pub struct TodoStore {
    path: PathBuf,
    clock: Box<dyn Clock>,
}

impl TodoStore {
    pub fn new(path: impl Into<PathBuf>, clock: impl Clock + 'static) -> Self {
        Self {
            path: path.into(),
            clock: Box::new(clock),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Read the backing file and classify it.
    ///
    /// A stale record is deleted as a side effect. Never fails: every
    /// problem is folded into the returned outcome.
    pub fn read(&self) -> LoadOutcome {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return LoadOutcome::Absent,
            Err(e) => {
                debug!("Unreadable record at {}: {}", self.path.display(), e);
                return LoadOutcome::Corrupt(e.to_string());
            }
        };

        let value: Value = match serde_json::from_str(&json) {
            Ok(value) => value,
            Err(e) => {
                debug!("Malformed record at {}: {}", self.path.display(), e);
                return LoadOutcome::Corrupt(e.to_string());
            }
        };
        let Some(fields) = value.as_object() else {
            debug!("Record at {} is not a JSON object", self.path.display());
            return LoadOutcome::Corrupt("expected a JSON object".to_string());
        };

        // The date decides staleness before anything else is type-checked
        let date = fields.get("date").filter(|d| !d.is_null());
        if date.and_then(Value::as_str) != Some(self.clock.today_key().as_str()) {
            let date = date.map(|d| match d.as_str() {
                Some(s) => s.to_string(),
                None => d.to_string(),
            });
            debug!(
                "Discarding stale record dated {:?} at {}",
                date,
                self.path.display()
            );
            if let Err(e) = fs::remove_file(&self.path) {
                debug!("Failed to remove stale record: {}", e);
            }
            return LoadOutcome::Stale { date };
        }

        let record: DailyRecord = match serde_json::from_value(value) {
            Ok(record) => record,
            Err(e) => {
                debug!("Malformed todos at {}: {}", self.path.display(), e);
                return LoadOutcome::Corrupt(e.to_string());
            }
        };

        LoadOutcome::Current(record.todos)
    }

    /// Today's todos, or an empty list if there is no valid record for today.
    pub fn load(&self) -> Vec<String> {
        self.read().into_todos()
    }

    /// Replace the stored record with `todos`, dated today.
    pub fn save(&self, todos: &[String]) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let record = DailyRecord::new(self.clock.today_key(), todos.to_vec());
        atomic_write_json(&self.path, &record)?;
        info!("Saved {} todo(s) to {}", todos.len(), self.path.display());
        Ok(())
    }

    /// Delete the backing file. Succeeds if it is already gone.
    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Cleared record at {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}
