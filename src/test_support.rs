//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use chrono::NaiveDate;

use crate::core::clock::FixedClock;
use crate::core::store::{DEFAULT_FILE_NAME, TodoStore};

/// The date every test store believes it is.
pub fn fixed_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

/// A store rooted in `dir`, pinned to `fixed_day()`.
pub fn store_in(dir: &tempfile::TempDir) -> TodoStore {
    TodoStore::new(dir.path().join(DEFAULT_FILE_NAME), FixedClock(fixed_day()))
}

pub fn todos(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
