//! # Daily Record
//!
//! The single persisted structure:
//!
//! ```json
//! { "date": "2026-10-16", "todos": ["Buy milk", "Call dentist"] }
//! ```
//!
//! There is no schema version. The store checks `date` first (anything but
//! today's key makes the record stale) and only then deserializes the rest.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DailyRecord {
    /// `YYYY-MM-DD`. Missing in the file means the record is stale.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub todos: Vec<String>,
}

impl DailyRecord {
    pub fn new(date: String, todos: Vec<String>) -> Self {
        Self {
            date: Some(date),
            todos,
        }
    }
}

/// Split editor text into task lines: one task per line, each trimmed,
/// blank lines dropped. Order and duplicates are kept.
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join task lines back into editor text.
pub fn join_lines(todos: &[String]) -> String {
    todos.join("\n")
}
