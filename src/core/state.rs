//! # Prompt State
//!
//! What the dialog knows when it opens. Captured once from the store and
//! never refreshed during the session (a midnight rollover while the dialog
//! is open is not re-checked).
//!
//! ```text
//! Prompt
//! ├── force: bool              // opened with --view
//! ├── existing: Vec<String>    // today's todos at open time
//! └── today: NaiveDate         // date shown in the subheading
//! ```

use chrono::NaiveDate;

use crate::core::record::join_lines;
use crate::core::store::TodoStore;

/// Instruction line shown above the editor.
pub const INSTRUCTIONS: &str = "Add your tasks for today (one per line):";

/// Subheading date format, e.g. "Friday, October 16, 2026".
const DATE_LABEL_FORMAT: &str = "%A, %B %d, %Y";

/// Which of the three headers the dialog shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    /// Opened with `--view` while a list exists.
    ViewExisting,
    /// A list exists but the dialog opened on its own.
    EditExisting,
    /// Nothing saved today yet.
    FirstEntry,
}

impl Heading {
    pub fn select(has_existing: bool, force: bool) -> Self {
        match (has_existing, force) {
            (true, true) => Heading::ViewExisting,
            (true, false) => Heading::EditExisting,
            (false, _) => Heading::FirstEntry,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Heading::ViewExisting => "📝 Your Todo List for Today",
            Heading::EditExisting => "📝 Edit Your Todo List",
            Heading::FirstEntry => "📝 What's on your plate today?",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub force: bool,
    pub existing: Vec<String>,
    pub today: NaiveDate,
}

impl Prompt {
    pub fn new(force: bool, existing: Vec<String>, today: NaiveDate) -> Self {
        Self {
            force,
            existing,
            today,
        }
    }

    /// Snapshot the store for a new dialog session.
    pub fn open(store: &TodoStore, force: bool) -> Self {
        Self::new(force, store.load(), store.today())
    }

    pub fn has_existing(&self) -> bool {
        !self.existing.is_empty()
    }

    pub fn heading(&self) -> Heading {
        Heading::select(self.has_existing(), self.force)
    }

    /// Editor contents at open: existing lines joined by newlines.
    pub fn initial_text(&self) -> String {
        join_lines(&self.existing)
    }

    /// "Clear All" is only offered when there was something to clear.
    pub fn offers_clear_all(&self) -> bool {
        self.has_existing()
    }

    pub fn date_label(&self) -> String {
        self.today.format(DATE_LABEL_FORMAT).to_string()
    }
}
