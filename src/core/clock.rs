//! # Clock
//!
//! Where "today" comes from. The store never asks the system for the date
//! directly; it is handed a `Clock` so tests can pin the calendar.

use chrono::{Local, NaiveDate};

/// Date format used for the persisted `date` field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Source of the current calendar date.
pub trait Clock {
    /// The current local calendar date.
    fn today(&self) -> NaiveDate;

    /// Today's date in the persisted `YYYY-MM-DD` form.
    fn today_key(&self) -> String {
        self.today().format(DATE_FORMAT).to_string()
    }
}

/// Host clock, local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
