//! Date source for new expenses and period totals
//!
//! The store asks a `Clock` for "today" instead of reading the system time
//! directly, so tests can pin the date.

use chrono::NaiveDate;

/// Provides the current calendar date
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Today's date in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// A clock stuck on one date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
