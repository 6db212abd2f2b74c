use chrono::{Local, NaiveDate};

use crate::error::QuizError;

/// Source of "today" for streak bookkeeping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    /// The local calendar date of the machine.
    #[default]
    System,
    Fixed(NaiveDate),
}

impl Clock {
    /// Returns a clock fixed at the given date.
    #[must_use]
    pub fn fixed(on: NaiveDate) -> Self {
        Self::Fixed(on)
    }

    /// Build a clock from an optional override, falling back to the system date.
    #[must_use]
    pub fn from_override(date: Option<NaiveDate>) -> Self {
        date.map_or(Self::System, Self::Fixed)
    }

    /// Today's calendar date according to the clock.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(d) => *d,
        }
    }

    /// If this is a fixed clock, move it forward by `days`.
    ///
    /// Has no effect on `Clock::System`.
    pub fn advance_days(&mut self, days: u64) {
        if let Clock::Fixed(d) = self {
            if let Some(next) = d.checked_add_days(chrono::Days::new(days)) {
                *d = next;
            }
        }
    }
}

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, QuizError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| QuizError::InvalidDate(s.to_string()))
}
