//! CalendarDate value object for whole days without a time of day.
//!
//! All transformations return new values. Arithmetic that would leave the
//! representable calendar returns `None` instead of panicking, which lets
//! forward walks terminate cleanly at the edge of the calendar.

use chrono::{DateTime, Datelike, Days, IsoWeek, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Immutable calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a date from year, month and day. Returns `None` for days that
    /// do not exist (e.g. February 30th).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Wraps an existing chrono date.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the inner chrono date.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Parses a calendar date.
    ///
    /// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive ISO timestamps.
    /// Timestamps are reduced to the calendar day they were written in; the
    /// time of day never moves the date.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("date"));
        }

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
            return Ok(Self(date));
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(dt.date_naive()));
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(Self(dt.date()));
        }

        Err(ValidationError::invalid_format(
            "date",
            format!("'{}' is not a calendar date", trimmed),
        ))
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns true on Sundays.
    pub fn is_sunday(&self) -> bool {
        self.weekday() == Weekday::Sun
    }

    /// The Monday-to-Sunday week this date belongs to.
    pub fn week(&self) -> IsoWeek {
        self.0.iso_week()
    }

    /// The day after this one.
    pub fn next_day(&self) -> Option<Self> {
        self.add_days(1)
    }

    /// This date moved forward by `days`.
    pub fn add_days(&self, days: u64) -> Option<Self> {
        self.0.checked_add_days(Days::new(days)).map(Self)
    }

    /// The first Monday strictly after this date.
    pub fn next_monday(&self) -> Option<Self> {
        let days_until = 7 - u64::from(self.weekday().num_days_from_monday());
        self.add_days(days_until)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}
