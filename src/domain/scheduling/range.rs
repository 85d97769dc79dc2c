//! Validated cohort date ranges.

use std::fmt;

use thiserror::Error;

use crate::domain::foundation::{CalendarDate, ErrorCode};

/// Which end of a range an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Start,
    End,
}

impl DateField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateField::Start => "start_date",
            DateField::End => "end_date",
        }
    }
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a `(start, end)` pair cannot be scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("Start date and end date are required ({0} is missing)")]
    MissingDate(DateField),

    #[error("Invalid date format for {field}: '{value}'")]
    InvalidDate { field: DateField, value: String },

    #[error("Start date {start} must be before end date {end}")]
    InvertedRange { start: CalendarDate, end: CalendarDate },
}

impl RangeError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RangeError::MissingDate(_) => ErrorCode::MissingDate,
            RangeError::InvalidDate { .. } => ErrorCode::InvalidDate,
            RangeError::InvertedRange { .. } => ErrorCode::InvertedRange,
        }
    }
}

/// Inclusive range of calendar days with `start <= end`.
///
/// Only obtainable through validation, so anything holding a `DateRange`
/// can generate sessions without re-checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: CalendarDate,
    end: CalendarDate,
}

impl DateRange {
    /// Builds a range from two typed dates.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Builds a range from dates that may be absent, as stored on a cohort.
    pub fn from_optional(
        start: Option<CalendarDate>,
        end: Option<CalendarDate>,
    ) -> Result<Self, RangeError> {
        let start = start.ok_or(RangeError::MissingDate(DateField::Start))?;
        let end = end.ok_or(RangeError::MissingDate(DateField::End))?;
        Self::new(start, end)
    }

    /// Parses and validates raw inputs.
    ///
    /// Checks run in a fixed order: presence of both ends, then that both
    /// parse, then ordering. Blank strings count as missing.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self, RangeError> {
        let start = present(start).ok_or(RangeError::MissingDate(DateField::Start))?;
        let end = present(end).ok_or(RangeError::MissingDate(DateField::End))?;

        let start = parse_field(DateField::Start, start)?;
        let end = parse_field(DateField::End, end)?;

        Self::new(start, end)
    }

    pub fn start(&self) -> CalendarDate {
        self.start
    }

    pub fn end(&self) -> CalendarDate {
        self.end
    }

    /// Returns true if `date` lies within the range, both ends included.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Validates a raw `(start, end)` pair before generation.
pub fn validate_range(start: Option<&str>, end: Option<&str>) -> Result<DateRange, RangeError> {
    DateRange::parse(start, end)
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_field(field: DateField, value: &str) -> Result<CalendarDate, RangeError> {
    CalendarDate::parse(value).map_err(|_| RangeError::InvalidDate {
        field,
        value: value.to_string(),
    })
}
