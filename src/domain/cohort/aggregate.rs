//! Cohort aggregate.

use crate::domain::foundation::{CalendarDate, CohortId, ValidationError};
use crate::domain::scheduling::{DateRange, RangeError};

/// A batch of students following a shared schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cohort {
    id: CohortId,
    name: String,
    level: String,
    status: String,
    start_date: Option<CalendarDate>,
    end_date: Option<CalendarDate>,
    seats_total: u32,
    session_count: u32,
}

impl Cohort {
    pub const DEFAULT_NAME: &'static str = "Unnamed Cohort";
    pub const DEFAULT_LEVEL: &'static str = "Beginner";
    pub const DEFAULT_STATUS: &'static str = "Upcoming";

    /// Creates a new cohort with no dates, seats or sessions.
    pub fn new(id: CohortId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id,
            name,
            level: Self::DEFAULT_LEVEL.to_string(),
            status: Self::DEFAULT_STATUS.to_string(),
            start_date: None,
            end_date: None,
            seats_total: 0,
            session_count: 0,
        })
    }

    /// Reconstitutes a cohort from storage, filling defaults for blank columns.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: CohortId,
        name: Option<String>,
        level: Option<String>,
        status: Option<String>,
        start_date: Option<CalendarDate>,
        end_date: Option<CalendarDate>,
        seats_total: u32,
        session_count: u32,
    ) -> Self {
        Self {
            id,
            name: or_default(name, Self::DEFAULT_NAME),
            level: or_default(level, Self::DEFAULT_LEVEL),
            status: or_default(status, Self::DEFAULT_STATUS),
            start_date,
            end_date,
            seats_total,
            session_count,
        }
    }

    pub fn with_dates(mut self, start: CalendarDate, end: CalendarDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn with_seats(mut self, seats_total: u32) -> Self {
        self.seats_total = seats_total;
        self
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn id(&self) -> &CohortId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> &str {
        &self.level
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn start_date(&self) -> Option<CalendarDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<CalendarDate> {
        self.end_date
    }

    pub fn seats_total(&self) -> u32 {
        self.seats_total
    }

    /// Number of sessions recorded by the last schedule generation.
    pub fn session_count(&self) -> u32 {
        self.session_count
    }

    /// Records how many sessions the current schedule holds.
    pub fn record_session_count(&mut self, count: u32) {
        self.session_count = count;
    }

    /// The validated range sessions are generated over.
    pub fn schedule_range(&self) -> Result<DateRange, RangeError> {
        DateRange::from_optional(self.start_date, self.end_date)
    }

    /// Seats still open given the current enrollment.
    pub fn available_seats(&self, enrolled: u32) -> u32 {
        self.seats_total.saturating_sub(enrolled)
    }
}

/// Cohort with its enrollment numbers, as listed publicly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CohortSummary {
    pub cohort: Cohort,
    pub enrolled: u32,
    pub available: u32,
}

impl CohortSummary {
    pub fn new(cohort: Cohort, enrolled: u32) -> Self {
        let available = cohort.available_seats(enrolled);
        Self {
            cohort,
            enrolled,
            available,
        }
    }
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
