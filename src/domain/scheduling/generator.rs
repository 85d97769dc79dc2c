//! Session date generation.
//!
//! The walk keeps a single cursor and the bucket of the week it is in:
//!
//! ```text
//! Walking ──(cursor enters a new week)──▶ WeekRollover ──(counter reset)──▶ Walking
//!    │
//!    └──(cursor > end, or calendar exhausted)──▶ Terminated
//! ```
//!
//! Placement rules, applied to each candidate day:
//!
//! - Sundays never hold a session; the cursor jumps to the next Monday.
//! - Once a week holds `sessions_per_week` sessions the cursor jumps to the
//!   next Monday.
//! - After placing a session the cursor moves `stride_days` forward, plus one
//!   more day if that lands on a Sunday.
//!
//! A start date on a Sunday is moved to the following Monday before the
//! walk begins.

use chrono::IsoWeek;
use serde::Serialize;

use super::{Cadence, DateRange};
use crate::domain::foundation::CalendarDate;

/// One generated session: its day and 1-based position in the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionDate {
    pub date: CalendarDate,
    pub session_number: u32,
}

/// Produces session schedules for a fixed cadence.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionScheduler {
    cadence: Cadence,
}

impl SessionScheduler {
    pub fn new(cadence: Cadence) -> Self {
        Self { cadence }
    }

    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    /// Lazily walks the schedule for a validated range.
    pub fn walk(&self, range: &DateRange) -> SessionWalk {
        SessionWalk::new(self.cadence, range.start(), range.end())
    }

    /// Generates the full ordered schedule for a validated range.
    ///
    /// An empty result is a valid outcome (e.g. a range covering only a
    /// Sunday); callers decide whether that is acceptable.
    pub fn generate(&self, range: &DateRange) -> Vec<SessionDate> {
        self.walk(range).collect()
    }
}

/// Generates sessions with the standard cadence without validating input.
///
/// An inverted pair yields an empty schedule. Prefer
/// [`SessionScheduler::generate`] with a validated [`DateRange`].
pub fn generate_sessions(start: CalendarDate, end: CalendarDate) -> Vec<SessionDate> {
    SessionWalk::new(Cadence::STANDARD, start, end).collect()
}

/// Iterator over the sessions of one schedule.
#[derive(Debug, Clone)]
pub struct SessionWalk {
    cadence: Cadence,
    end: CalendarDate,
    cursor: Option<CalendarDate>,
    week: Option<IsoWeek>,
    sessions_this_week: u32,
    next_number: u32,
}

impl SessionWalk {
    fn new(cadence: Cadence, start: CalendarDate, end: CalendarDate) -> Self {
        let cursor = if start.is_sunday() {
            start.next_monday()
        } else {
            Some(start)
        };

        Self {
            cadence,
            end,
            cursor,
            week: None,
            sessions_this_week: 0,
            next_number: 1,
        }
    }

    /// Returns true once the cursor has passed the end of the range.
    pub fn is_terminated(&self) -> bool {
        self.cursor.map_or(true, |cursor| cursor > self.end)
    }

    fn roll_week_if_needed(&mut self, candidate: CalendarDate) {
        let week = candidate.week();
        if self.week != Some(week) {
            self.week = Some(week);
            self.sessions_this_week = 0;
        }
    }

    fn step_after(&self, placed: CalendarDate) -> Option<CalendarDate> {
        if self.sessions_this_week >= self.cadence.sessions_per_week() {
            return placed.next_monday();
        }

        let next = placed.add_days(u64::from(self.cadence.stride_days()))?;
        if next.is_sunday() {
            next.next_day()
        } else {
            Some(next)
        }
    }
}

impl Iterator for SessionWalk {
    type Item = SessionDate;

    fn next(&mut self) -> Option<SessionDate> {
        loop {
            let candidate = match self.cursor {
                Some(cursor) if cursor <= self.end => cursor,
                _ => {
                    self.cursor = None;
                    return None;
                }
            };

            if candidate.is_sunday() {
                self.cursor = candidate.next_monday();
                continue;
            }

            self.roll_week_if_needed(candidate);

            if self.sessions_this_week >= self.cadence.sessions_per_week() {
                self.cursor = candidate.next_monday();
                continue;
            }

            let session = SessionDate {
                date: candidate,
                session_number: self.next_number,
            };
            self.next_number += 1;
            self.sessions_this_week += 1;
            self.cursor = self.step_after(candidate);

            return Some(session);
        }
    }
}

impl std::iter::FusedIterator for SessionWalk {}
