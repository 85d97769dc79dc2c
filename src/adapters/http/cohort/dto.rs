//! HTTP DTOs for cohort and session endpoints.
//!
//! JSON bodies use snake_case. Dates are serialized as `YYYY-MM-DD`.

use serde::{Deserialize, Serialize};

use crate::domain::cohort::{CohortSession, CohortSummary};
use crate::domain::foundation::{CalendarDate, SessionStatus};
use crate::domain::scheduling::SessionDate;
use crate::ports::{CohortRef, CohortSessionView};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to (re)generate a cohort's sessions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateSessionsRequest {
    /// Cohort id. Optional so a missing id is reported as a validation error.
    #[serde(default)]
    pub cohort_id: Option<String>,
}

/// Request to preview a schedule for raw dates.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreviewSessionsRequest {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Query parameters for the student session listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentSessionsParams {
    #[serde(default)]
    pub email: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A cohort with its seat availability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohortResponse {
    pub id: String,
    pub name: String,
    pub level: String,
    pub status: String,
    pub start_date: Option<CalendarDate>,
    pub end_date: Option<CalendarDate>,
    pub sessions: u32,
    pub seats: u32,
    pub enrolled: u32,
    pub available: u32,
}

impl From<CohortSummary> for CohortResponse {
    fn from(summary: CohortSummary) -> Self {
        let cohort = summary.cohort;
        Self {
            id: cohort.id().to_string(),
            name: cohort.name().to_string(),
            level: cohort.level().to_string(),
            status: cohort.status().to_string(),
            start_date: cohort.start_date(),
            end_date: cohort.end_date(),
            sessions: cohort.session_count(),
            seats: cohort.seats_total(),
            enrolled: summary.enrolled,
            available: summary.available,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohortListResponse {
    pub cohorts: Vec<CohortResponse>,
}

/// A stored session as returned after generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohortSessionResponse {
    pub id: String,
    pub cohort_id: String,
    pub session_date: CalendarDate,
    pub session_number: u32,
    pub status: SessionStatus,
}

impl From<&CohortSession> for CohortSessionResponse {
    fn from(session: &CohortSession) -> Self {
        Self {
            id: session.id().to_string(),
            cohort_id: session.cohort_id().to_string(),
            session_date: session.session_date(),
            session_number: session.session_number(),
            status: session.status(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateSessionsResponse {
    pub success: bool,
    pub sessions_generated: usize,
    pub sessions: Vec<CohortSessionResponse>,
}

/// A previewed slot; nothing is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSlotResponse {
    pub session_date: CalendarDate,
    pub session_number: u32,
}

impl From<SessionDate> for SessionSlotResponse {
    fn from(slot: SessionDate) -> Self {
        Self {
            session_date: slot.date,
            session_number: slot.session_number,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewSessionsResponse {
    pub sessions_generated: usize,
    pub sessions: Vec<SessionSlotResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohortRefResponse {
    pub id: String,
    pub name: String,
    pub level: String,
    pub status: String,
}

impl From<CohortRef> for CohortRefResponse {
    fn from(cohort: CohortRef) -> Self {
        Self {
            id: cohort.id.to_string(),
            name: cohort.name,
            level: cohort.level,
            status: cohort.status,
        }
    }
}

/// A session joined with its cohort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionViewResponse {
    pub id: String,
    pub session_date: CalendarDate,
    pub session_number: u32,
    pub status: SessionStatus,
    pub cohort: CohortRefResponse,
}

impl From<CohortSessionView> for SessionViewResponse {
    fn from(view: CohortSessionView) -> Self {
        Self {
            id: view.id.to_string(),
            session_date: view.session_date,
            session_number: view.session_number,
            status: view.status,
            cohort: view.cohort.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionListResponse {
    pub sessions: Vec<SessionViewResponse>,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
        }
    }
}
