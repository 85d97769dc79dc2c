//! Cohort session reader port (read side / CQRS queries).
//!
//! Sessions are always returned ordered by session date, then session
//! number, and carry a small view of the cohort they belong to.

use crate::domain::cohort::{Cohort, CohortSession};
use crate::domain::foundation::{
    CalendarDate, CohortId, CohortSessionId, DomainError, SessionStatus,
};
use async_trait::async_trait;

/// Reader port for session listings.
#[async_trait]
pub trait CohortSessionReader: Send + Sync {
    /// All sessions of all cohorts.
    async fn list_all(&self) -> Result<Vec<CohortSessionView>, DomainError>;

    /// Sessions belonging to any of the given cohorts.
    ///
    /// An empty slice yields an empty list.
    async fn list_for_cohorts(
        &self,
        cohort_ids: &[CohortId],
    ) -> Result<Vec<CohortSessionView>, DomainError>;
}

/// The cohort fields shown next to each session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CohortRef {
    pub id: CohortId,
    pub name: String,
    pub level: String,
    pub status: String,
}

impl From<&Cohort> for CohortRef {
    fn from(cohort: &Cohort) -> Self {
        Self {
            id: *cohort.id(),
            name: cohort.name().to_string(),
            level: cohort.level().to_string(),
            status: cohort.status().to_string(),
        }
    }
}

/// A session joined with its cohort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CohortSessionView {
    pub id: CohortSessionId,
    pub session_date: CalendarDate,
    pub session_number: u32,
    pub status: SessionStatus,
    pub cohort: CohortRef,
}

impl CohortSessionView {
    pub fn new(session: &CohortSession, cohort: CohortRef) -> Self {
        Self {
            id: *session.id(),
            session_date: session.session_date(),
            session_number: session.session_number(),
            status: session.status(),
            cohort,
        }
    }
}
