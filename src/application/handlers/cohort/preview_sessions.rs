//! PreviewSessionsHandler - Query handler that schedules a raw date range without storing it.

use crate::domain::cohort::CohortError;
use crate::domain::scheduling::{validate_range, SessionDate, SessionScheduler};

/// Query with unvalidated date inputs, as typed into the admin console.
#[derive(Debug, Clone, Default)]
pub struct PreviewSessionsQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Handler for previewing a schedule.
///
/// An empty schedule is returned as-is; only invalid input is an error.
pub struct PreviewSessionsHandler {
    scheduler: SessionScheduler,
}

impl PreviewSessionsHandler {
    pub fn new(scheduler: SessionScheduler) -> Self {
        Self { scheduler }
    }

    pub fn handle(&self, query: PreviewSessionsQuery) -> Result<Vec<SessionDate>, CohortError> {
        let range = validate_range(query.start_date.as_deref(), query.end_date.as_deref())?;
        let sessions = self.scheduler.generate(&range);

        tracing::debug!(
            start = %range.start(),
            end = %range.end(),
            sessions = sessions.len(),
            "Previewed schedule"
        );

        Ok(sessions)
    }
}
