//! GenerateCohortSessionsHandler - Command handler that (re)builds a cohort's schedule.

use std::sync::Arc;

use crate::domain::cohort::{CohortError, CohortSession};
use crate::domain::foundation::{CohortId, ErrorCode};
use crate::domain::scheduling::SessionScheduler;
use crate::ports::{CohortRepository, CohortSessionRepository};

/// Command to generate the sessions of a cohort.
#[derive(Debug, Clone)]
pub struct GenerateCohortSessionsCommand {
    pub cohort_id: CohortId,
}

/// Result of a successful generation.
#[derive(Debug, Clone)]
pub struct GenerateCohortSessionsResult {
    pub cohort_id: CohortId,
    pub sessions: Vec<CohortSession>,
}

/// Handler for generating cohort sessions.
///
/// Loads the cohort, validates its dates, runs the scheduler and replaces the
/// cohort's stored sessions in one step.
pub struct GenerateCohortSessionsHandler {
    cohort_repository: Arc<dyn CohortRepository>,
    session_repository: Arc<dyn CohortSessionRepository>,
    scheduler: SessionScheduler,
}

impl GenerateCohortSessionsHandler {
    pub fn new(
        cohort_repository: Arc<dyn CohortRepository>,
        session_repository: Arc<dyn CohortSessionRepository>,
        scheduler: SessionScheduler,
    ) -> Self {
        Self {
            cohort_repository,
            session_repository,
            scheduler,
        }
    }

    pub async fn handle(
        &self,
        cmd: GenerateCohortSessionsCommand,
    ) -> Result<GenerateCohortSessionsResult, CohortError> {
        // 1. Load cohort
        let cohort = self
            .cohort_repository
            .find_by_id(&cmd.cohort_id)
            .await?
            .ok_or(CohortError::NotFound(cmd.cohort_id))?;

        // 2. Validate the stored date range
        let range = cohort.schedule_range()?;

        // 3. Generate slots
        let slots = self.scheduler.generate(&range);
        if slots.is_empty() {
            tracing::warn!(
                cohort_id = %cmd.cohort_id,
                start = %range.start(),
                end = %range.end(),
                "Date range holds no schedulable day"
            );
            return Err(CohortError::NoSessionsGenerated);
        }

        // 4. Replace stored schedule
        let sessions: Vec<CohortSession> = slots
            .iter()
            .map(|slot| CohortSession::scheduled(cmd.cohort_id, slot))
            .collect();

        self.session_repository
            .replace_for_cohort(&cmd.cohort_id, &sessions)
            .await
            .map_err(|e| {
                if e.code == ErrorCode::CohortNotFound {
                    return CohortError::NotFound(cmd.cohort_id);
                }
                tracing::error!(cohort_id = %cmd.cohort_id, error = %e, "Failed to store sessions");
                CohortError::from(e)
            })?;

        tracing::info!(
            cohort_id = %cmd.cohort_id,
            sessions = sessions.len(),
            "Generated cohort sessions"
        );

        Ok(GenerateCohortSessionsResult {
            cohort_id: cmd.cohort_id,
            sessions,
        })
    }
}
