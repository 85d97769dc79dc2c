//! Cohort session repository port (write side).

use crate::domain::cohort::CohortSession;
use crate::domain::foundation::{CohortId, DomainError};
use async_trait::async_trait;

/// Repository port for a cohort's generated schedule.
#[async_trait]
pub trait CohortSessionRepository: Send + Sync {
    /// Replace every session of a cohort and record the new count on the
    /// cohort.
    ///
    /// Implementations must apply the delete, the insert and the count update
    /// atomically: on failure the cohort keeps its previous schedule.
    ///
    /// # Errors
    ///
    /// - `CohortNotFound` if the cohort doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn replace_for_cohort(
        &self,
        cohort_id: &CohortId,
        sessions: &[CohortSession],
    ) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cohort_session_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn CohortSessionRepository) {}
    }
}
