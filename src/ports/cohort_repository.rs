//! Cohort repository port.
//!
//! Cohort records are created and edited by the admin console; this service
//! only reads them and lists them with enrollment numbers.

use crate::domain::cohort::{Cohort, CohortSummary};
use crate::domain::foundation::{CohortId, DomainError};
use async_trait::async_trait;

/// Repository port for Cohort lookups.
#[async_trait]
pub trait CohortRepository: Send + Sync {
    /// Find a cohort by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &CohortId) -> Result<Option<Cohort>, DomainError>;

    /// List every cohort with its enrolled count.
    ///
    /// Returns cohorts ordered by start date ascending, cohorts without a
    /// start date last.
    async fn list_with_enrollment(&self) -> Result<Vec<CohortSummary>, DomainError>;
}
