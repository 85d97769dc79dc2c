//! ListCohortsHandler - Query handler for the public cohort listing.

use std::sync::Arc;

use crate::domain::cohort::{CohortError, CohortSummary};
use crate::ports::CohortRepository;

pub struct ListCohortsHandler {
    repository: Arc<dyn CohortRepository>,
}

impl ListCohortsHandler {
    pub fn new(repository: Arc<dyn CohortRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<CohortSummary>, CohortError> {
        Ok(self.repository.list_with_enrollment().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cohort::Cohort;
    use crate::domain::foundation::{CohortId, DomainError};
    use async_trait::async_trait;

    struct MockCohortRepository {
        summaries: Vec<CohortSummary>,
        fail: bool,
    }

    #[async_trait]
    impl CohortRepository for MockCohortRepository {
        async fn find_by_id(&self, _id: &CohortId) -> Result<Option<Cohort>, DomainError> {
            Ok(None)
        }

        async fn list_with_enrollment(&self) -> Result<Vec<CohortSummary>, DomainError> {
            if self.fail {
                return Err(DomainError::database("Failed to fetch cohorts", "down"));
            }
            Ok(self.summaries.clone())
        }
    }

    #[tokio::test]
    async fn returns_repository_listing() {
        let cohort = Cohort::new(CohortId::new(), "Cohort 1")
            .unwrap()
            .with_seats(25);
        let repo = MockCohortRepository {
            summaries: vec![CohortSummary::new(cohort, 5)],
            fail: false,
        };

        let result = ListCohortsHandler::new(Arc::new(repo)).handle().await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].available, 20);
    }

    #[tokio::test]
    async fn maps_repository_failure() {
        let repo = MockCohortRepository {
            summaries: vec![],
            fail: true,
        };

        let result = ListCohortsHandler::new(Arc::new(repo)).handle().await;

        assert!(matches!(result, Err(CohortError::Infrastructure(_))));
    }
}
