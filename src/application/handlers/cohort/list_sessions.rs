//! ListSessionsHandler - Query handler for session listings.
//!
//! Three audiences read sessions: admins see every session, a cohort page
//! sees its own schedule, and a student sees the sessions of every cohort
//! they are enrolled in.

use std::sync::Arc;

use crate::domain::cohort::CohortError;
use crate::domain::foundation::CohortId;
use crate::ports::{CohortRepository, CohortSessionReader, CohortSessionView, EnrollmentReader};

/// Which sessions to list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListSessionsQuery {
    All,
    ForStudent { email: String },
    ForCohort { cohort_id: CohortId },
}

pub struct ListSessionsHandler {
    session_reader: Arc<dyn CohortSessionReader>,
    enrollment_reader: Arc<dyn EnrollmentReader>,
    cohort_repository: Arc<dyn CohortRepository>,
}

impl ListSessionsHandler {
    pub fn new(
        session_reader: Arc<dyn CohortSessionReader>,
        enrollment_reader: Arc<dyn EnrollmentReader>,
        cohort_repository: Arc<dyn CohortRepository>,
    ) -> Self {
        Self {
            session_reader,
            enrollment_reader,
            cohort_repository,
        }
    }

    pub async fn handle(
        &self,
        query: ListSessionsQuery,
    ) -> Result<Vec<CohortSessionView>, CohortError> {
        match query {
            ListSessionsQuery::All => Ok(self.session_reader.list_all().await?),
            ListSessionsQuery::ForStudent { email } => self.for_student(&email).await,
            ListSessionsQuery::ForCohort { cohort_id } => {
                if self.cohort_repository.find_by_id(&cohort_id).await?.is_none() {
                    return Err(CohortError::NotFound(cohort_id));
                }
                Ok(self.session_reader.list_for_cohorts(&[cohort_id]).await?)
            }
        }
    }

    async fn for_student(&self, email: &str) -> Result<Vec<CohortSessionView>, CohortError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(CohortError::validation("email", "Email is required"));
        }

        let student_id = self
            .enrollment_reader
            .find_student_by_email(email)
            .await?
            .ok_or_else(|| CohortError::student_not_found(email))?;

        let cohort_ids = self
            .enrollment_reader
            .cohort_ids_for_student(&student_id)
            .await?;
        if cohort_ids.is_empty() {
            tracing::debug!(student_id = %student_id, "Student has no enrollments");
            return Ok(Vec::new());
        }

        Ok(self.session_reader.list_for_cohorts(&cohort_ids).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cohort::{Cohort, CohortSession, CohortSummary};
    use crate::domain::foundation::{CalendarDate, DomainError, StudentId};
    use crate::domain::scheduling::SessionDate;
    use crate::ports::CohortRef;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockSessionReader {
        views: Vec<CohortSessionView>,
        requested: Mutex<Vec<Vec<CohortId>>>,
    }

    impl MockSessionReader {
        fn new(views: Vec<CohortSessionView>) -> Self {
            Self {
                views,
                requested: Mutex::new(Vec::new()),
            }
        }

        fn requested(&self) -> Vec<Vec<CohortId>> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CohortSessionReader for MockSessionReader {
        async fn list_all(&self) -> Result<Vec<CohortSessionView>, DomainError> {
            Ok(self.views.clone())
        }

        async fn list_for_cohorts(
            &self,
            cohort_ids: &[CohortId],
        ) -> Result<Vec<CohortSessionView>, DomainError> {
            self.requested.lock().unwrap().push(cohort_ids.to_vec());
            Ok(self
                .views
                .iter()
                .filter(|v| cohort_ids.contains(&v.cohort.id))
                .cloned()
                .collect())
        }
    }

    struct MockEnrollmentReader {
        student: Option<(String, StudentId)>,
        cohorts: Vec<CohortId>,
    }

    #[async_trait]
    impl EnrollmentReader for MockEnrollmentReader {
        async fn find_student_by_email(
            &self,
            email: &str,
        ) -> Result<Option<StudentId>, DomainError> {
            Ok(self
                .student
                .as_ref()
                .filter(|(known, _)| known == email)
                .map(|(_, id)| *id))
        }

        async fn cohort_ids_for_student(
            &self,
            _student_id: &StudentId,
        ) -> Result<Vec<CohortId>, DomainError> {
            Ok(self.cohorts.clone())
        }
    }

    struct MockCohortRepository {
        cohorts: Vec<Cohort>,
    }

    #[async_trait]
    impl CohortRepository for MockCohortRepository {
        async fn find_by_id(&self, id: &CohortId) -> Result<Option<Cohort>, DomainError> {
            Ok(self.cohorts.iter().find(|c| c.id() == id).cloned())
        }

        async fn list_with_enrollment(&self) -> Result<Vec<CohortSummary>, DomainError> {
            Ok(vec![])
        }
    }

    struct Fixture {
        morning: Cohort,
        evening: Cohort,
        reader: Arc<MockSessionReader>,
    }

    fn view(cohort: &Cohort, day: u32, number: u32) -> CohortSessionView {
        let slot = SessionDate {
            date: CalendarDate::from_ymd(2025, 1, day).unwrap(),
            session_number: number,
        };
        let session = CohortSession::scheduled(*cohort.id(), &slot);
        CohortSessionView::new(&session, CohortRef::from(cohort))
    }

    fn fixture() -> Fixture {
        let morning = Cohort::new(CohortId::new(), "Morning").unwrap();
        let evening = Cohort::new(CohortId::new(), "Evening").unwrap();
        let reader = Arc::new(MockSessionReader::new(vec![
            view(&morning, 6, 1),
            view(&evening, 7, 1),
            view(&morning, 8, 2),
        ]));
        Fixture {
            morning,
            evening,
            reader,
        }
    }

    fn handler(
        fixture: &Fixture,
        enrollment: MockEnrollmentReader,
    ) -> ListSessionsHandler {
        ListSessionsHandler::new(
            fixture.reader.clone(),
            Arc::new(enrollment),
            Arc::new(MockCohortRepository {
                cohorts: vec![fixture.morning.clone(), fixture.evening.clone()],
            }),
        )
    }

    fn no_students() -> MockEnrollmentReader {
        MockEnrollmentReader {
            student: None,
            cohorts: vec![],
        }
    }

    #[tokio::test]
    async fn all_returns_every_session() {
        let fixture = fixture();
        let handler = handler(&fixture, no_students());

        let result = handler.handle(ListSessionsQuery::All).await.unwrap();

        assert_eq!(result.len(), 3);
    }

    #[tokio::test]
    async fn cohort_listing_filters_by_cohort() {
        let fixture = fixture();
        let handler = handler(&fixture, no_students());

        let result = handler
            .handle(ListSessionsQuery::ForCohort {
                cohort_id: *fixture.morning.id(),
            })
            .await
            .unwrap();

        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|v| v.cohort.name == "Morning"));
    }

    #[tokio::test]
    async fn cohort_listing_rejects_unknown_cohort() {
        let fixture = fixture();
        let handler = handler(&fixture, no_students());
        let unknown = CohortId::new();

        let result = handler
            .handle(ListSessionsQuery::ForCohort { cohort_id: unknown })
            .await;

        assert_eq!(result.unwrap_err(), CohortError::NotFound(unknown));
    }

    #[tokio::test]
    async fn student_sees_sessions_of_enrolled_cohorts() {
        let fixture = fixture();
        let enrollment = MockEnrollmentReader {
            student: Some(("ada@example.com".to_string(), StudentId::new())),
            cohorts: vec![*fixture.evening.id()],
        };
        let handler = handler(&fixture, enrollment);

        let result = handler
            .handle(ListSessionsQuery::ForStudent {
                email: "ada@example.com".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].cohort.name, "Evening");
    }

    #[tokio::test]
    async fn student_email_is_trimmed() {
        let fixture = fixture();
        let enrollment = MockEnrollmentReader {
            student: Some(("ada@example.com".to_string(), StudentId::new())),
            cohorts: vec![*fixture.morning.id()],
        };
        let handler = handler(&fixture, enrollment);

        let result = handler
            .handle(ListSessionsQuery::ForStudent {
                email: "  ada@example.com ".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.len(), 2);
    }

    #[tokio::test]
    async fn student_without_enrollments_gets_empty_list() {
        let fixture = fixture();
        let enrollment = MockEnrollmentReader {
            student: Some(("ada@example.com".to_string(), StudentId::new())),
            cohorts: vec![],
        };
        let handler = handler(&fixture, enrollment);

        let result = handler
            .handle(ListSessionsQuery::ForStudent {
                email: "ada@example.com".to_string(),
            })
            .await
            .unwrap();

        assert!(result.is_empty());
        assert!(fixture.reader.requested().is_empty());
    }

    #[tokio::test]
    async fn unknown_student_is_not_found() {
        let fixture = fixture();
        let handler = handler(&fixture, no_students());

        let result = handler
            .handle(ListSessionsQuery::ForStudent {
                email: "nobody@example.com".to_string(),
            })
            .await;

        assert_eq!(
            result.unwrap_err(),
            CohortError::StudentNotFound("nobody@example.com".to_string())
        );
    }

    #[tokio::test]
    async fn blank_email_is_rejected() {
        let fixture = fixture();
        let handler = handler(&fixture, no_students());

        let result = handler
            .handle(ListSessionsQuery::ForStudent {
                email: "   ".to_string(),
            })
            .await;

        assert!(matches!(
            result,
            Err(CohortError::ValidationFailed { ref field, .. }) if field == "email"
        ));
    }
}
