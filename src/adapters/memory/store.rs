//! In-memory academy store implementing every cohort port.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

use crate::domain::cohort::{Cohort, CohortSession, CohortSummary};
use crate::domain::foundation::{CohortId, DomainError, ErrorCode, StudentId};
use crate::ports::{
    CohortRef, CohortRepository, CohortSessionReader, CohortSessionRepository, CohortSessionView,
    EnrollmentReader,
};

#[derive(Default)]
struct State {
    cohorts: HashMap<CohortId, Cohort>,
    sessions: HashMap<CohortId, Vec<CohortSession>>,
    students: HashMap<String, StudentId>,
    enrollments: HashSet<(StudentId, CohortId)>,
}

impl State {
    fn enrolled_in(&self, cohort_id: &CohortId) -> u32 {
        let count = self
            .enrollments
            .iter()
            .filter(|(_, c)| c == cohort_id)
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    fn views<'a>(
        &'a self,
        cohort_ids: impl Iterator<Item = &'a CohortId>,
    ) -> Vec<CohortSessionView> {
        let mut views: Vec<CohortSessionView> = cohort_ids
            .filter_map(|id| Some((self.cohorts.get(id)?, self.sessions.get(id)?)))
            .flat_map(|(cohort, sessions)| {
                let cohort_ref = CohortRef::from(cohort);
                sessions
                    .iter()
                    .map(move |s| CohortSessionView::new(s, cohort_ref.clone()))
            })
            .collect();
        views.sort_by_key(|v| (v.session_date, v.session_number));
        views
    }
}

/// In-memory store for cohorts, students, enrollments and sessions.
///
/// All reads and writes go through one `RwLock`, so a schedule replacement
/// is observed either completely or not at all.
#[derive(Default)]
pub struct InMemoryAcademyStore {
    state: RwLock<State>,
}

impl InMemoryAcademyStore {
    pub fn new() -> Self {
        Self::default()
    }

    // === Seeding ===

    pub async fn insert_cohort(&self, cohort: Cohort) {
        self.state.write().await.cohorts.insert(*cohort.id(), cohort);
    }

    /// Registers a student profile and returns its id.
    pub async fn add_student(&self, email: impl Into<String>) -> StudentId {
        let id = StudentId::new();
        self.state.write().await.students.insert(email.into(), id);
        id
    }

    pub async fn enroll(&self, student_id: StudentId, cohort_id: CohortId) {
        self.state
            .write()
            .await
            .enrollments
            .insert((student_id, cohort_id));
    }

    // === Inspection ===

    /// Stored sessions of one cohort, in schedule order.
    pub async fn sessions_of(&self, cohort_id: &CohortId) -> Vec<CohortSession> {
        self.state
            .read()
            .await
            .sessions
            .get(cohort_id)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn cohort(&self, cohort_id: &CohortId) -> Option<Cohort> {
        self.state.read().await.cohorts.get(cohort_id).cloned()
    }
}

#[async_trait]
impl CohortRepository for InMemoryAcademyStore {
    async fn find_by_id(&self, id: &CohortId) -> Result<Option<Cohort>, DomainError> {
        Ok(self.state.read().await.cohorts.get(id).cloned())
    }

    async fn list_with_enrollment(&self) -> Result<Vec<CohortSummary>, DomainError> {
        let state = self.state.read().await;
        let mut summaries: Vec<CohortSummary> = state
            .cohorts
            .values()
            .map(|c| CohortSummary::new(c.clone(), state.enrolled_in(c.id())))
            .collect();
        summaries.sort_by(|a, b| {
            let key = |s: &CohortSummary| (s.cohort.start_date().is_none(), s.cohort.start_date());
            key(a)
                .cmp(&key(b))
                .then_with(|| a.cohort.name().cmp(b.cohort.name()))
        });
        Ok(summaries)
    }
}

#[async_trait]
impl CohortSessionRepository for InMemoryAcademyStore {
    async fn replace_for_cohort(
        &self,
        cohort_id: &CohortId,
        sessions: &[CohortSession],
    ) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        let count = u32::try_from(sessions.len()).unwrap_or(u32::MAX);

        let cohort = state.cohorts.get_mut(cohort_id).ok_or_else(|| {
            DomainError::new(
                ErrorCode::CohortNotFound,
                format!("Cohort not found: {}", cohort_id),
            )
        })?;
        cohort.record_session_count(count);
        state.sessions.insert(*cohort_id, sessions.to_vec());

        Ok(())
    }
}

#[async_trait]
impl CohortSessionReader for InMemoryAcademyStore {
    async fn list_all(&self) -> Result<Vec<CohortSessionView>, DomainError> {
        let state = self.state.read().await;
        Ok(state.views(state.sessions.keys()))
    }

    async fn list_for_cohorts(
        &self,
        cohort_ids: &[CohortId],
    ) -> Result<Vec<CohortSessionView>, DomainError> {
        let state = self.state.read().await;
        Ok(state.views(cohort_ids.iter()))
    }
}

#[async_trait]
impl EnrollmentReader for InMemoryAcademyStore {
    async fn find_student_by_email(&self, email: &str) -> Result<Option<StudentId>, DomainError> {
        Ok(self.state.read().await.students.get(email).copied())
    }

    async fn cohort_ids_for_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<CohortId>, DomainError> {
        Ok(self
            .state
            .read()
            .await
            .enrollments
            .iter()
            .filter(|(s, _)| s == student_id)
            .map(|(_, c)| *c)
            .collect())
    }
}
