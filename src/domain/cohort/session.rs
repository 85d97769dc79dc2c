//! Scheduled class meetings of a cohort.

use crate::domain::foundation::{
    CalendarDate, CohortId, CohortSessionId, DomainError, ErrorCode, SessionStatus,
};
use crate::domain::scheduling::SessionDate;

/// One persisted session of a cohort's schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CohortSession {
    id: CohortSessionId,
    cohort_id: CohortId,
    session_date: CalendarDate,
    session_number: u32,
    status: SessionStatus,
}

impl CohortSession {
    /// Creates a freshly scheduled session from a generated slot.
    pub fn scheduled(cohort_id: CohortId, slot: &SessionDate) -> Self {
        Self {
            id: CohortSessionId::new(),
            cohort_id,
            session_date: slot.date,
            session_number: slot.session_number,
            status: SessionStatus::Scheduled,
        }
    }

    /// Reconstitutes a session from storage.
    pub fn reconstitute(
        id: CohortSessionId,
        cohort_id: CohortId,
        session_date: CalendarDate,
        session_number: u32,
        status: SessionStatus,
    ) -> Self {
        Self {
            id,
            cohort_id,
            session_date,
            session_number,
            status,
        }
    }

    pub fn id(&self) -> &CohortSessionId {
        &self.id
    }

    pub fn cohort_id(&self) -> &CohortId {
        &self.cohort_id
    }

    pub fn session_date(&self) -> CalendarDate {
        self.session_date
    }

    pub fn session_number(&self) -> u32 {
        self.session_number
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Marks the session as held.
    pub fn complete(&mut self) -> Result<(), DomainError> {
        self.transition_to(SessionStatus::Completed)
    }

    /// Calls the session off.
    pub fn cancel(&mut self) -> Result<(), DomainError> {
        self.transition_to(SessionStatus::Cancelled)
    }

    fn transition_to(&mut self, target: SessionStatus) -> Result<(), DomainError> {
        if !self.status.can_transition_to(&target) {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Session {} is already {}", self.session_number, self.status),
            )
            .with_detail("target", target.as_str()));
        }

        self.status = target;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheduled_copies_slot_and_starts_scheduled() {
        let cohort_id = CohortId::new();
        let slot = SessionDate {
            date: CalendarDate::from_ymd(2025, 1, 8).unwrap(),
            session_number: 2,
        };

        let session = CohortSession::scheduled(cohort_id, &slot);

        assert_eq!(session.cohort_id(), &cohort_id);
        assert_eq!(session.session_date(), slot.date);
        assert_eq!(session.session_number(), 2);
        assert_eq!(session.status(), SessionStatus::Scheduled);
    }

    #[test]
    fn scheduled_sessions_get_distinct_ids() {
        let slot = SessionDate {
            date: CalendarDate::from_ymd(2025, 1, 8).unwrap(),
            session_number: 1,
        };
        let a = CohortSession::scheduled(CohortId::new(), &slot);
        let b = CohortSession::scheduled(CohortId::new(), &slot);
        assert_ne!(a.id(), b.id());
    }

    fn scheduled_session() -> CohortSession {
        let slot = SessionDate {
            date: CalendarDate::from_ymd(2025, 1, 10).unwrap(),
            session_number: 3,
        };
        CohortSession::scheduled(CohortId::new(), &slot)
    }

    #[test]
    fn complete_moves_scheduled_to_completed() {
        let mut session = scheduled_session();
        session.complete().unwrap();
        assert_eq!(session.status(), SessionStatus::Completed);
    }

    #[test]
    fn cancel_moves_scheduled_to_cancelled() {
        let mut session = scheduled_session();
        session.cancel().unwrap();
        assert_eq!(session.status(), SessionStatus::Cancelled);
    }

    #[test]
    fn finished_session_cannot_change_again() {
        let mut session = scheduled_session();
        session.cancel().unwrap();

        let err = session.complete().unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
        assert_eq!(session.status(), SessionStatus::Cancelled);
        assert!(session.cancel().is_err());
    }
}
