//! PostgreSQL implementation of CohortSessionRepository.
//!
//! A cohort's schedule is replaced inside one transaction: existing rows are
//! deleted, the new rows inserted and the cohort's session count updated.
//! Any failure rolls the whole replacement back.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::cohort::CohortSession;
use crate::domain::foundation::{CohortId, DomainError, ErrorCode};
use crate::ports::CohortSessionRepository;

/// PostgreSQL implementation of CohortSessionRepository.
#[derive(Clone)]
pub struct PostgresCohortSessionRepository {
    pool: PgPool,
}

impl PostgresCohortSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CohortSessionRepository for PostgresCohortSessionRepository {
    async fn replace_for_cohort(
        &self,
        cohort_id: &CohortId,
        sessions: &[CohortSession],
    ) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to start transaction", e))?;

        sqlx::query("DELETE FROM cohort_sessions WHERE cohort_id = $1")
            .bind(cohort_id.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to delete existing sessions", e))?;

        for session in sessions {
            sqlx::query(
                r#"
                INSERT INTO cohort_sessions (id, cohort_id, session_date, session_number, status)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(session.id().as_uuid())
            .bind(cohort_id.as_uuid())
            .bind(session.session_date().as_naive())
            .bind(session_number_to_db(session.session_number())?)
            .bind(session.status().as_str())
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to insert session", e))?;
        }

        let result = sqlx::query("UPDATE cohorts SET sessions = $2 WHERE id = $1")
            .bind(cohort_id.as_uuid())
            .bind(session_number_to_db(sessions.len() as u32)?)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to update session count", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::CohortNotFound,
                format!("Cohort not found: {}", cohort_id),
            ));
        }

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit transaction", e))?;

        tracing::debug!(cohort_id = %cohort_id, rows = sessions.len(), "Replaced cohort sessions");
        Ok(())
    }
}

fn session_number_to_db(value: u32) -> Result<i32, DomainError> {
    i32::try_from(value).map_err(|_| {
        DomainError::new(
            ErrorCode::InternalError,
            format!("Session count {} exceeds column range", value),
        )
    })
}
