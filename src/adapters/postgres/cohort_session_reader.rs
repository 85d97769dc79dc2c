//! PostgreSQL implementation of CohortSessionReader.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::cohort::Cohort;
use crate::domain::foundation::{
    CalendarDate, CohortId, CohortSessionId, DomainError, ErrorCode, SessionStatus,
};
use crate::ports::{CohortRef, CohortSessionReader, CohortSessionView};

const SELECT_SESSIONS: &str = r#"
    SELECT s.id, s.session_date, s.session_number, s.status,
           c.id AS cohort_id, c.name AS cohort_name,
           c.level AS cohort_level, c.status AS cohort_status
    FROM cohort_sessions s
    JOIN cohorts c ON c.id = s.cohort_id
"#;

const ORDER_SESSIONS: &str = "ORDER BY s.session_date ASC, s.session_number ASC";

/// PostgreSQL implementation of CohortSessionReader.
#[derive(Clone)]
pub struct PostgresCohortSessionReader {
    pool: PgPool,
}

impl PostgresCohortSessionReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CohortSessionReader for PostgresCohortSessionReader {
    async fn list_all(&self) -> Result<Vec<CohortSessionView>, DomainError> {
        let sql = format!("{} {}", SELECT_SESSIONS, ORDER_SESSIONS);
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch sessions", e))?;

        rows.iter().map(row_to_view).collect()
    }

    async fn list_for_cohorts(
        &self,
        cohort_ids: &[CohortId],
    ) -> Result<Vec<CohortSessionView>, DomainError> {
        if cohort_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<uuid::Uuid> = cohort_ids.iter().map(|id| *id.as_uuid()).collect();
        let sql = format!(
            "{} WHERE s.cohort_id = ANY($1) {}",
            SELECT_SESSIONS, ORDER_SESSIONS
        );
        let rows = sqlx::query(&sql)
            .bind(&ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch cohort sessions", e))?;

        rows.iter().map(row_to_view).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn str_to_session_status(s: &str) -> Result<SessionStatus, DomainError> {
    s.parse().map_err(|_| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid session status: {}", s),
        )
    })
}

fn get<'r, T>(row: &'r sqlx::postgres::PgRow, column: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(column)
        .map_err(|e| DomainError::database(&format!("Failed to get {}", column), e))
}

/// Builds the cohort view, applying the same defaults as a loaded cohort.
fn cohort_ref(
    id: uuid::Uuid,
    name: Option<String>,
    level: Option<String>,
    status: Option<String>,
) -> CohortRef {
    let cohort = Cohort::reconstitute(
        CohortId::from_uuid(id),
        name,
        level,
        status,
        None,
        None,
        0,
        0,
    );
    CohortRef::from(&cohort)
}

fn row_to_view(row: &sqlx::postgres::PgRow) -> Result<CohortSessionView, DomainError> {
    let id: uuid::Uuid = get(row, "id")?;
    let session_date: chrono::NaiveDate = get(row, "session_date")?;
    let session_number: i32 = get(row, "session_number")?;
    let status: String = get(row, "status")?;
    let cohort_id: uuid::Uuid = get(row, "cohort_id")?;

    let cohort = cohort_ref(
        cohort_id,
        get(row, "cohort_name")?,
        get(row, "cohort_level")?,
        get(row, "cohort_status")?,
    );

    Ok(CohortSessionView {
        id: CohortSessionId::from_uuid(id),
        session_date: CalendarDate::from_naive(session_date),
        session_number: u32::try_from(session_number).map_err(|_| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid session number: {}", session_number),
            )
        })?,
        status: str_to_session_status(&status)?,
        cohort,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_statuses_parse() {
        assert_eq!(
            str_to_session_status("scheduled").unwrap(),
            SessionStatus::Scheduled
        );
        assert_eq!(
            str_to_session_status("cancelled").unwrap(),
            SessionStatus::Cancelled
        );
    }

    #[test]
    fn unknown_status_is_a_database_error() {
        let err = str_to_session_status("postponed").unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }

    #[test]
    fn blank_cohort_fields_fall_back_to_defaults() {
        let cohort = cohort_ref(uuid::Uuid::new_v4(), None, Some("  ".to_string()), None);
        assert_eq!(cohort.name, Cohort::DEFAULT_NAME);
        assert_eq!(cohort.level, Cohort::DEFAULT_LEVEL);
        assert_eq!(cohort.status, Cohort::DEFAULT_STATUS);
    }

    #[test]
    fn stored_cohort_fields_are_kept() {
        let cohort = cohort_ref(
            uuid::Uuid::new_v4(),
            Some("Evening".to_string()),
            Some("Advanced".to_string()),
            Some("Active".to_string()),
        );
        assert_eq!(cohort.name, "Evening");
        assert_eq!(cohort.level, "Advanced");
        assert_eq!(cohort.status, "Active");
    }
}
