//! PostgreSQL implementation of CohortRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::cohort::{Cohort, CohortSummary};
use crate::domain::foundation::{CalendarDate, CohortId, DomainError};
use crate::ports::CohortRepository;

/// PostgreSQL implementation of CohortRepository.
#[derive(Clone)]
pub struct PostgresCohortRepository {
    pool: PgPool,
}

impl PostgresCohortRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CohortRepository for PostgresCohortRepository {
    async fn find_by_id(&self, id: &CohortId) -> Result<Option<Cohort>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, level, status, start_date, end_date, seats_total, sessions
            FROM cohorts
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch cohort", e))?;

        row.map(|row| row_to_cohort(&row)).transpose()
    }

    async fn list_with_enrollment(&self) -> Result<Vec<CohortSummary>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT c.id, c.name, c.level, c.status, c.start_date, c.end_date,
                   c.seats_total, c.sessions,
                   COUNT(e.student_id) AS enrolled
            FROM cohorts c
            LEFT JOIN cohort_enrollment e ON e.cohort_id = c.id
            GROUP BY c.id
            ORDER BY c.start_date ASC NULLS LAST, c.name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch cohorts", e))?;

        rows.iter()
            .map(|row| {
                let cohort = row_to_cohort(row)?;
                let enrolled: i64 = get(row, "enrolled")?;
                Ok::<_, DomainError>(CohortSummary::new(cohort, non_negative(enrolled)))
            })
            .collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn get<'r, T>(row: &'r sqlx::postgres::PgRow, column: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(column)
        .map_err(|e| DomainError::database(&format!("Failed to get {}", column), e))
}

fn non_negative(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

fn row_to_cohort(row: &sqlx::postgres::PgRow) -> Result<Cohort, DomainError> {
    let id: uuid::Uuid = get(row, "id")?;
    let start_date: Option<chrono::NaiveDate> = get(row, "start_date")?;
    let end_date: Option<chrono::NaiveDate> = get(row, "end_date")?;
    let seats_total: Option<i32> = get(row, "seats_total")?;
    let sessions: Option<i32> = get(row, "sessions")?;

    Ok(Cohort::reconstitute(
        CohortId::from_uuid(id),
        get(row, "name")?,
        get(row, "level")?,
        get(row, "status")?,
        start_date.map(CalendarDate::from_naive),
        end_date.map(CalendarDate::from_naive),
        non_negative(seats_total.unwrap_or(0).into()),
        non_negative(sessions.unwrap_or(0).into()),
    ))
}
