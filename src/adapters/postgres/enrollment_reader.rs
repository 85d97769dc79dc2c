//! PostgreSQL implementation of EnrollmentReader.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{CohortId, DomainError, StudentId};
use crate::ports::EnrollmentReader;

/// Reads student profiles and cohort enrollments.
#[derive(Clone)]
pub struct PostgresEnrollmentReader {
    pool: PgPool,
}

impl PostgresEnrollmentReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EnrollmentReader for PostgresEnrollmentReader {
    async fn find_student_by_email(&self, email: &str) -> Result<Option<StudentId>, DomainError> {
        let row: Option<(uuid::Uuid,)> = sqlx::query_as("SELECT id FROM profiles WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch student profile", e))?;

        Ok(row.map(|(id,)| StudentId::from_uuid(id)))
    }

    async fn cohort_ids_for_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<CohortId>, DomainError> {
        let rows: Vec<(uuid::Uuid,)> =
            sqlx::query_as("SELECT cohort_id FROM cohort_enrollment WHERE student_id = $1")
                .bind(student_id.as_uuid())
                .fetch_all(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to fetch enrollments", e))?;

        Ok(rows
            .into_iter()
            .map(|(id,)| CohortId::from_uuid(id))
            .collect())
    }
}
