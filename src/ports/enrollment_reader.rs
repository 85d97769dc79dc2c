//! Enrollment reader port.
//!
//! Resolves a student's email to the cohorts they are enrolled in.

use crate::domain::foundation::{CohortId, DomainError, StudentId};
use async_trait::async_trait;

#[async_trait]
pub trait EnrollmentReader: Send + Sync {
    /// Find the student profile registered under an email address.
    ///
    /// Returns `None` if no profile matches.
    async fn find_student_by_email(&self, email: &str) -> Result<Option<StudentId>, DomainError>;

    /// Cohorts the student is enrolled in.
    async fn cohort_ids_for_student(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<CohortId>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enrollment_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn EnrollmentReader) {}
    }
}
