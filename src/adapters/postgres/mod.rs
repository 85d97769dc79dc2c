//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresCohortRepository` - Cohort lookups with enrollment counts
//! - `PostgresCohortSessionRepository` - Transactional schedule replacement
//! - `PostgresCohortSessionReader` - Session listings joined with cohorts
//! - `PostgresEnrollmentReader` - Student profile and enrollment lookups

mod cohort_repository;
mod cohort_session_reader;
mod cohort_session_repository;
mod enrollment_reader;

pub use cohort_repository::PostgresCohortRepository;
pub use cohort_session_reader::PostgresCohortSessionReader;
pub use cohort_session_repository::PostgresCohortSessionRepository;
pub use enrollment_reader::PostgresEnrollmentReader;
