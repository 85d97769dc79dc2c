//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CohortRepository` - Cohort lookups and listings
//! - `CohortSessionRepository` - Atomic replacement of a cohort's schedule
//! - `CohortSessionReader` - Session listings joined with cohort info
//! - `EnrollmentReader` - Student and enrollment lookups

mod cohort_repository;
mod cohort_session_reader;
mod cohort_session_repository;
mod enrollment_reader;

pub use cohort_repository::CohortRepository;
pub use cohort_session_reader::{CohortRef, CohortSessionReader, CohortSessionView};
pub use cohort_session_repository::CohortSessionRepository;
pub use enrollment_reader::EnrollmentReader;
