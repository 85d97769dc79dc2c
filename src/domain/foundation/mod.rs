//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the academy domain.

mod calendar_date;
mod errors;
mod ids;
mod session_status;

pub use calendar_date::CalendarDate;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CohortId, CohortSessionId, StudentId};
pub use session_status::SessionStatus;
