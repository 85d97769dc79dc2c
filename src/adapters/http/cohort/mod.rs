//! HTTP adapter for cohort scheduling endpoints.
//!
//! - `GET /api/cohorts` - Cohorts with seat availability
//! - `POST /api/cohorts/generate-sessions` - Regenerate a cohort's schedule
//! - `POST /api/cohorts/preview-sessions` - Preview a schedule for raw dates
//! - `GET /api/cohorts/:id/sessions` - One cohort's sessions
//! - `GET /api/sessions?email=` - A student's sessions
//! - `GET /api/admin/sessions` - Every session

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{CohortApiError, CohortAppState};
pub use routes::cohort_router;
