//! Axum router configuration for cohort and session endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    generate_sessions, list_all_sessions, list_cohort_sessions, list_cohorts,
    list_student_sessions, preview_sessions, CohortAppState,
};

/// Cohort routes, mounted at `/api/cohorts`.
///
/// - `GET /` - List cohorts with seat availability
/// - `POST /generate-sessions` - Replace a cohort's schedule
/// - `POST /preview-sessions` - Preview a schedule without storing it
/// - `GET /:id/sessions` - One cohort's sessions
pub fn cohort_routes() -> Router<CohortAppState> {
    Router::new()
        .route("/", get(list_cohorts))
        .route("/generate-sessions", post(generate_sessions))
        .route("/preview-sessions", post(preview_sessions))
        .route("/:id/sessions", get(list_cohort_sessions))
}

/// Session routes for students (`/api/sessions`) and admins (`/api/admin/sessions`).
pub fn session_routes() -> Router<CohortAppState> {
    Router::new()
        .route("/sessions", get(list_student_sessions))
        .route("/admin/sessions", get(list_all_sessions))
}

/// Complete cohort module router, suitable for nesting under `/api`.
pub fn cohort_router() -> Router<CohortAppState> {
    Router::new()
        .nest("/cohorts", cohort_routes())
        .merge(session_routes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAcademyStore;
    use crate::domain::scheduling::SessionScheduler;
    use std::sync::Arc;

    fn state() -> CohortAppState {
        let store = Arc::new(InMemoryAcademyStore::new());
        CohortAppState {
            cohort_repository: store.clone(),
            session_repository: store.clone(),
            session_reader: store.clone(),
            enrollment_reader: store,
            scheduler: SessionScheduler::default(),
        }
    }

    #[test]
    fn cohort_router_builds_with_state() {
        let _router: Router = Router::new().nest("/api", cohort_router()).with_state(state());
    }
}
