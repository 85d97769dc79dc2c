//! HTTP handlers for cohort and session endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::handlers::cohort::{
    GenerateCohortSessionsCommand, GenerateCohortSessionsHandler, ListCohortsHandler,
    ListSessionsHandler, ListSessionsQuery, PreviewSessionsHandler, PreviewSessionsQuery,
};
use crate::domain::cohort::CohortError;
use crate::domain::foundation::{CohortId, DomainError};
use crate::domain::scheduling::SessionScheduler;
use crate::ports::{CohortRepository, CohortSessionReader, CohortSessionRepository, EnrollmentReader};

use super::dto::{
    CohortListResponse, CohortResponse, CohortSessionResponse, ErrorResponse,
    GenerateSessionsRequest, GenerateSessionsResponse, PreviewSessionsRequest,
    PreviewSessionsResponse, SessionListResponse, SessionViewResponse, StudentSessionsParams,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the cohort endpoints.
///
/// Cloned per request; dependencies are `Arc`-wrapped.
#[derive(Clone)]
pub struct CohortAppState {
    pub cohort_repository: Arc<dyn CohortRepository>,
    pub session_repository: Arc<dyn CohortSessionRepository>,
    pub session_reader: Arc<dyn CohortSessionReader>,
    pub enrollment_reader: Arc<dyn EnrollmentReader>,
    pub scheduler: SessionScheduler,
}

impl CohortAppState {
    pub fn list_cohorts_handler(&self) -> ListCohortsHandler {
        ListCohortsHandler::new(self.cohort_repository.clone())
    }

    pub fn generate_sessions_handler(&self) -> GenerateCohortSessionsHandler {
        GenerateCohortSessionsHandler::new(
            self.cohort_repository.clone(),
            self.session_repository.clone(),
            self.scheduler,
        )
    }

    pub fn preview_sessions_handler(&self) -> PreviewSessionsHandler {
        PreviewSessionsHandler::new(self.scheduler)
    }

    pub fn list_sessions_handler(&self) -> ListSessionsHandler {
        ListSessionsHandler::new(
            self.session_reader.clone(),
            self.enrollment_reader.clone(),
            self.cohort_repository.clone(),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Cohort Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/cohorts - All cohorts with seat availability
pub async fn list_cohorts(State(state): State<CohortAppState>) -> Result<Response, CohortApiError> {
    let cohorts = state.list_cohorts_handler().handle().await?;

    let response = CohortListResponse {
        cohorts: cohorts.into_iter().map(CohortResponse::from).collect(),
    };
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// POST /api/cohorts/generate-sessions - Replace a cohort's schedule
pub async fn generate_sessions(
    State(state): State<CohortAppState>,
    payload: Result<Json<GenerateSessionsRequest>, JsonRejection>,
) -> Result<Response, CohortApiError> {
    let Json(request) = payload?;
    let cohort_id = parse_cohort_id(request.cohort_id.as_deref())?;

    let result = state
        .generate_sessions_handler()
        .handle(GenerateCohortSessionsCommand { cohort_id })
        .await?;

    let response = GenerateSessionsResponse {
        success: true,
        sessions_generated: result.sessions.len(),
        sessions: result
            .sessions
            .iter()
            .map(CohortSessionResponse::from)
            .collect(),
    };
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// POST /api/cohorts/preview-sessions - Schedule raw dates without storing
pub async fn preview_sessions(
    State(state): State<CohortAppState>,
    payload: Result<Json<PreviewSessionsRequest>, JsonRejection>,
) -> Result<Response, CohortApiError> {
    let Json(request) = payload?;
    let sessions = state.preview_sessions_handler().handle(PreviewSessionsQuery {
        start_date: request.start_date,
        end_date: request.end_date,
    })?;

    let response = PreviewSessionsResponse {
        sessions_generated: sessions.len(),
        sessions: sessions.into_iter().map(Into::into).collect(),
    };
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// GET /api/cohorts/:id/sessions - One cohort's schedule
pub async fn list_cohort_sessions(
    State(state): State<CohortAppState>,
    Path(id): Path<String>,
) -> Result<Response, CohortApiError> {
    let cohort_id = parse_cohort_id(Some(id.as_str()))?;
    list_sessions(&state, ListSessionsQuery::ForCohort { cohort_id }).await
}

// ════════════════════════════════════════════════════════════════════════════════
// Session Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/sessions?email= - Sessions of the cohorts a student is enrolled in
pub async fn list_student_sessions(
    State(state): State<CohortAppState>,
    Query(params): Query<StudentSessionsParams>,
) -> Result<Response, CohortApiError> {
    let email = params.email.unwrap_or_default();
    if email.trim().is_empty() {
        return Err(CohortError::validation("email", "Email is required for student access").into());
    }
    list_sessions(&state, ListSessionsQuery::ForStudent { email }).await
}

/// GET /api/admin/sessions - Every session with cohort info
pub async fn list_all_sessions(
    State(state): State<CohortAppState>,
) -> Result<Response, CohortApiError> {
    list_sessions(&state, ListSessionsQuery::All).await
}

async fn list_sessions(
    state: &CohortAppState,
    query: ListSessionsQuery,
) -> Result<Response, CohortApiError> {
    let sessions = state.list_sessions_handler().handle(query).await?;

    let response = SessionListResponse {
        sessions: sessions.into_iter().map(SessionViewResponse::from).collect(),
    };
    Ok((StatusCode::OK, Json(response)).into_response())
}

fn parse_cohort_id(raw: Option<&str>) -> Result<CohortId, CohortError> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty()).ok_or_else(|| {
        CohortError::validation("cohort_id", "Cohort ID is required")
    })?;
    raw.parse()
        .map_err(|_| CohortError::validation("cohort_id", format!("'{}' is not a valid cohort id", raw)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper for converting cohort errors to HTTP responses.
#[derive(Debug)]
pub struct CohortApiError(CohortError);

impl From<CohortError> for CohortApiError {
    fn from(err: CohortError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for CohortApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(CohortError::validation("body", rejection.body_text()))
    }
}

impl From<DomainError> for CohortApiError {
    fn from(err: DomainError) -> Self {
        Self(CohortError::from(err))
    }
}

impl CohortApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            CohortError::NotFound(_) | CohortError::StudentNotFound(_) => StatusCode::NOT_FOUND,
            CohortError::InvalidRange(_)
            | CohortError::NoSessionsGenerated
            | CohortError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            CohortError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CohortApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Cohort request failed");
        }

        let body = ErrorResponse::new(self.0.code().to_string(), self.0.message());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scheduling::{DateField, RangeError};

    fn status_of(err: CohortError) -> StatusCode {
        CohortApiError::from(err).into_response().status()
    }

    #[test]
    fn not_found_errors_map_to_404() {
        assert_eq!(status_of(CohortError::NotFound(CohortId::new())), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(CohortError::student_not_found("a@example.com")),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn input_errors_map_to_400() {
        assert_eq!(
            status_of(CohortError::InvalidRange(RangeError::MissingDate(DateField::Start))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(CohortError::NoSessionsGenerated), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(CohortError::validation("cohort_id", "required")),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn infrastructure_errors_map_to_500() {
        assert_eq!(
            status_of(CohortError::infrastructure("pool closed")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn parse_cohort_id_requires_value() {
        assert!(matches!(
            parse_cohort_id(None),
            Err(CohortError::ValidationFailed { ref field, .. }) if field == "cohort_id"
        ));
        assert!(parse_cohort_id(Some("   ")).is_err());
    }

    #[test]
    fn parse_cohort_id_rejects_garbage() {
        assert!(parse_cohort_id(Some("not-a-uuid")).is_err());
    }

    #[test]
    fn parse_cohort_id_accepts_uuid() {
        let id = CohortId::new();
        assert_eq!(parse_cohort_id(Some(id.to_string().as_str())).unwrap(), id);
    }
}
