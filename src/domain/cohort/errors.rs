//! Cohort-specific error types.

use crate::domain::foundation::{CohortId, DomainError, ErrorCode};
use crate::domain::scheduling::RangeError;

/// Errors raised by cohort scheduling and session queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CohortError {
    /// Cohort was not found.
    NotFound(CohortId),
    /// No student profile matches the given email.
    StudentNotFound(String),
    /// The cohort's dates cannot be scheduled.
    InvalidRange(RangeError),
    /// The range is valid but holds no eligible day.
    NoSessionsGenerated,
    /// Request validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl CohortError {
    pub fn student_not_found(email: impl Into<String>) -> Self {
        CohortError::StudentNotFound(email.into())
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CohortError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        CohortError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            CohortError::NotFound(_) => ErrorCode::CohortNotFound,
            CohortError::StudentNotFound(_) => ErrorCode::StudentNotFound,
            CohortError::InvalidRange(err) => err.code(),
            CohortError::NoSessionsGenerated => ErrorCode::NoSessionsGenerated,
            CohortError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            CohortError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            CohortError::NotFound(id) => format!("Cohort not found: {}", id),
            CohortError::StudentNotFound(_) => "Student not found".to_string(),
            CohortError::InvalidRange(err) => err.to_string(),
            CohortError::NoSessionsGenerated => {
                "No valid session dates could be generated for this date range".to_string()
            }
            CohortError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            CohortError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for CohortError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CohortError {}

impl From<RangeError> for CohortError {
    fn from(err: RangeError) -> Self {
        CohortError::InvalidRange(err)
    }
}

impl From<DomainError> for CohortError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::NoSessionsGenerated => CohortError::NoSessionsGenerated,
            ErrorCode::ValidationFailed => CohortError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => CohortError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scheduling::DateField;

    #[test]
    fn range_errors_keep_their_codes() {
        let err: CohortError = RangeError::MissingDate(DateField::End).into();
        assert_eq!(err.code(), ErrorCode::MissingDate);
        assert!(err.message().contains("end_date"));
    }

    #[test]
    fn empty_schedule_has_user_message() {
        assert_eq!(
            CohortError::NoSessionsGenerated.to_string(),
            "No valid session dates could be generated for this date range"
        );
    }

    #[test]
    fn database_errors_become_infrastructure() {
        let err: CohortError = DomainError::database("Failed to insert sessions", "timeout").into();
        assert!(matches!(err, CohortError::Infrastructure(_)));
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }

    #[test]
    fn validation_domain_errors_keep_field() {
        let err: CohortError = DomainError::new(ErrorCode::ValidationFailed, "bad email")
            .with_detail("field", "email")
            .into();
        assert_eq!(
            err,
            CohortError::ValidationFailed {
                field: "email".to_string(),
                message: "bad email".to_string(),
            }
        );
    }
}
