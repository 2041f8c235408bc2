//! API error handling
//!
//! The only producer of `ApiError` is the error translator's `ErrorOutcome`;
//! this module decides how each kind looks on the wire.
//!
//! | kind | code | status |
//! |---|---|---|
//! | ValidationFailed | `INVALID_ARGUMENT` | 400 |
//! | AlreadyExists | `ALREADY_EXISTS` | 409 |
//! | Unexpected | `UNKNOWN` | 500 |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use domain_proposal::{ErrorKind, ErrorOutcome, Violation};

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    InvalidArgument {
        message: String,
        violations: Vec<Violation>,
    },

    #[error("{0}")]
    AlreadyExists(String),

    #[error("{0}")]
    Unknown(String),
}

impl ApiError {
    /// Wire-level status code name
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            ApiError::AlreadyExists(_) => "ALREADY_EXISTS",
            ApiError::Unknown(_) => "UNKNOWN",
        }
    }

    /// HTTP status carrying the code
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
            ApiError::AlreadyExists(_) => StatusCode::CONFLICT,
            ApiError::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ErrorOutcome> for ApiError {
    fn from(outcome: ErrorOutcome) -> Self {
        match outcome.kind {
            ErrorKind::ValidationFailed => ApiError::InvalidArgument {
                message: outcome.message,
                violations: outcome.violations,
            },
            ErrorKind::AlreadyExists => ApiError::AlreadyExists(outcome.message),
            ErrorKind::Unexpected => ApiError::Unknown(outcome.message),
        }
    }
}

/// One field annotation in an error body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub description: String,
}

impl From<Violation> for FieldViolation {
    fn from(violation: Violation) -> Self {
        Self {
            field: violation.field,
            description: violation.message,
        }
    }
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldViolation>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code().to_string();

        let body = match self {
            ApiError::InvalidArgument { message, violations } => ErrorResponse {
                code,
                message,
                details: Some(violations.into_iter().map(FieldViolation::from).collect()),
            },
            ApiError::AlreadyExists(message) | ApiError::Unknown(message) => ErrorResponse {
                code,
                message,
                details: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_mapping() {
        let invalid = ApiError::from(ErrorOutcome::validation_failed(vec![Violation::new(
            "name",
            "must not be blank",
        )]));
        assert_eq!(invalid.code(), "INVALID_ARGUMENT");
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let exists = ApiError::from(ErrorOutcome::already_exists());
        assert_eq!(exists.code(), "ALREADY_EXISTS");
        assert_eq!(exists.status(), StatusCode::CONFLICT);
        assert_eq!(exists.to_string(), "Document already exists");

        let unknown = ApiError::from(ErrorOutcome::unexpected());
        assert_eq!(unknown.code(), "UNKNOWN");
        assert_eq!(unknown.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_details_only_for_invalid_argument() {
        let body = serde_json::to_value(ErrorResponse {
            code: "ALREADY_EXISTS".to_string(),
            message: "Document already exists".to_string(),
            details: None,
        })
        .unwrap();
        assert!(body.get("details").is_none());

        let body = serde_json::to_value(ErrorResponse {
            code: "INVALID_ARGUMENT".to_string(),
            message: "Invalid parameters".to_string(),
            details: Some(vec![Violation::new("salary", "must not be null").into()]),
        })
        .unwrap();
        assert_eq!(body["details"][0]["field"], "salary");
        assert_eq!(body["details"][0]["description"], "must not be null");
    }
}
