//! HTTP error envelope
//!
//! Status codes are part of the public contract and several of them are
//! deliberately non-standard, kept for clients that predate this service:
//! 403 for any rejected form input, 420 for duplicate registration, 401 for
//! unknown accounts and 402 for bad credentials.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::DomainError;

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Error detail structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    /// Stable machine-readable classification, see `DomainError::kind`
    pub kind: String,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: ApiErrorDetail {
                    message: message.into(),
                    kind: kind.into(),
                },
            },
        }
    }

    /// Rejected form input. The legacy contract uses 403 here, not 400.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, "invalid_input", message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "unauthorized", message)
    }

    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "infrastructure",
            "Something went wrong on our end. Please try again.",
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let status = match &err {
            DomainError::InvalidInput { .. } | DomainError::NotPermitted { .. } => {
                StatusCode::FORBIDDEN
            }
            // Legacy duplicate-registration code; not in the RFC registry
            DomainError::DuplicateEmail => {
                StatusCode::from_u16(420).unwrap_or(StatusCode::CONFLICT)
            }
            DomainError::UnknownAccount => StatusCode::UNAUTHORIZED,
            DomainError::BadCredential => StatusCode::PAYMENT_REQUIRED,
            DomainError::SamePassword
            | DomainError::AlreadyOnTeam
            | DomainError::InviteCodeTaken
            | DomainError::TeamFull => StatusCode::CONFLICT,
            DomainError::InvalidToken => StatusCode::BAD_REQUEST,
            DomainError::ExpiredToken => StatusCode::GONE,
            DomainError::UnknownInviteCode => StatusCode::NOT_FOUND,
            DomainError::Infrastructure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Infrastructure detail stays in the logs, never in the body
        if let DomainError::Infrastructure { message } = &err {
            error!(error = %message, "Infrastructure failure");
            return Self::internal();
        }

        Self::new(status, err.kind(), err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.response.error.kind, self.response.error.message
        )
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_status_codes() {
        let err: ApiError = DomainError::DuplicateEmail.into();
        assert_eq!(err.status.as_u16(), 420);

        let err: ApiError = DomainError::UnknownAccount.into();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);

        let err: ApiError = DomainError::BadCredential.into();
        assert_eq!(err.status, StatusCode::PAYMENT_REQUIRED);

        let err: ApiError = DomainError::invalid_input("bad form").into();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_token_status_codes() {
        let err: ApiError = DomainError::InvalidToken.into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let err: ApiError = DomainError::ExpiredToken.into();
        assert_eq!(err.status, StatusCode::GONE);
    }

    #[test]
    fn test_team_status_codes() {
        let err: ApiError = DomainError::TeamFull.into();
        assert_eq!(err.status, StatusCode::CONFLICT);

        let err: ApiError = DomainError::UnknownInviteCode.into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_infrastructure_detail_is_hidden() {
        let err: ApiError = DomainError::infrastructure("db password is hunter2").into();

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.response.error.message.contains("hunter2"));
    }

    #[test]
    fn test_error_serialization() {
        let err: ApiError = DomainError::TeamFull.into();
        let json = serde_json::to_string(&err.response).unwrap();

        assert!(json.contains("team_full"));
        assert!(json.contains("too many people"));
    }
}
