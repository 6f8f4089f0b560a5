//! HTTP rendering of roster errors.

use crate::utils::error::RosterError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

impl RosterError {
    /// Default HTTP status for this error.
    ///
    /// - Validation / duplicate signup: 400 Bad Request
    /// - Unknown activity / participant not enrolled: 404 Not Found
    /// - Configuration / IO: 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError { .. } | Self::AlreadySignedUp { .. } => StatusCode::BAD_REQUEST,
            Self::ActivityNotFound { .. } | Self::ParticipantNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::TomlError(_)
            | Self::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error body returned by the API: `{"detail": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    /// Signup reports every client-side rejection as 400, including an
    /// unknown activity.
    pub fn rejected_signup(error: RosterError) -> Self {
        let status = if error.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            error.status_code()
        };
        Self::with_status(status, &error)
    }

    fn with_status(status: StatusCode, error: &RosterError) -> Self {
        // 內部錯誤不外洩細節
        let detail = if status.is_server_error() {
            "Internal server error".to_string()
        } else {
            error.to_string()
        };
        Self { status, detail }
    }
}

impl From<RosterError> for ApiError {
    fn from(error: RosterError) -> Self {
        Self::with_status(error.status_code(), &error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_found() -> RosterError {
        RosterError::ActivityNotFound {
            activity: "Knitting".to_string(),
        }
    }

    #[test]
    fn test_error_status_codes() {
        assert_eq!(not_found().status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            RosterError::ParticipantNotFound {
                activity: "Chess Club".to_string(),
                participant: "x".to_string(),
            }
            .status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RosterError::AlreadySignedUp {
                activity: "Chess Club".to_string(),
                participant: "x".to_string(),
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RosterError::ValidationError {
                field: "email".to_string(),
                reason: "empty".to_string(),
            }
            .status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_signup_maps_unknown_activity_to_bad_request() {
        let api_error = ApiError::rejected_signup(not_found());
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert!(api_error.detail.contains("Knitting"));

        let api_error = ApiError::from(not_found());
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_server_errors_hide_details() {
        let io = RosterError::from(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk secret",
        ));
        let api_error = ApiError::rejected_signup(io);
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.detail, "Internal server error");
    }
}
