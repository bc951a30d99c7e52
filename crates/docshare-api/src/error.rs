//! Maps domain errors to HTTP responses.
//!
//! Every failure leaves the API as the same envelope:
//! `{ "success": false, "error": <message>, "code": <CODE>, "invalidEmails"?, "details"? }`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use docshare_core::error::{AppError, ErrorKind};
use docshare_service::share::ShareError;

/// Error envelope body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    /// Always `false`.
    pub success: bool,
    /// Human-readable message.
    pub error: String,
    /// Machine-readable code.
    pub code: String,
    /// Offending emails of a rejected share.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_emails: Option<Vec<String>>,
    /// Diagnostic detail for internal failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// An error on its way to becoming an HTTP response.
#[derive(Debug, Clone, Error)]
#[error("{code}: {message}")]
pub struct ApiError {
    /// HTTP status.
    pub status: StatusCode,
    /// Machine-readable code.
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
    /// Offending emails of a rejected share.
    pub invalid_emails: Option<Vec<String>>,
    /// Diagnostic detail for internal failures.
    pub details: Option<String>,
}

impl ApiError {
    /// Creates an error with the given status, code, and message.
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
            invalid_emails: None,
            details: None,
        }
    }

    /// A 400 `INVALID_INPUT` error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "INVALID_INPUT", message)
    }

    /// A 401 `UNAUTHORIZED` error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message)
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        let (status, code) = match err.kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
            ErrorKind::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            ErrorKind::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
            ErrorKind::PayloadTooLarge => (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE"),
            ErrorKind::Internal
            | ErrorKind::Database
            | ErrorKind::Storage
            | ErrorKind::Configuration
            | ErrorKind::Serialization => {
                return Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    code: "INTERNAL",
                    message: "Internal server error".to_string(),
                    invalid_emails: None,
                    details: Some(err.message),
                };
            }
        };
        Self::new(status, code, err.message)
    }
}

impl From<ShareError> for ApiError {
    fn from(err: ShareError) -> Self {
        let code = err.code();
        match err {
            ShareError::InvalidInput {
                message,
                invalid_emails,
            } => Self {
                invalid_emails,
                ..Self::new(StatusCode::BAD_REQUEST, code, message)
            },
            ShareError::Forbidden(message) => Self::new(StatusCode::FORBIDDEN, code, message),
            ShareError::NotFound(message) => Self::new(StatusCode::NOT_FOUND, code, message),
            ShareError::Internal { message, details } => Self {
                details,
                ..Self::new(StatusCode::INTERNAL_SERVER_ERROR, code, message)
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(
                code = self.code,
                error = %self.message,
                details = self.details.as_deref().unwrap_or_default(),
                "Internal server error"
            );
        }

        let body = ApiErrorBody {
            success: false,
            error: self.message,
            code: self.code.to_string(),
            invalid_emails: self.invalid_emails,
            details: self.details,
        };

        (self.status, Json(body)).into_response()
    }
}
