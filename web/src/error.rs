//! Error types for web handlers.
//!
//! [`AppError`] bridges lifecycle errors and HTTP responses. Every error is
//! rendered as JSON `{"code": ..., "message": ...}`.

use account_service_core::AccountError;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;

/// Application error type for web handlers.
///
/// # Examples
///
/// ```ignore
/// async fn handler() -> Result<Json<AccountDto>, AppError> {
///     let dto = lifecycle.read_by_account_number(number).await?;
///     Ok(Json(dto))
/// }
/// ```
#[derive(Debug)]
pub struct AppError {
    /// HTTP status code
    status: StatusCode,
    /// Error message (user-facing)
    message: String,
    /// Error code (for client error handling)
    code: &'static str,
}

impl AppError {
    /// Create a new application error.
    #[must_use]
    pub const fn new(status: StatusCode, message: String, code: &'static str) -> Self {
        Self {
            status,
            message,
            code,
        }
    }

    /// Create a 400 Bad Request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message.into(), "BAD_REQUEST")
    }

    /// Create a 500 Internal Server Error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            message.into(),
            "INTERNAL_SERVER_ERROR",
        )
    }

    /// HTTP status of this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}

/// Error response body (JSON).
#[derive(Debug, Serialize)]
struct ErrorResponse<'a> {
    /// Error code (for client error handling).
    code: &'a str,
    /// Human-readable error message.
    message: &'a str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, code = self.code, message = %self.message, "Request failed");
        } else {
            tracing::debug!(status = %self.status, code = self.code, message = %self.message, "Request rejected");
        }

        let body = ErrorResponse {
            code: self.code,
            message: &self.message,
        };

        (self.status, Json(body)).into_response()
    }
}

/// Maps each lifecycle error kind to its HTTP status.
impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        let status = match &err {
            AccountError::UserNotFound { .. } | AccountError::AccountNotFound => {
                StatusCode::NOT_FOUND
            }
            AccountError::DuplicateAccount { .. }
            | AccountError::IllegalTransition { .. }
            | AccountError::InactiveAccount { .. }
            | AccountError::AccountClosing { .. }
            | AccountError::ConcurrentModification { .. } => StatusCode::CONFLICT,
            AccountError::IneligibleApplicant
            | AccountError::InsufficientFunds { .. }
            | AccountError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AccountError::Collaborator { .. } => StatusCode::BAD_GATEWAY,
            AccountError::DatabaseError(_) | AccountError::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Store and lock failures stay in the logs.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %err, "Internal failure");
            "An internal error occurred".to_string()
        } else {
            err.to_string()
        };

        Self::new(status, message, err.code())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use account_service_core::{AccountStatus, AccountType, Money, UserId};

    #[test]
    fn test_error_display() {
        let err = AppError::bad_request("Invalid input");
        assert_eq!(err.to_string(), "[BAD_REQUEST] Invalid input");
    }

    #[test]
    fn test_not_found_kinds() {
        let err = AppError::from(AccountError::AccountNotFound);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "ACCOUNT_NOT_FOUND");

        let err = AppError::from(AccountError::UserNotFound { user_id: UserId(7) });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_kinds() {
        for err in [
            AccountError::DuplicateAccount {
                user_id: UserId(1),
                account_type: AccountType::SavingsAccount,
            },
            AccountError::IllegalTransition {
                from: AccountStatus::Active,
                to: AccountStatus::Active,
            },
            AccountError::InactiveAccount {
                status: AccountStatus::Pending,
            },
            AccountError::AccountClosing {
                balance: Money::from_major(5),
            },
        ] {
            assert_eq!(AppError::from(err).status(), StatusCode::CONFLICT);
        }
    }

    #[test]
    fn test_rule_rejections_are_unprocessable() {
        let err = AppError::from(AccountError::InsufficientFunds {
            required: Money::from_major(1_000),
            available: Money::from_major(500),
        });
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            AppError::from(AccountError::IneligibleApplicant).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_collaborator_failure_is_bad_gateway() {
        let err = AppError::from(AccountError::Collaborator {
            service: "user-service",
            message: "timeout".to_string(),
        });
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_database_detail_is_hidden() {
        let err = AppError::from(AccountError::DatabaseError("password=hunter2".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.to_string().contains("hunter2"));
    }
}
