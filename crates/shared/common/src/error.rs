//! Unified error handling.
//!
//! Provides a single application error type with automatic conversion to
//! Axum HTTP responses of the shape `{ "status": ..., "message": ... }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{employer_already_exists, DomainError, EMPLOYER_NOT_FOUND};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Employer not found")]
    NotFound,

    #[error("Employer with email {0} already exists")]
    AlreadyExists(String),

    /// A unique constraint rejected a write. Carries the store's detail;
    /// callers that know the offending value relabel it as `AlreadyExists`.
    #[error("Unique constraint violated: {0}")]
    DuplicateKey(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

/// Error response body for HTTP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Upper-snake HTTP status name, e.g. `BAD_REQUEST`
    pub status: String,
    pub message: String,
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::AlreadyExists(_)
            | AppError::DuplicateKey(_)
            | AppError::Validation(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            #[cfg(feature = "database")]
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get status name for client
    pub fn code(&self) -> &'static str {
        match self.status() {
            StatusCode::NOT_FOUND => "NOT_FOUND",
            StatusCode::BAD_REQUEST => "BAD_REQUEST",
            _ => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Get user-facing message
    pub fn user_message(&self) -> String {
        match self {
            AppError::NotFound => EMPLOYER_NOT_FOUND.to_string(),
            AppError::AlreadyExists(email) => employer_already_exists(email),
            // Fallback for writes whose caller did not relabel the
            // violation; the offending email is not known here
            AppError::DuplicateKey(detail) => {
                tracing::debug!("Unique constraint violated: {}", detail);
                "Employer with the same email already exists".to_string()
            }
            AppError::Validation(msg) | AppError::BadRequest(msg) => msg.clone(),

            // Unexpected failures wrap the cause description
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                format!("An unexpected error occurred: {}", e)
            }
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            status: self.code().to_string(),
            message: self.user_message(),
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::AlreadyExists(email) => AppError::AlreadyExists(email),
            DomainError::NotFound => AppError::NotFound,
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn already_exists(email: impl Into<String>) -> Self {
        AppError::AlreadyExists(email.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(err: AppError) -> (StatusCode, ErrorResponse) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let (status, body) = body_of(AppError::NotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.status, "NOT_FOUND");
        assert_eq!(body.message, "Employer not found");
    }

    #[tokio::test]
    async fn test_already_exists_response() {
        let (status, body) = body_of(AppError::already_exists("john@example.com")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.status, "BAD_REQUEST");
        assert_eq!(
            body.message,
            "Employer with email john@example.com already exists"
        );
    }

    #[tokio::test]
    async fn test_validation_response_keeps_message() {
        let msg = "name: Name cannot be empty, email: Email cannot be empty";
        let (status, body) = body_of(AppError::validation(msg)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message, msg);
    }

    #[tokio::test]
    async fn test_unrelabelled_duplicate_key_is_bad_request() {
        let (status, body) = body_of(AppError::DuplicateKey("employers.email".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.status, "BAD_REQUEST");
        assert!(body.message.contains("already exists"));
    }

    #[cfg(feature = "database")]
    #[tokio::test]
    async fn test_database_response_wraps_cause() {
        let err = AppError::from(sea_orm::DbErr::Custom("connection refused".into()));
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.status, "INTERNAL_SERVER_ERROR");
        assert!(body
            .message
            .starts_with("An unexpected error occurred: "));
        assert!(body.message.contains("connection refused"));
    }

    #[test]
    fn test_domain_error_conversion() {
        assert!(matches!(
            AppError::from(DomainError::NotFound),
            AppError::NotFound
        ));
        assert!(matches!(
            AppError::from(DomainError::already_exists("a@b.c")),
            AppError::AlreadyExists(email) if email == "a@b.c"
        ));
        assert!(matches!(
            AppError::from(DomainError::validation("name: Name cannot be empty")),
            AppError::Validation(_)
        ));
    }

    #[test]
    fn test_option_ext() {
        assert!(matches!(
            None::<i64>.ok_or_not_found(),
            Err(AppError::NotFound)
        ));
        assert_eq!(Some(1).ok_or_not_found().unwrap(), 1);
    }
}
