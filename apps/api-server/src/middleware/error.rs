//! Error handling - RFC 7807 compliant responses.
//!
//! Maps the core error taxonomy onto HTTP statuses: `UserNotFound` is a 404,
//! `UpstreamUnavailable` a 503, `DataCorruption` a 500.

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use chirp_core::error::{DomainError, RepoError, TimelineError};
use chirp_shared::ErrorResponse;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    ServiceUnavailable(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::ServiceUnavailable(msg) => write!(f, "Service unavailable: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Conflict(detail) => ErrorResponse::conflict(detail),
            AppError::ServiceUnavailable(detail) => {
                tracing::warn!("Upstream unavailable: {}", detail);
                ErrorResponse::service_unavailable("Upstream dependency unavailable")
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<TimelineError> for AppError {
    fn from(err: TimelineError) -> Self {
        match err {
            TimelineError::UserNotFound(username) => {
                AppError::NotFound(format!("user {} does not exist", username))
            }
            TimelineError::UpstreamUnavailable(msg) => AppError::ServiceUnavailable(msg),
            TimelineError::DataCorruption(msg) => AppError::Internal(msg),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::Duplicate(msg) => AppError::Conflict(msg),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Constraint(msg) => AppError::Conflict(msg),
            RepoError::Connection(msg) => {
                tracing::error!("Store connection error: {}", msg);
                AppError::ServiceUnavailable("Store unavailable".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Store query error: {}", msg);
                AppError::Internal("Store error".to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
