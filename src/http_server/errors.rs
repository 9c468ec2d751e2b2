//! # HTTP API Errors
//!
//! Error types for the animal endpoints and their status-code mapping.

use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::schema::SchemaError;
use crate::store::StoreError;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Message returned for every rejected create payload
pub const INVALID_ANIMAL_MESSAGE: &str = "The animal is not properly formatted.";

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Create payload failed schema validation
    #[error("{}", INVALID_ANIMAL_MESSAGE)]
    InvalidAnimal(#[source] SchemaError),

    /// Request body could not be decoded
    #[error("{message}")]
    InvalidBody { status: StatusCode, message: String },

    /// No record with the requested id
    #[error("Resource not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Record store failure (persistence or lock)
    #[error("Internal error: {0}")]
    Store(#[from] StoreError),

    /// Blocking store task panicked or was cancelled
    #[error("Internal error: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            ApiError::InvalidAnimal(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody { status, .. } => *status,

            // 404 Not Found
            ApiError::NotFound => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            ApiError::Store(_) | ApiError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        ApiError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Not-found responses carry no body; everything else is plain text.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::NotFound => status.into_response(),
            other => (status, other.to_string()).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidAnimal(SchemaError::MissingField("diet".into())).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Store(StoreError::LockPoisoned).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_animal_message_hides_field() {
        let err = ApiError::InvalidAnimal(SchemaError::MissingField("diet".into()));
        assert_eq!(err.to_string(), INVALID_ANIMAL_MESSAGE);
    }

    #[test]
    fn test_store_error_propagation() {
        let store_err = StoreError::Io {
            path: "animals.json".into(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let err = ApiError::from(store_err);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("animals.json"));
    }

    #[tokio::test]
    async fn test_not_found_response_is_empty() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }
}
