//! # API Error Types
//!
//! Unified error handling for the REST layer. Only persistence failures
//! ever reach this type; cache failures are absorbed by the cache facade
//! before a handler sees them.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use navalha_persistence::PersistenceError;

/// API-level errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Persistence(PersistenceError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Persistence(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get machine-readable error code for response bodies
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Persistence(PersistenceError::NotFound { .. }) => "NOT_FOUND",
            Self::Persistence(_) => "PERSISTENCE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "error": {
                "message": self.to_string(),
                "code": self.error_code(),
            }
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persistence_errors_map_to_500() {
        let err = ApiError::Persistence(PersistenceError::Database("connection refused".into()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "PERSISTENCE_ERROR");
    }

    #[test]
    fn missing_entities_map_to_404() {
        let err = ApiError::Persistence(PersistenceError::NotFound {
            entity_type: "employee".into(),
            key: "42".into(),
        });
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn internal_errors_map_to_500() {
        let err = ApiError::Internal("state poisoned".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
    }
}
