use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{debug, error, warn};
use validator::ValidationErrors;

use crate::repository::RepositoryError;
use crate::utils::response::error as error_response;

#[derive(Debug, Error)]
pub enum AppError {
    /// Body could not be decoded at all (bad JSON, missing required field, wrong type).
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Body decoded but broke a declared constraint.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationErrors),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Database error")]
    DatabaseError(#[from] RepositoryError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) | AppError::InvalidInput(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    fn log(&self) {
        match self {
            AppError::NotFound(msg) => debug!(message = %msg, "Resource not found"),
            AppError::ValidationError(msg) => warn!(message = %msg, "Rejected request body"),
            AppError::InvalidInput(errors) => warn!(errors = %errors, "Rejected request body"),
            AppError::DatabaseError(e) => error!(error = ?e, "Database error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        self.log();

        let (message, details) = match self {
            // Misses carry no body.
            AppError::NotFound(_) => return status.into_response(),
            AppError::ValidationError(msg) => (msg, None),
            AppError::InvalidInput(errors) => (
                "Request body failed validation".to_string(),
                serde_json::to_value(&errors).ok(),
            ),
            // Do not expose internal details in the API response
            AppError::DatabaseError(_) => ("A database error occurred".to_string(), None),
        };

        error_response(code, message, details, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;
    use validator::Validate;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[derive(Validate)]
    struct ShortTitle {
        #[validate(length(max = 3))]
        title: String,
    }

    #[tokio::test]
    async fn test_not_found_has_empty_body() {
        let response = AppError::NotFound("dev event".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_input_lists_fields() {
        let errors = ShortTitle {
            title: "too long".into(),
        }
        .validate()
        .unwrap_err();
        let response = AppError::from(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert!(json["error"]["details"]["title"].is_array());
    }

    #[tokio::test]
    async fn test_database_error_hides_details() {
        let err = AppError::from(RepositoryError::Db(sqlx::Error::PoolTimedOut));
        assert_eq!(err.code(), "DATABASE_ERROR");

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["error"]["message"], "A database error occurred");
        assert!(json["error"]["details"].is_null());
    }
}
