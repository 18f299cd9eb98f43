use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::services::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("email error: {0}")]
    Email(String),

    #[error("{0}")]
    NotFound(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Email(_) => StatusCode::BAD_GATEWAY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Store and internal details stay in the logs, not the response body.
        let message = match &self {
            AppError::Database(e) => {
                tracing::error!(error = %e, "database error");
                "Internal server error.".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!(error = %e, "internal error");
                "Internal server error.".to_string()
            }
            other => other.to_string(),
        };

        let body = serde_json::json!({ "message": message, "status": "error" });
        (status, axum::Json(body)).into_response()
    }
}
