use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },
    #[error("Email already exists")]
    DuplicateEmail,
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Internal server error")]
    Internal,
}

impl AppError {
    /// Store-boundary mapping: the email uniqueness constraint surfaces as
    /// a typed conflict, everything else stays an infrastructure failure.
    pub fn from_sqlx(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &e {
            // 2067 = SQLite unique constraint
            if db_err.code().as_deref() == Some("2067") {
                return AppError::DuplicateEmail;
            }
        }
        AppError::Database(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Database(e) => {
                error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
            AppError::Validation { field, reason } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": reason, "field": field }),
            ),
            AppError::DuplicateEmail => (
                StatusCode::CONFLICT,
                json!({ "error": "Email already exists" }),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, json!({ "error": "Unauthorized" })),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal error" }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
