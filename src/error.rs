// src/error.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug)]
pub enum AppError {
    /// One or more invalid/missing input fields; carries every violation.
    Validation(Vec<FieldError>),
    /// Stock ran out between the customer loading the form and committing.
    StockExhausted,
    /// Durable storage refused an attachment write.
    AttachmentUpload(String),
    Database(sqlx::Error),
    /// The delete affected zero rows; the stock restore was rolled back.
    DeletionForbidden,
    /// Bad credentials. Deliberately does not say which field was wrong.
    Auth,
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl AppError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        AppError::Validation(vec![FieldError {
            field: field.to_string(),
            message: message.into(),
        }])
    }

    pub fn fields(fields: Vec<FieldError>) -> Self {
        AppError::Validation(fields)
    }

    pub fn upload(message: impl Into<String>) -> Self {
        AppError::AttachmentUpload(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        AppError::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        AppError::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        AppError::Internal(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, fields) = match self {
            AppError::Validation(fields) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                "One or more fields are invalid".to_string(),
                Some(fields),
            ),
            AppError::StockExhausted => (
                StatusCode::CONFLICT,
                "stock_exhausted",
                "So sorry! Someone just grabbed the last pieces. We are now sold out."
                    .to_string(),
                None,
            ),
            AppError::AttachmentUpload(msg) => {
                tracing::error!(error = %msg, "Attachment upload failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "attachment_upload_failed",
                    msg,
                    None,
                )
            }
            AppError::Database(e) => {
                tracing::error!(error = %e, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "Database error occurred".to_string(),
                    None,
                )
            }
            AppError::DeletionForbidden => (
                StatusCode::FORBIDDEN,
                "deletion_forbidden",
                "Order deletion was not permitted; stock was left unchanged".to_string(),
                None,
            ),
            AppError::Auth => (
                StatusCode::UNAUTHORIZED,
                "auth_failed",
                "Invalid email or password".to_string(),
                None,
            ),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "unauthorized", msg, None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg, None),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    msg,
                    None,
                )
            }
        };

        let body = match fields {
            Some(fields) => Json(json!({
                "error": message,
                "code": code,
                "fields": fields,
            })),
            None => Json(json!({
                "error": message,
                "code": code,
            })),
        };

        (status, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err)
    }
}
