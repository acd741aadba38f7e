//! Error handling for the Pharma Stock Management Platform
//!
//! Provides consistent error responses in English and Hindi

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::ClassificationError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_hi: String,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    // Classification errors
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    #[error("Product has no stock batches")]
    EmptyProduct,

    // Database errors
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

impl From<ClassificationError> for AppError {
    fn from(err: ClassificationError) -> Self {
        match err {
            ClassificationError::InvalidBatch { .. } => AppError::DataIntegrity(err.to_string()),
            ClassificationError::EmptyProduct => AppError::EmptyProduct,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        // Report the alphabetically first offending field so responses are stable
        let field_errors = errors.field_errors();
        match field_errors.iter().min_by_key(|(field, _)| **field) {
            Some((field, field_errs)) => AppError::Validation {
                field: field.to_string(),
                message: field_errs
                    .iter()
                    .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    .unwrap_or_else(|| format!("Invalid value for {}", field)),
                message_hi: format!("{} का मान अमान्य है", field),
            },
            None => AppError::ValidationError(errors.to_string()),
        }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_hi: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::Validation { field, message, message_hi } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: message.clone(),
                    message_hi: message_hi.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::ValidationError(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: msg.clone(),
                    message_hi: format!("अमान्य डेटा: {}", msg),
                    field: None,
                },
            ),
            AppError::DataIntegrity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorDetail {
                    code: "INVALID_BATCH".to_string(),
                    message_en: msg.clone(),
                    message_hi: format!("बैच डेटा अमान्य है: {}", msg),
                    field: None,
                },
            ),
            AppError::EmptyProduct => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "EMPTY_PRODUCT".to_string(),
                    message_en: "At least one stock batch is required".to_string(),
                    message_hi: "कम से कम एक स्टॉक बैच आवश्यक है".to_string(),
                    field: Some("batches".to_string()),
                },
            ),
            AppError::DatabaseError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "DATABASE_ERROR".to_string(),
                    message_en: "A database error occurred".to_string(),
                    message_hi: "डेटाबेस त्रुटि हुई".to_string(),
                    field: None,
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
