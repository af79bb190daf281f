//! Application error type and HTTP mapping.
//!
//! Business-rule rejections that map to error statuses (`PastTime`,
//! `DietaryMismatch`, `NotFound`) are variants here alongside the plumbing
//! errors. The informational outcomes `AlreadyBooked` and
//! `NoTableAvailable` are deliberately *not* errors; they travel on the
//! success path as [`crate::application::services::CreateOutcome`] and are
//! rendered as HTTP 200 with a message payload.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

/// JSON error envelope: `{"error": {...}}`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Application-level error with an HTTP mapping.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing input, rejected before any business logic runs.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// The requested reservation time is at or before the current time.
    #[error("{message}")]
    PastTime { message: String },

    /// The restaurant's endorsements do not cover the party's restrictions.
    #[error("{message}")]
    DietaryMismatch { message: String },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("{message}")]
    Conflict { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn past_time() -> Self {
        Self::PastTime {
            message: "Reservation time must be in the future".to_string(),
        }
    }

    pub fn dietary_mismatch() -> Self {
        Self::DietaryMismatch {
            message: "Sorry, the restaurant cannot accommodate your party's dietary restrictions"
                .to_string(),
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_error",
            Self::PastTime { .. } => "past_time",
            Self::DietaryMismatch { .. } => "dietary_mismatch",
            Self::NotFound { .. } => "not_found",
            Self::Conflict { .. } => "conflict",
            Self::Internal { .. } => "internal_error",
        }
    }

    /// Converts into the serializable payload used in response bodies.
    pub fn to_error_info(&self) -> ErrorInfo {
        let details = match self {
            Self::Validation { details, .. }
            | Self::NotFound { details, .. }
            | Self::Conflict { details, .. }
            | Self::Internal { details, .. } => details.clone(),
            Self::PastTime { .. } | Self::DietaryMismatch { .. } => json!({}),
        };

        ErrorInfo {
            code: self.code(),
            message: self.to_string(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation { .. } | AppError::PastTime { .. } => StatusCode::BAD_REQUEST,
            AppError::DietaryMismatch { .. } => StatusCode::FORBIDDEN,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let mut fields: Vec<&str> = field_errors.keys().map(|k| k.as_ref()).collect();
        fields.sort_unstable();

        let plural = if fields.len() > 1 { "s" } else { "" };
        AppError::bad_request(
            format!(
                "Invalid or missing input{} provided for: {}",
                plural,
                fields.join(", ")
            ),
            json!({ "fields": fields }),
        )
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        tracing::error!(error = ?e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}
