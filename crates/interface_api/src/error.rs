//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use core_kernel::PortError;
use domain_nic::NicError;
use domain_staff::StaffError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        details: Vec<String>,
    },

    #[error("Invalid NIC: {0}")]
    InvalidNic(#[from] NicError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>, details: Vec<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
            details,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, details) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg, None),
            ApiError::Validation { message, details } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                message,
                Some(details),
            ),
            ApiError::InvalidNic(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "invalid_nic",
                err.to_string(),
                Some(vec![err.code().to_string()]),
            ),
            ApiError::Internal(msg) => {
                error!(%msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg, None)
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<PortError> for ApiError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound { entity_type, id } => {
                ApiError::NotFound(format!("{entity_type} not found: {id}"))
            }
            PortError::Validation { message, field } => {
                ApiError::validation(message, field.into_iter().collect())
            }
            PortError::Conflict { message } => ApiError::Conflict(message),
            PortError::Internal { message, .. } => ApiError::Internal(message),
        }
    }
}

impl From<StaffError> for ApiError {
    fn from(err: StaffError) -> Self {
        match err {
            StaffError::NotFound(id) => ApiError::NotFound(format!("Staff not found: {id}")),
            StaffError::Conflict(message) => ApiError::Conflict(message),
            StaffError::ValidationFailed(errors) => {
                ApiError::validation("Staff record is invalid", errors)
            }
            StaffError::Nic(err) => ApiError::InvalidNic(err),
            StaffError::MissingId => ApiError::BadRequest("Staff record has no ID".to_string()),
            StaffError::Store(err) => err.into(),
        }
    }
}
