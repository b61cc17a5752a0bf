//! REST API error types
//!
//! Every failure leaves the server as `{"error": {"code", "message", "field?"}}`
//! with a matching status code. Version conflicts are the exception: they
//! carry the current server state so the client can rebase.

use hub_core::{MutationOutcome, VersionConflict};
use hub_mutation::MutationError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    pub message: String,
    /// Offending input field, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// 404
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// 400
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// 400, body or query could not be parsed
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// 401
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// 403
    #[error("Forbidden: {message} {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    /// 409, stale `expected_version`
    #[error("Version conflict (current version: {current_version}) {location}")]
    Conflict {
        message: String,
        current_version: i32,
        current_data: Value,
        location: ErrorLocation,
    },

    /// 500
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthorized<M: Into<String>>(message: M) -> Self {
        ApiError::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_request<M: Into<String>>(message: M) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Conflict response carrying the state the client lost against.
    #[track_caller]
    pub fn conflict<T: Serialize>(conflict: VersionConflict<T>) -> Self {
        let current_data = match serde_json::to_value(&conflict.current) {
            Ok(value) => value,
            Err(e) => {
                return ApiError::Internal {
                    message: format!("Failed to serialize current state: {e}"),
                    location: ErrorLocation::from(Location::caller()),
                };
            }
        };

        ApiError::Conflict {
            message: "Resource was modified by another user".to_string(),
            current_version: conflict.current_version,
            current_data,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal { .. } => log::error!("{}", self),
            ApiError::Conflict { .. } => log::warn!("{}", self),
            _ => log::debug!("{}", self),
        }

        let (status, code, message, field) = match self {
            ApiError::Conflict {
                message,
                current_version,
                current_data,
                ..
            } => {
                let body = json!({
                    "kind": "VersionConflict",
                    "message": message,
                    "current_version": current_version,
                    "current_data": current_data,
                });
                return (StatusCode::CONFLICT, Json(body)).into_response();
            }
            ApiError::NotFound { message, .. } => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", message, None)
            }
            ApiError::Validation { message, field, .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", message, field)
            }
            ApiError::BadRequest { message, .. } => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", message, None)
            }
            ApiError::Unauthorized { message, .. } => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message, None)
            }
            ApiError::Forbidden { message, .. } => {
                (StatusCode::FORBIDDEN, "FORBIDDEN", message, None)
            }
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                message,
                None,
            ),
        };

        let body = ApiErrorResponse {
            error: ApiErrorBody {
                code: code.to_string(),
                message,
                field,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<MutationError> for ApiError {
    #[track_caller]
    fn from(e: MutationError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            MutationError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            MutationError::NotFound { message, .. } => ApiError::NotFound { message, location },
            MutationError::Forbidden { message, .. } => ApiError::Forbidden { message, location },
            MutationError::Internal { message, .. } => ApiError::Internal { message, location },
            MutationError::Database { source, .. } => {
                // Don't expose SQL or file paths to clients
                log::error!("Database error: {}", source);
                ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location,
                }
            }
        }
    }
}

impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: Some("id".to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    #[track_caller]
    fn from(rejection: QueryRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

/// Unwrap an applied mutation, turning a version conflict into a 409.
#[track_caller]
pub fn applied<T: Serialize>(outcome: MutationOutcome<T>) -> Result<T> {
    match outcome {
        MutationOutcome::Applied(value) => Ok(value),
        MutationOutcome::Conflict(conflict) => Err(ApiError::conflict(conflict)),
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
