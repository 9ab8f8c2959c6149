//! REST API error types
//!
//! These errors produce consistent JSON responses with appropriate HTTP
//! status codes.

use crate::{AlertHeaders, ApiMetrics, EndpointError};

use sprint_core::CoreError;
use sprint_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field / entity
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "idexists")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Entity the failed request was about
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Request rejected by the endpoint (400) with failure alert headers
    #[error("Invalid request ({error_key}): {message} {location}")]
    InvalidRequest {
        message: String,
        entity_name: String,
        error_key: String,
        alerts: HeaderMap,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    /// Map an endpoint failure, attaching failure alert headers to rejected
    /// requests.
    #[track_caller]
    pub fn from_endpoint(error: EndpointError, alerts: &AlertHeaders) -> Self {
        match error {
            EndpointError::InvalidRequest {
                message,
                entity_name,
                error_key,
                ..
            } => ApiError::InvalidRequest {
                alerts: alerts.failure(entity_name, error_key),
                message,
                entity_name: entity_name.to_string(),
                error_key: error_key.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            EndpointError::Store { source, .. } => ApiError::from(source),
            EndpointError::Internal { message, .. } => {
                log::error!("Endpoint error: {}", message);
                ApiError::Internal {
                    message: "Internal server error".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }

    /// Short name used for the error metric
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "not_found",
            ApiError::Validation { .. } => "validation",
            ApiError::InvalidRequest { .. } => "invalid_request",
            ApiError::BadRequest { .. } => "bad_request",
            ApiError::Internal { .. } => "internal",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);
        ApiMetrics::new().error_occurred(self.kind());

        let (status, headers, body) = match self {
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                HeaderMap::new(),
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                    entity: None,
                },
            ),
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                HeaderMap::new(),
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                    entity: None,
                },
            ),
            ApiError::InvalidRequest {
                message,
                entity_name,
                error_key,
                alerts,
                ..
            } => (
                StatusCode::BAD_REQUEST,
                alerts,
                ApiErrorBody {
                    code: error_key,
                    message,
                    field: None,
                    entity: Some(entity_name),
                },
            ),
            ApiError::BadRequest { message, .. } => (
                StatusCode::BAD_REQUEST,
                HeaderMap::new(),
                ApiErrorBody {
                    code: "BAD_REQUEST".into(),
                    message,
                    field: None,
                    entity: None,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                HeaderMap::new(),
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                    entity: None,
                },
            ),
        };

        (status, headers, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);

        ApiError::Internal {
            message: "Database operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert domain errors raised while decoding requests
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::InvalidSprintStatus { value, .. } => ApiError::Validation {
                message: format!("Invalid sprint status: '{}'", value),
                field: Some("status".into()),
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::InvalidSortProperty { property, .. } => ApiError::BadRequest {
                message: format!("Cannot sort by '{}'", property),
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::InvalidSortDirection { value, .. } => ApiError::BadRequest {
                message: format!("Invalid sort direction: '{}'", value),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
