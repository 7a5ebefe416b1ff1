//! REST API error types
//!
//! Validation failures produce a structured 400 body; store and internal
//! failures produce the fixed 500 body the mobile client already expects,
//! with the underlying detail logged and never exposed.

use ht_store::StoreError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// Error code the client matches on for failed syncs
pub const SYNC_USER_ERROR_CODE: &str = "SERVER_ERROR_SYNC_USER";

/// JSON error response body for validation failures
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Wire body for failed syncs, fixed by the client contract
#[derive(Debug, Serialize)]
pub struct SyncFailureResponse {
    pub ok: bool,
    pub error: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Remote store failure (500)
    #[error("Store failure: {message} {location}")]
    Store {
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

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        match self {
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                Json(ApiErrorResponse {
                    error: ApiErrorBody {
                        code: "VALIDATION_ERROR".into(),
                        message,
                        field,
                    },
                }),
            )
                .into_response(),
            ApiError::Store { .. } | ApiError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SyncFailureResponse {
                    ok: false,
                    error: SYNC_USER_ERROR_CODE.into(),
                }),
            )
                .into_response(),
        }
    }
}

/// Convert store errors to API errors
impl From<StoreError> for ApiError {
    #[track_caller]
    fn from(e: StoreError) -> Self {
        // Don't expose remote store details to clients
        log::error!("Remote store error: {}", e);
        ApiError::Store {
            message: "Remote store operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
