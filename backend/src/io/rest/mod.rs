//! # REST API Interface Layer
//!
//! Axum handlers for the kiosk backend. Handlers log the request, call the
//! chore service and map failures to status codes:
//!
//! - `ChoreError::Invalid` → 400
//! - `ChoreError::TaskNotFound` / `ChoreError::KidNotFound` → 404
//! - anything else → 500

pub mod chore_apis;
pub mod config_apis;
pub mod health_apis;
pub mod mappers;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::domain::ChoreError;

/// Log a failed operation and turn it into an HTTP response
pub fn error_response(operation: &str, e: anyhow::Error) -> Response {
    error!("Failed to {}: {:#}", operation, e);

    let status = match e.downcast_ref::<ChoreError>() {
        Some(ChoreError::Invalid(_)) => StatusCode::BAD_REQUEST,
        Some(ChoreError::TaskNotFound(_)) | Some(ChoreError::KidNotFound(_)) => {
            StatusCode::NOT_FOUND
        }
        None => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
        format!("Failed to {}", operation)
    } else {
        e.to_string()
    };

    (status, message).into_response()
}
