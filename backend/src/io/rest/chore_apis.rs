//! # REST API for Chores
//!
//! Endpoints behind the chore widgets: the current chart, the rotation
//! schedule and manual reassignment.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use shared::{ReassignTaskRequest, ReassignTaskResponse};
use tracing::info;

use crate::domain::commands::chores::ReassignTaskCommand;
use crate::io::rest::error_response;
use crate::io::rest::mappers::rotation_mapper::RotationMapper;
use crate::AppState;

/// Get the chore chart (tasks, kids and rotation settings)
pub async fn get_chores(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/chores");

    match state.chore_service.get_config() {
        Ok(config) => (StatusCode::OK, Json(config.chores)).into_response(),
        Err(e) => error_response("load chores", e),
    }
}

/// Get the next rotation instants
pub async fn get_rotation_status(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/chores/rotation");

    match state.chore_service.rotation_status() {
        Ok(status) => (StatusCode::OK, Json(RotationMapper::to_dto(status))).into_response(),
        Err(e) => error_response("get rotation status", e),
    }
}

/// Hand a task to a kid, or clear its assignment
pub async fn reassign_task(
    State(state): State<AppState>,
    Json(request): Json<ReassignTaskRequest>,
) -> impl IntoResponse {
    info!("POST /api/chores/reassign - request: {:?}", request);

    let command = ReassignTaskCommand {
        task_id: request.task_id,
        kid_id: request.kid_id,
    };

    match state.chore_service.reassign_task(command) {
        Ok(result) => {
            let response = ReassignTaskResponse {
                task: result.task,
                success_message: result.success_message,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response("reassign task", e),
    }
}
