//! # REST API for the Kiosk Configuration
//!
//! The UI reads and replaces the whole configuration blob here. Reading it
//! also commits any chore rotation that has come due.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use shared::{AppConfig, UpdateConfigResponse};
use tracing::info;

use crate::domain::commands::config::UpdateConfigCommand;
use crate::io::rest::error_response;
use crate::AppState;

/// Get the configuration with chores rotated as of now
pub async fn get_config(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/config");

    match state.chore_service.get_config() {
        Ok(config) => (StatusCode::OK, Json(config)).into_response(),
        Err(e) => error_response("load configuration", e),
    }
}

/// Replace the configuration
pub async fn update_config(
    State(state): State<AppState>,
    Json(config): Json<AppConfig>,
) -> impl IntoResponse {
    info!(
        kids = config.chores.kids.len(),
        tasks = config.chores.tasks.len(),
        "POST /api/config"
    );

    let command = UpdateConfigCommand { config };

    match state.chore_service.update_config(command) {
        Ok(result) => {
            let response = UpdateConfigResponse {
                config: result.config,
                success_message: result.success_message,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response("save configuration", e),
    }
}
