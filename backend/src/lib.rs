//! # Kiosk Backend
//!
//! Server side of the household kiosk dashboard: stores the configuration
//! blob the UI edits and keeps the chore chart rotating.
//!
//! ## Architecture
//!
//! ```text
//! Kiosk UI
//!     ↓
//! IO Layer (axum REST handlers)
//!     ↓
//! Domain Layer (chore service, rotation engine)
//!     ↓
//! Storage Layer (config.json)
//! ```

pub mod domain;
pub mod io;
pub mod settings;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_utils;

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::info;

use crate::domain::{ChoreService, Clock, SystemClock};
use crate::settings::ServerSettings;
use crate::storage::{ConfigStorage, JsonConfigRepository};

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub chore_service: ChoreService,
}

impl AppState {
    pub fn new(storage: Arc<dyn ConfigStorage>, clock: Arc<dyn Clock>) -> Self {
        Self {
            chore_service: ChoreService::new(storage, clock),
        }
    }
}

/// Initialize the backend with the configured data directory
pub fn initialize_backend(settings: &ServerSettings) -> Result<AppState> {
    let repository = JsonConfigRepository::new(&settings.data_dir)?;
    info!("Configuration store ready in {:?}", repository.base_directory());

    info!("Setting up application state");
    Ok(AppState::new(Arc::new(repository), Arc::new(SystemClock)))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, allowed_origin: Option<HeaderValue>) -> Router {
    let origin = match allowed_origin {
        Some(origin) => AllowOrigin::exact(origin),
        None => AllowOrigin::from(Any),
    };
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route(
            "/config",
            get(io::config_apis::get_config).post(io::config_apis::update_config),
        )
        .route("/chores", get(io::chore_apis::get_chores))
        .route("/chores/rotation", get(io::chore_apis::get_rotation_status))
        .route("/chores/reassign", post(io::chore_apis::reassign_task))
        .route("/health", get(io::health_apis::health));

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state)
}
