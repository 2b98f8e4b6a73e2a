use axum::response::Json;
use shared::HealthResponse;

/// Liveness probe for the kiosk's container runtime
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
