//! Health check handlers.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::dto::response::ApiResponse;
use crate::state::AppState;

/// GET /api/health
///
/// Liveness probe. Does not touch the database.
pub async fn health_check() -> Json<ApiResponse<Value>> {
    Json(ApiResponse::new(json!({
        "status": "ok",
    })))
}

/// GET /api/health/detailed
///
/// Readiness probe: pings the database and reports pool usage. A failed
/// ping yields a degraded payload, not an error response.
pub async fn health_detailed(State(state): State<AppState>) -> Json<ApiResponse<Value>> {
    let health = state.db.health_snapshot().await;

    Json(ApiResponse::new(json!({
        "status": health.status(),
        "database": health.database_up,
        "pool": {
            "size": health.connections,
            "idle": health.idle,
        },
    })))
}
