//! Dashboard handler.

use axum::Json;
use axum::extract::State;

use assetdesk_service::dashboard::DashboardSummary;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/dashboard
pub async fn summary(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DashboardSummary>>, ApiError> {
    let summary = state.dashboard.summary().await?;
    Ok(Json(ApiResponse::new(summary)))
}
