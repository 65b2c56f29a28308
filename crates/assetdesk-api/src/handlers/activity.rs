//! Activity log handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use assetdesk_core::error::AppError;
use assetdesk_database::repositories::audit::ActivityFilter;
use assetdesk_entity::audit::{AuditAction, AuditLogEntry};

use crate::dto::request::ActivityListQuery;
use crate::dto::response::{ApiResponse, PagedResponse};
use crate::error::ApiError;
use crate::extractors::PaginationParams;
use crate::state::AppState;

/// GET /api/activity
///
/// Filters are conjunctive; an unknown action name is rejected rather
/// than silently matching nothing.
pub async fn list(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(query): Query<ActivityListQuery>,
) -> Result<Json<PagedResponse<AuditLogEntry>>, ApiError> {
    let action = query
        .action
        .map(|raw| raw.parse::<AuditAction>())
        .transpose()?;

    let filter = ActivityFilter {
        user_id: query.user_id,
        action,
        target_type: query.target_type,
        target_id: query.target_id,
    };

    let page = state
        .activity
        .query(&filter, &pagination.into_page_request())
        .await?;
    Ok(Json(page.into()))
}

/// GET /api/activity/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<AuditLogEntry>>, ApiError> {
    let entry = state
        .activity
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Activity entry {id} not found")))?;
    Ok(Json(ApiResponse::new(entry)))
}
