//! Asset comment handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use assetdesk_core::error::AppError;
use assetdesk_entity::audit::AuditAction;
use assetdesk_entity::comment::Comment;
use assetdesk_service::audit::truncate_snapshot;

use crate::dto::request::{CreateCommentRequest, TicketQuery, UpdateCommentRequest};
use crate::dto::response::{ApiResponse, MessageResponse, PagedResponse, created};
use crate::dto::validate_payload;
use crate::error::ApiError;
use crate::extractors::{Actor, PaginationParams};
use crate::state::AppState;

/// Target type recorded in audit entries for comments.
const TARGET: &str = "comment";

/// Display name of the acting user for audit details.
async fn actor_name(state: &AppState, actor: Actor) -> Result<String, ApiError> {
    Ok(state
        .users
        .find_by_id(actor.user_id)
        .await?
        .map(|u| u.shown_name().to_string())
        .unwrap_or_else(|| actor.user_id.to_string()))
}

/// GET /api/assets/{id}/comments
pub async fn list_for_asset(
    State(state): State<AppState>,
    Path(asset_id): Path<Uuid>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<PagedResponse<Comment>>, ApiError> {
    let page = state
        .comments
        .list_for_asset(asset_id, &pagination.into_page_request())
        .await?;
    Ok(Json(page.into()))
}

/// POST /api/assets/{id}/comments
pub async fn create(
    State(state): State<AppState>,
    actor: Actor,
    Path(asset_id): Path<Uuid>,
    Json(body): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Comment>>), ApiError> {
    validate_payload(&body)?;

    state
        .assets
        .find_by_id(asset_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Asset {asset_id} not found")))?;

    let comment = state
        .comments
        .create(asset_id, actor.user_id, &body.content)
        .await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::CommentCreate,
            TARGET,
            Some(comment.id),
            Some(json!({
                "asset_id": asset_id,
                "content": truncate_snapshot(&body.content),
            })),
            &body.external_ticket_id,
        )
        .await?;

    Ok(created(comment))
}

/// PUT /api/comments/{id}
pub async fn update(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateCommentRequest>,
) -> Result<Json<ApiResponse<Comment>>, ApiError> {
    validate_payload(&body)?;

    let existing = state
        .comments
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Comment {id} not found")))?;

    let comment = state.comments.update_content(id, &body.content).await?;
    let name = actor_name(&state, actor).await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::CommentUpdate,
            TARGET,
            Some(id),
            Some(json!({
                "user": name,
                "old_content": truncate_snapshot(&existing.content),
                "new_content": truncate_snapshot(&body.content),
            })),
            &body.external_ticket_id,
        )
        .await?;

    Ok(Json(ApiResponse::new(comment)))
}

/// DELETE /api/comments/{id}
pub async fn delete(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Query(ticket): Query<TicketQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate_payload(&ticket)?;

    let existing = state
        .comments
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Comment {id} not found")))?;

    state.comments.delete(id).await?;
    let name = actor_name(&state, actor).await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::CommentDelete,
            TARGET,
            Some(id),
            Some(json!({
                "user": name,
                "content": truncate_snapshot(&existing.content),
            })),
            &ticket.external_ticket_id,
        )
        .await?;

    Ok(Json(MessageResponse::new("Comment deleted")))
}
