//! Consumable handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use assetdesk_core::error::AppError;
use assetdesk_entity::audit::AuditAction;
use assetdesk_entity::consumable::{Consumable, CreateConsumable};

use crate::dto::request::{ConsumableListQuery, CreateConsumableRequest, TicketQuery, UpdateConsumableRequest};
use crate::dto::response::{ApiResponse, MessageResponse, PagedResponse, created};
use crate::dto::validate_payload;
use crate::error::ApiError;
use crate::extractors::{Actor, PaginationParams};
use crate::state::AppState;

/// Target type recorded in audit entries for consumables.
const TARGET: &str = "consumable";

/// GET /api/consumables
pub async fn list(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(query): Query<ConsumableListQuery>,
) -> Result<Json<PagedResponse<Consumable>>, ApiError> {
    let page = state
        .consumables
        .list(query.category_id, &pagination.into_page_request())
        .await?;
    Ok(Json(page.into()))
}

/// GET /api/consumables/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Consumable>>, ApiError> {
    let consumable = state
        .consumables
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Consumable {id} not found")))?;
    Ok(Json(ApiResponse::new(consumable)))
}

/// POST /api/consumables
pub async fn create(
    State(state): State<AppState>,
    actor: Actor,
    Json(body): Json<CreateConsumableRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Consumable>>), ApiError> {
    validate_payload(&body)?;

    let consumable = state
        .consumables
        .create(&CreateConsumable {
            name: body.name,
            category_id: body.category_id,
            location_id: body.location_id,
            quantity: body.quantity,
            min_quantity: body.min_quantity,
        })
        .await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::ConsumableCreate,
            TARGET,
            Some(consumable.id),
            Some(json!({ "name": consumable.name, "quantity": consumable.quantity })),
            &body.external_ticket_id,
        )
        .await?;

    Ok(created(consumable))
}

/// PUT /api/consumables/{id}
pub async fn update(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateConsumableRequest>,
) -> Result<Json<ApiResponse<Consumable>>, ApiError> {
    validate_payload(&body)?;

    let consumable = state
        .consumables
        .update(id, body.name.as_deref(), body.quantity, body.min_quantity)
        .await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::ConsumableUpdate,
            TARGET,
            Some(id),
            Some(json!({ "name": consumable.name, "quantity": consumable.quantity })),
            &body.external_ticket_id,
        )
        .await?;

    Ok(Json(ApiResponse::new(consumable)))
}

/// DELETE /api/consumables/{id}
pub async fn delete(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Query(ticket): Query<TicketQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate_payload(&ticket)?;

    let consumable = state
        .consumables
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Consumable {id} not found")))?;

    state.consumables.delete(id).await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::ConsumableDelete,
            TARGET,
            Some(id),
            Some(json!({ "name": consumable.name })),
            &ticket.external_ticket_id,
        )
        .await?;

    Ok(Json(MessageResponse::new("Consumable deleted")))
}
