//! Location handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use assetdesk_core::error::AppError;
use assetdesk_database::repositories::location::NewLocation;
use assetdesk_entity::audit::AuditAction;
use assetdesk_entity::org::Location;

use crate::dto::request::{CreateLocationRequest, TicketQuery, UpdateLocationRequest};
use crate::dto::response::{ApiResponse, MessageResponse, PagedResponse, created};
use crate::dto::validate_payload;
use crate::error::ApiError;
use crate::extractors::{Actor, PaginationParams};
use crate::state::AppState;

/// Target type recorded in audit entries for locations.
const TARGET: &str = "location";

/// GET /api/locations
pub async fn list(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<PagedResponse<Location>>, ApiError> {
    let page = state
        .locations
        .list(&pagination.into_page_request())
        .await?;
    Ok(Json(page.into()))
}

/// GET /api/locations/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Location>>, ApiError> {
    let location = state
        .locations
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Location {id} not found")))?;
    Ok(Json(ApiResponse::new(location)))
}

/// POST /api/locations
pub async fn create(
    State(state): State<AppState>,
    actor: Actor,
    Json(body): Json<CreateLocationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Location>>), ApiError> {
    validate_payload(&body)?;

    if let Some(parent_id) = body.parent_location_id {
        state
            .locations
            .find_by_id(parent_id)
            .await?
            .ok_or_else(|| AppError::validation(format!("Parent location {parent_id} not found")))?;
    }

    let location = state
        .locations
        .create(&NewLocation {
            name: &body.name,
            parent_location_id: body.parent_location_id,
            address: body.address.as_deref(),
            city: body.city.as_deref(),
            country: body.country.as_deref(),
        })
        .await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::LocationCreate,
            TARGET,
            Some(location.id),
            Some(json!({ "name": location.name })),
            &body.external_ticket_id,
        )
        .await?;

    Ok(created(location))
}

/// PUT /api/locations/{id}
pub async fn update(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateLocationRequest>,
) -> Result<Json<ApiResponse<Location>>, ApiError> {
    validate_payload(&body)?;

    let location = state
        .locations
        .update(
            id,
            body.name.as_deref(),
            body.address.as_deref(),
            body.city.as_deref(),
            body.country.as_deref(),
        )
        .await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::LocationUpdate,
            TARGET,
            Some(id),
            Some(json!({ "name": location.name })),
            &body.external_ticket_id,
        )
        .await?;

    Ok(Json(ApiResponse::new(location)))
}

/// DELETE /api/locations/{id}
///
/// Fails with a descriptive validation error while users, assets, or
/// child locations still reference the location.
pub async fn delete(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Query(ticket): Query<TicketQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate_payload(&ticket)?;

    let location = state
        .locations
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Location {id} not found")))?;

    state.org.delete_location(id).await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::LocationDelete,
            TARGET,
            Some(id),
            Some(json!({ "name": location.name })),
            &ticket.external_ticket_id,
        )
        .await?;

    Ok(Json(MessageResponse::new("Location deleted")))
}
