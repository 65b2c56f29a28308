//! Software license handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use assetdesk_core::error::AppError;
use assetdesk_entity::audit::AuditAction;
use assetdesk_entity::license::{CreateLicense, License};

use crate::dto::request::{CreateLicenseRequest, LicenseListQuery, TicketQuery, UpdateLicenseRequest};
use crate::dto::response::{ApiResponse, MessageResponse, PagedResponse, created};
use crate::dto::validate_payload;
use crate::error::ApiError;
use crate::extractors::{Actor, PaginationParams};
use crate::state::AppState;

/// Target type recorded in audit entries for licenses.
const TARGET: &str = "license";

/// GET /api/licenses
pub async fn list(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(query): Query<LicenseListQuery>,
) -> Result<Json<PagedResponse<License>>, ApiError> {
    let page = state
        .licenses
        .list(query.search.as_deref(), &pagination.into_page_request())
        .await?;
    Ok(Json(page.into()))
}

/// GET /api/licenses/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<License>>, ApiError> {
    let license = state
        .licenses
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("License {id} not found")))?;
    Ok(Json(ApiResponse::new(license)))
}

/// POST /api/licenses
pub async fn create(
    State(state): State<AppState>,
    actor: Actor,
    Json(body): Json<CreateLicenseRequest>,
) -> Result<(StatusCode, Json<ApiResponse<License>>), ApiError> {
    validate_payload(&body)?;

    let license = state
        .licenses
        .create(&CreateLicense {
            name: body.name,
            product_key: body.product_key,
            seats: body.seats,
            manufacturer_id: body.manufacturer_id,
            expires_at: body.expires_at,
            notes: body.notes,
        })
        .await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::LicenseCreate,
            TARGET,
            Some(license.id),
            Some(json!({ "name": license.name, "seats": license.seats })),
            &body.external_ticket_id,
        )
        .await?;

    Ok(created(license))
}

/// PUT /api/licenses/{id}
pub async fn update(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateLicenseRequest>,
) -> Result<Json<ApiResponse<License>>, ApiError> {
    validate_payload(&body)?;

    let license = state
        .licenses
        .update(id, body.name.as_deref(), body.seats, body.notes.as_deref())
        .await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::LicenseUpdate,
            TARGET,
            Some(id),
            Some(json!({ "name": license.name, "seats": license.seats })),
            &body.external_ticket_id,
        )
        .await?;

    Ok(Json(ApiResponse::new(license)))
}

/// DELETE /api/licenses/{id}
pub async fn delete(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Query(ticket): Query<TicketQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate_payload(&ticket)?;

    let license = state
        .licenses
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("License {id} not found")))?;

    state.licenses.delete(id).await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::LicenseDelete,
            TARGET,
            Some(id),
            Some(json!({ "name": license.name })),
            &ticket.external_ticket_id,
        )
        .await?;

    Ok(Json(MessageResponse::new("License deleted")))
}
