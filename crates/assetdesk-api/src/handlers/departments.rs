//! Department handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use assetdesk_core::error::AppError;
use assetdesk_entity::audit::AuditAction;
use assetdesk_entity::org::Department;

use crate::dto::request::{CreateDepartmentRequest, TicketQuery, UpdateDepartmentRequest};
use crate::dto::response::{ApiResponse, MessageResponse, PagedResponse, created};
use crate::dto::validate_payload;
use crate::error::ApiError;
use crate::extractors::{Actor, PaginationParams};
use crate::state::AppState;

/// Target type recorded in audit entries for departments.
const TARGET: &str = "department";

/// GET /api/departments
pub async fn list(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<PagedResponse<Department>>, ApiError> {
    let page = state
        .departments
        .list(&pagination.into_page_request())
        .await?;
    Ok(Json(page.into()))
}

/// GET /api/departments/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Department>>, ApiError> {
    let department = state
        .departments
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Department {id} not found")))?;
    Ok(Json(ApiResponse::new(department)))
}

/// POST /api/departments
pub async fn create(
    State(state): State<AppState>,
    actor: Actor,
    Json(body): Json<CreateDepartmentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Department>>), ApiError> {
    validate_payload(&body)?;

    let department = state
        .departments
        .create(&body.name, body.manager_id)
        .await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::DepartmentCreate,
            TARGET,
            Some(department.id),
            Some(json!({ "name": department.name })),
            &body.external_ticket_id,
        )
        .await?;

    Ok(created(department))
}

/// PUT /api/departments/{id}
pub async fn update(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateDepartmentRequest>,
) -> Result<Json<ApiResponse<Department>>, ApiError> {
    validate_payload(&body)?;

    let department = state
        .departments
        .update(id, body.name.as_deref(), body.manager_id)
        .await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::DepartmentUpdate,
            TARGET,
            Some(id),
            Some(json!({ "name": department.name })),
            &body.external_ticket_id,
        )
        .await?;

    Ok(Json(ApiResponse::new(department)))
}

/// DELETE /api/departments/{id}
///
/// Fails with a descriptive validation error while users or assets still
/// reference the department.
pub async fn delete(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Query(ticket): Query<TicketQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate_payload(&ticket)?;

    let department = state
        .departments
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Department {id} not found")))?;

    state.org.delete_department(id).await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::DepartmentDelete,
            TARGET,
            Some(id),
            Some(json!({ "name": department.name })),
            &ticket.external_ticket_id,
        )
        .await?;

    Ok(Json(MessageResponse::new("Department deleted")))
}
