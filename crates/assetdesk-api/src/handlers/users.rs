//! User CRUD, role assignment, and permission resolution handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use assetdesk_core::error::AppError;
use assetdesk_database::repositories::user::UserFilter;
use assetdesk_entity::audit::AuditAction;
use assetdesk_entity::rbac::Role;
use assetdesk_entity::user::{CreateUser, UpdateUser, User};

use crate::dto::request::{AssignRoleRequest, CreateUserRequest, TicketQuery, UpdateUserRequest, UserListQuery};
use crate::dto::response::{ApiResponse, MessageResponse, PagedResponse, created};
use crate::dto::validate_payload;
use crate::error::ApiError;
use crate::extractors::{Actor, PaginationParams};
use crate::state::AppState;

/// Target type recorded in audit entries for users.
const TARGET: &str = "user";

/// GET /api/users
pub async fn list(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(query): Query<UserListQuery>,
) -> Result<Json<PagedResponse<User>>, ApiError> {
    let filter = UserFilter {
        department_id: query.department_id,
        location_id: query.location_id,
        is_active: query.is_active,
        search: query.search,
    };
    let page = state
        .users
        .list(&filter, &pagination.into_page_request())
        .await?;
    Ok(Json(page.into()))
}

/// GET /api/users/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
    Ok(Json(ApiResponse::new(user)))
}

/// POST /api/users
pub async fn create(
    State(state): State<AppState>,
    actor: Actor,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), ApiError> {
    validate_payload(&body)?;

    let user = state
        .users
        .create(&CreateUser {
            username: body.username,
            email: body.email,
            display_name: body.display_name,
            department_id: body.department_id,
            location_id: body.location_id,
        })
        .await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::UserCreate,
            TARGET,
            Some(user.id),
            Some(json!({ "username": user.username })),
            &body.external_ticket_id,
        )
        .await?;

    Ok(created(user))
}

/// PUT /api/users/{id}
pub async fn update(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    validate_payload(&body)?;

    let user = state
        .users
        .update(&UpdateUser {
            id,
            email: body.email,
            display_name: body.display_name,
            department_id: body.department_id,
            location_id: body.location_id,
            is_active: body.is_active,
        })
        .await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::UserUpdate,
            TARGET,
            Some(user.id),
            Some(json!({ "username": user.username })),
            &body.external_ticket_id,
        )
        .await?;

    Ok(Json(ApiResponse::new(user)))
}

/// DELETE /api/users/{id}
pub async fn delete(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Query(ticket): Query<TicketQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate_payload(&ticket)?;

    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;

    state.users.delete(id).await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::UserDelete,
            TARGET,
            Some(id),
            Some(json!({ "username": user.username })),
            &ticket.external_ticket_id,
        )
        .await?;

    Ok(Json(MessageResponse::new("User deleted")))
}

/// GET /api/users/{id}/roles
pub async fn list_roles(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Role>>>, ApiError> {
    state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;

    let roles = state.rbac.roles_for_user(id).await?;
    Ok(Json(ApiResponse::new(roles)))
}

/// POST /api/users/{id}/roles
pub async fn assign_role(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Json(body): Json<AssignRoleRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate_payload(&body)?;

    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;

    let roles = state.rbac.list_roles().await?;
    let role = roles
        .into_iter()
        .find(|r| r.id == body.role_id)
        .ok_or_else(|| AppError::not_found(format!("Role {} not found", body.role_id)))?;

    state.rbac.assign_role(id, role.id).await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::UserRoleAssign,
            TARGET,
            Some(id),
            Some(json!({ "username": user.username, "role": role.name })),
            &body.external_ticket_id,
        )
        .await?;

    Ok(Json(MessageResponse::new("Role assigned")))
}

/// DELETE /api/users/{id}/roles/{role_id}
pub async fn revoke_role(
    State(state): State<AppState>,
    actor: Actor,
    Path((id, role_id)): Path<(Uuid, Uuid)>,
    Query(ticket): Query<TicketQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate_payload(&ticket)?;

    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;

    let roles = state.rbac.list_roles().await?;
    let role = roles
        .into_iter()
        .find(|r| r.id == role_id)
        .ok_or_else(|| AppError::not_found(format!("Role {role_id} not found")))?;

    state.rbac.revoke_role(id, role_id).await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::UserRoleRevoke,
            TARGET,
            Some(id),
            Some(json!({ "username": user.username, "role": role.name })),
            &ticket.external_ticket_id,
        )
        .await?;

    Ok(Json(MessageResponse::new("Role revoked")))
}

/// GET /api/users/{id}/permissions
///
/// The resolved set is sorted for a stable payload.
pub async fn permissions(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<String>>>, ApiError> {
    state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;

    let mut names: Vec<String> = state
        .resolver
        .resolve(id)
        .await?
        .into_iter()
        .map(|p| p.as_str().to_string())
        .collect();
    names.sort();

    Ok(Json(ApiResponse::new(names)))
}
