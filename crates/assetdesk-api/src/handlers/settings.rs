//! Catalog settings handlers: models, manufacturers, categories, status
//! labels, suppliers, and the combined dropdown options payload.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use assetdesk_core::error::AppError;
use assetdesk_entity::audit::AuditAction;
use assetdesk_entity::catalog::{AssetModel, Category, CreateAssetModel, Manufacturer, StatusLabel, Supplier};
use assetdesk_entity::org::{Department, Location};

use crate::dto::request::{
    CreateModelRequest, CreateNamedRequest, CreateStatusLabelRequest, CreateSupplierRequest,
    TicketQuery,
};
use crate::dto::response::{ApiResponse, MessageResponse, created};
use crate::dto::validate_payload;
use crate::error::ApiError;
use crate::extractors::Actor;
use crate::state::AppState;

/// Every dropdown list the catalog feeds, gathered in one payload.
#[derive(Debug, Serialize)]
pub struct DropdownOptions {
    /// Asset models.
    pub models: Vec<AssetModel>,
    /// Manufacturers.
    pub manufacturers: Vec<Manufacturer>,
    /// Categories.
    pub categories: Vec<Category>,
    /// Status labels.
    pub status_labels: Vec<StatusLabel>,
    /// Suppliers.
    pub suppliers: Vec<Supplier>,
    /// Departments.
    pub departments: Vec<Department>,
    /// Locations.
    pub locations: Vec<Location>,
}

/// GET /api/settings/options
///
/// The seven lists are independent and gathered concurrently.
pub async fn options(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DropdownOptions>>, ApiError> {
    let (models, manufacturers, categories, status_labels, suppliers, departments, locations) =
        tokio::try_join!(
            state.catalog.list_models(),
            state.catalog.list_manufacturers(),
            state.catalog.list_categories(),
            state.catalog.list_status_labels(),
            state.catalog.list_suppliers(),
            state.departments.list_all(),
            state.locations.list_all(),
        )?;

    Ok(Json(ApiResponse::new(DropdownOptions {
        models,
        manufacturers,
        categories,
        status_labels,
        suppliers,
        departments,
        locations,
    })))
}

// ── Asset models ─────────────────────────────────────────────

/// GET /api/settings/models
pub async fn list_models(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<AssetModel>>>, ApiError> {
    Ok(Json(ApiResponse::new(state.catalog.list_models().await?)))
}

/// POST /api/settings/models
pub async fn create_model(
    State(state): State<AppState>,
    actor: Actor,
    Json(body): Json<CreateModelRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AssetModel>>), ApiError> {
    validate_payload(&body)?;

    let model = state
        .catalog
        .create_model(&CreateAssetModel {
            name: body.name,
            manufacturer_id: body.manufacturer_id,
            category_id: body.category_id,
            model_number: body.model_number,
        })
        .await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::CatalogCreate,
            "asset_model",
            Some(model.id),
            Some(json!({ "name": model.name })),
            &body.external_ticket_id,
        )
        .await?;

    Ok(created(model))
}

/// DELETE /api/settings/models/{id}
pub async fn delete_model(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Query(ticket): Query<TicketQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate_payload(&ticket)?;

    let model = state
        .catalog
        .find_model_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Model {id} not found")))?;

    state.catalog.delete_model(id).await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::CatalogDelete,
            "asset_model",
            Some(id),
            Some(json!({ "name": model.name })),
            &ticket.external_ticket_id,
        )
        .await?;

    Ok(Json(MessageResponse::new("Model deleted")))
}

// ── Manufacturers ────────────────────────────────────────────

/// GET /api/settings/manufacturers
pub async fn list_manufacturers(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Manufacturer>>>, ApiError> {
    Ok(Json(ApiResponse::new(
        state.catalog.list_manufacturers().await?,
    )))
}

/// POST /api/settings/manufacturers
pub async fn create_manufacturer(
    State(state): State<AppState>,
    actor: Actor,
    Json(body): Json<CreateNamedRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Manufacturer>>), ApiError> {
    validate_payload(&body)?;

    let manufacturer = state.catalog.create_manufacturer(&body.name).await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::CatalogCreate,
            "manufacturer",
            Some(manufacturer.id),
            Some(json!({ "name": manufacturer.name })),
            &body.external_ticket_id,
        )
        .await?;

    Ok(created(manufacturer))
}

/// DELETE /api/settings/manufacturers/{id}
pub async fn delete_manufacturer(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Query(ticket): Query<TicketQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate_payload(&ticket)?;

    state.catalog.delete_manufacturer(id).await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::CatalogDelete,
            "manufacturer",
            Some(id),
            None,
            &ticket.external_ticket_id,
        )
        .await?;

    Ok(Json(MessageResponse::new("Manufacturer deleted")))
}

// ── Categories ───────────────────────────────────────────────

/// GET /api/settings/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Category>>>, ApiError> {
    Ok(Json(ApiResponse::new(
        state.catalog.list_categories().await?,
    )))
}

/// POST /api/settings/categories
pub async fn create_category(
    State(state): State<AppState>,
    actor: Actor,
    Json(body): Json<CreateNamedRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Category>>), ApiError> {
    validate_payload(&body)?;

    let category = state.catalog.create_category(&body.name).await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::CatalogCreate,
            "category",
            Some(category.id),
            Some(json!({ "name": category.name })),
            &body.external_ticket_id,
        )
        .await?;

    Ok(created(category))
}

/// DELETE /api/settings/categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Query(ticket): Query<TicketQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate_payload(&ticket)?;

    state.catalog.delete_category(id).await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::CatalogDelete,
            "category",
            Some(id),
            None,
            &ticket.external_ticket_id,
        )
        .await?;

    Ok(Json(MessageResponse::new("Category deleted")))
}

// ── Status labels ────────────────────────────────────────────

/// GET /api/settings/status-labels
pub async fn list_status_labels(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<StatusLabel>>>, ApiError> {
    Ok(Json(ApiResponse::new(
        state.catalog.list_status_labels().await?,
    )))
}

/// POST /api/settings/status-labels
pub async fn create_status_label(
    State(state): State<AppState>,
    actor: Actor,
    Json(body): Json<CreateStatusLabelRequest>,
) -> Result<(StatusCode, Json<ApiResponse<StatusLabel>>), ApiError> {
    validate_payload(&body)?;

    let label = state
        .catalog
        .create_status_label(&body.name, body.deployable)
        .await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::CatalogCreate,
            "status_label",
            Some(label.id),
            Some(json!({ "name": label.name, "deployable": label.deployable })),
            &body.external_ticket_id,
        )
        .await?;

    Ok(created(label))
}

/// DELETE /api/settings/status-labels/{id}
pub async fn delete_status_label(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Query(ticket): Query<TicketQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate_payload(&ticket)?;

    state.catalog.delete_status_label(id).await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::CatalogDelete,
            "status_label",
            Some(id),
            None,
            &ticket.external_ticket_id,
        )
        .await?;

    Ok(Json(MessageResponse::new("Status label deleted")))
}

// ── Suppliers ────────────────────────────────────────────────

/// GET /api/settings/suppliers
pub async fn list_suppliers(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Supplier>>>, ApiError> {
    Ok(Json(ApiResponse::new(
        state.catalog.list_suppliers().await?,
    )))
}

/// POST /api/settings/suppliers
pub async fn create_supplier(
    State(state): State<AppState>,
    actor: Actor,
    Json(body): Json<CreateSupplierRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Supplier>>), ApiError> {
    validate_payload(&body)?;

    let supplier = state
        .catalog
        .create_supplier(&body.name, body.contact_email.as_deref())
        .await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::CatalogCreate,
            "supplier",
            Some(supplier.id),
            Some(json!({ "name": supplier.name })),
            &body.external_ticket_id,
        )
        .await?;

    Ok(created(supplier))
}

/// DELETE /api/settings/suppliers/{id}
pub async fn delete_supplier(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Query(ticket): Query<TicketQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate_payload(&ticket)?;

    state.catalog.delete_supplier(id).await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::CatalogDelete,
            "supplier",
            Some(id),
            None,
            &ticket.external_ticket_id,
        )
        .await?;

    Ok(Json(MessageResponse::new("Supplier deleted")))
}
