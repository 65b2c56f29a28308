//! Asset CRUD, listing, and photo upload handlers.

use axum::Json;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use bytes::Bytes;
use serde_json::json;
use uuid::Uuid;

use assetdesk_core::error::AppError;
use assetdesk_database::repositories::asset::AssetFilter;
use assetdesk_entity::asset::{Asset, AssetExpanded, CreateAsset, UpdateAsset};
use assetdesk_entity::audit::AuditAction;

use crate::dto::request::{AssetListQuery, CreateAssetRequest, TicketQuery, UpdateAssetRequest};
use crate::dto::response::{ApiResponse, MessageResponse, PagedResponse, created};
use crate::dto::validate_payload;
use crate::error::ApiError;
use crate::extractors::{Actor, PaginationParams};
use crate::state::AppState;

/// Target type recorded in audit entries for assets.
const TARGET: &str = "asset";

/// GET /api/assets
pub async fn list(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
    Query(query): Query<AssetListQuery>,
) -> Result<Json<PagedResponse<AssetExpanded>>, ApiError> {
    let filter = AssetFilter {
        status_id: query.status_id,
        model_id: query.model_id,
        assigned_to: query.assigned_to,
        location_id: query.location_id,
        search: query.search,
    };
    let page = state
        .assets
        .list(&filter, &pagination.into_page_request())
        .await?;
    Ok(Json(page.into()))
}

/// GET /api/assets/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<AssetExpanded>>, ApiError> {
    let asset = state
        .assets
        .find_expanded_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Asset {id} not found")))?;
    Ok(Json(ApiResponse::new(asset)))
}

/// POST /api/assets
pub async fn create(
    State(state): State<AppState>,
    actor: Actor,
    Json(body): Json<CreateAssetRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Asset>>), ApiError> {
    validate_payload(&body)?;

    let asset = state
        .assets
        .create(&CreateAsset {
            asset_tag: body.asset_tag,
            serial: body.serial,
            model_id: body.model_id,
            status_id: body.status_id,
            assigned_to: body.assigned_to,
            location_id: body.location_id,
            department_id: body.department_id,
            supplier_id: body.supplier_id,
            notes: body.notes,
            purchase_date: body.purchase_date,
        })
        .await?;

    let details = match state.catalog.model_names(asset.model_id).await? {
        Some(names) => json!({
            "asset_tag": asset.asset_tag,
            "model": names.model_name,
            "manufacturer": names.manufacturer_name,
        }),
        None => json!({ "asset_tag": asset.asset_tag }),
    };

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::AssetCreate,
            TARGET,
            Some(asset.id),
            Some(details),
            &body.external_ticket_id,
        )
        .await?;

    Ok(created(asset))
}

/// PUT /api/assets/{id}
pub async fn update(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateAssetRequest>,
) -> Result<Json<ApiResponse<Asset>>, ApiError> {
    validate_payload(&body)?;

    let asset = state
        .assets
        .update(&UpdateAsset {
            id,
            serial: body.serial,
            model_id: body.model_id,
            status_id: body.status_id,
            assigned_to: body.assigned_to,
            location_id: body.location_id,
            department_id: body.department_id,
            supplier_id: body.supplier_id,
            notes: body.notes,
            purchase_date: body.purchase_date,
        })
        .await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::AssetUpdate,
            TARGET,
            Some(asset.id),
            Some(json!({ "asset_tag": asset.asset_tag })),
            &body.external_ticket_id,
        )
        .await?;

    Ok(Json(ApiResponse::new(asset)))
}

/// DELETE /api/assets/{id}
pub async fn delete(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    Query(ticket): Query<TicketQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate_payload(&ticket)?;

    let asset = state
        .assets
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Asset {id} not found")))?;

    state.assets.delete(id).await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::AssetDelete,
            TARGET,
            Some(id),
            Some(json!({ "asset_tag": asset.asset_tag })),
            &ticket.external_ticket_id,
        )
        .await?;

    Ok(Json(MessageResponse::new("Asset deleted")))
}

/// POST /api/assets/{id}/photo — multipart upload
///
/// Expects a `photo` part with the image and an `external_ticket_id` text
/// part.
pub async fn upload_photo(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<Asset>>, ApiError> {
    let mut filename: Option<String> = None;
    let mut content_type: Option<String> = None;
    let mut data: Option<Bytes> = None;
    let mut ticket: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "photo" => {
                filename = field.file_name().map(|s| s.to_string());
                content_type = field.content_type().map(|s| s.to_string());
                data = Some(field.bytes().await.map_err(|e| {
                    AppError::validation(format!("Failed to read upload: {e}"))
                })?);
            }
            "external_ticket_id" => {
                ticket = Some(field.text().await.map_err(|e| {
                    AppError::validation(format!("Failed to read ticket field: {e}"))
                })?);
            }
            _ => {}
        }
    }

    let data = data.ok_or_else(|| AppError::validation("Missing 'photo' part"))?;
    let filename = filename.unwrap_or_else(|| "upload".to_string());
    let content_type = content_type
        .ok_or_else(|| AppError::validation("Missing content type on 'photo' part"))?;
    let ticket = ticket.ok_or_else(|| AppError::validation("Missing 'external_ticket_id' part"))?;

    // The asset must exist before anything is written to disk.
    state
        .assets
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Asset {id} not found")))?;

    let photo_url = state
        .photos
        .store_asset_photo(id, &filename, &content_type, &data)
        .await?;
    let asset = state.assets.set_photo_url(id, &photo_url).await?;

    state
        .audit
        .record(
            actor.user_id,
            AuditAction::AssetPhotoUpload,
            TARGET,
            Some(id),
            Some(json!({ "asset_tag": asset.asset_tag, "photo_url": photo_url })),
            &ticket,
        )
        .await?;

    Ok(Json(ApiResponse::new(asset)))
}
