//! Asset repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use assetdesk_core::error::{AppError, ErrorKind};
use assetdesk_core::result::AppResult;
use assetdesk_core::types::pagination::{Page, PageRequest};
use assetdesk_entity::asset::{Asset, AssetExpanded, CreateAsset, UpdateAsset};

/// SELECT list joining an asset with the names of its shallow relations.
const EXPANDED_SELECT: &str = "SELECT a.id, a.asset_tag, a.serial, a.model_id, \
     m.name AS model_name, mf.name AS manufacturer_name, c.name AS category_name, \
     a.status_id, s.name AS status_name, \
     a.assigned_to, u.username AS assigned_to_username, \
     a.location_id, a.department_id, a.supplier_id, a.photo_url, a.notes, \
     a.purchase_date, a.created_at, a.updated_at \
     FROM assets a \
     JOIN asset_models m ON m.id = a.model_id \
     JOIN manufacturers mf ON mf.id = m.manufacturer_id \
     JOIN categories c ON c.id = m.category_id \
     JOIN status_labels s ON s.id = a.status_id \
     LEFT JOIN users u ON u.id = a.assigned_to";

/// Optional filters for asset listing.
#[derive(Debug, Clone, Default)]
pub struct AssetFilter {
    /// Restrict to one status label.
    pub status_id: Option<Uuid>,
    /// Restrict to one model.
    pub model_id: Option<Uuid>,
    /// Restrict to one assignee.
    pub assigned_to: Option<Uuid>,
    /// Restrict to one location.
    pub location_id: Option<Uuid>,
    /// Substring match on asset tag or serial.
    pub search: Option<String>,
}

/// Repository for asset CRUD and query operations.
#[derive(Debug, Clone)]
pub struct AssetRepository {
    pool: PgPool,
}

impl AssetRepository {
    /// Create a new asset repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an asset by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Asset>> {
        sqlx::query_as::<_, Asset>("SELECT * FROM assets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find asset", e))
    }

    /// Find an asset by primary key with shallow relational expansion.
    pub async fn find_expanded_by_id(&self, id: Uuid) -> AppResult<Option<AssetExpanded>> {
        sqlx::query_as::<_, AssetExpanded>(&format!("{EXPANDED_SELECT} WHERE a.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find expanded asset", e)
            })
    }

    /// List assets with optional filters and pagination, expanded.
    pub async fn list(
        &self,
        filter: &AssetFilter,
        page: &PageRequest,
    ) -> AppResult<Page<AssetExpanded>> {
        let mut conditions = Vec::new();
        let mut param_idx = 1u32;

        if filter.status_id.is_some() {
            conditions.push(format!("a.status_id = ${param_idx}"));
            param_idx += 1;
        }
        if filter.model_id.is_some() {
            conditions.push(format!("a.model_id = ${param_idx}"));
            param_idx += 1;
        }
        if filter.assigned_to.is_some() {
            conditions.push(format!("a.assigned_to = ${param_idx}"));
            param_idx += 1;
        }
        if filter.location_id.is_some() {
            conditions.push(format!("a.location_id = ${param_idx}"));
            param_idx += 1;
        }
        if filter.search.is_some() {
            conditions.push(format!(
                "(a.asset_tag ILIKE ${param_idx} OR a.serial ILIKE ${param_idx})"
            ));
            param_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) FROM assets a {where_clause}");
        let select_sql = format!(
            "{EXPANDED_SELECT} {where_clause} ORDER BY a.created_at DESC LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        let mut select_query = sqlx::query_as::<_, AssetExpanded>(&select_sql);

        if let Some(sid) = filter.status_id {
            count_query = count_query.bind(sid);
            select_query = select_query.bind(sid);
        }
        if let Some(mid) = filter.model_id {
            count_query = count_query.bind(mid);
            select_query = select_query.bind(mid);
        }
        if let Some(aid) = filter.assigned_to {
            count_query = count_query.bind(aid);
            select_query = select_query.bind(aid);
        }
        if let Some(lid) = filter.location_id {
            count_query = count_query.bind(lid);
            select_query = select_query.bind(lid);
        }
        if let Some(ref search) = filter.search {
            let pattern = format!("%{search}%");
            count_query = count_query.bind(pattern.clone());
            select_query = select_query.bind(pattern);
        }

        let total = count_query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count assets", e))?;

        let assets = select_query
            .bind(page.limit as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list assets", e))?;

        Ok(Page::new(assets, page, total as u64))
    }

    /// Create a new asset.
    pub async fn create(&self, data: &CreateAsset) -> AppResult<Asset> {
        sqlx::query_as::<_, Asset>(
            "INSERT INTO assets (asset_tag, serial, model_id, status_id, assigned_to, \
                                 location_id, department_id, supplier_id, notes, purchase_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING *",
        )
        .bind(&data.asset_tag)
        .bind(&data.serial)
        .bind(data.model_id)
        .bind(data.status_id)
        .bind(data.assigned_to)
        .bind(data.location_id)
        .bind(data.department_id)
        .bind(data.supplier_id)
        .bind(&data.notes)
        .bind(data.purchase_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("assets_asset_tag_key") =>
            {
                AppError::conflict(format!("Asset tag '{}' already exists", data.asset_tag))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create asset", e),
        })
    }

    /// Update an asset. `COALESCE` keeps unset fields unchanged.
    pub async fn update(&self, data: &UpdateAsset) -> AppResult<Asset> {
        sqlx::query_as::<_, Asset>(
            "UPDATE assets SET serial = COALESCE($2, serial), \
                               model_id = COALESCE($3, model_id), \
                               status_id = COALESCE($4, status_id), \
                               assigned_to = COALESCE($5, assigned_to), \
                               location_id = COALESCE($6, location_id), \
                               department_id = COALESCE($7, department_id), \
                               supplier_id = COALESCE($8, supplier_id), \
                               notes = COALESCE($9, notes), \
                               purchase_date = COALESCE($10, purchase_date), \
                               updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(data.id)
        .bind(&data.serial)
        .bind(data.model_id)
        .bind(data.status_id)
        .bind(data.assigned_to)
        .bind(data.location_id)
        .bind(data.department_id)
        .bind(data.supplier_id)
        .bind(&data.notes)
        .bind(data.purchase_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update asset", e))?
        .ok_or_else(|| AppError::not_found(format!("Asset {} not found", data.id)))
    }

    /// Record the uploaded photo's relative URL on the asset.
    pub async fn set_photo_url(&self, id: Uuid, photo_url: &str) -> AppResult<Asset> {
        sqlx::query_as::<_, Asset>(
            "UPDATE assets SET photo_url = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(photo_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to set photo url", e))?
        .ok_or_else(|| AppError::not_found(format!("Asset {id} not found")))
    }

    /// Delete an asset.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete asset", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Asset {id} not found")));
        }
        Ok(())
    }

    /// Count all assets.
    pub async fn count_all(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM assets")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count assets", e))
    }

    /// Count assets grouped by status label name.
    pub async fn count_by_status(&self) -> AppResult<Vec<(String, i64)>> {
        sqlx::query_as::<_, (String, i64)>(
            "SELECT s.name, COUNT(a.id) FROM status_labels s \
             LEFT JOIN assets a ON a.status_id = s.id \
             GROUP BY s.name ORDER BY s.name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count assets by status", e)
        })
    }
}
