//! Catalog repository: asset models, manufacturers, categories, status
//! labels, and suppliers.

use sqlx::PgPool;
use uuid::Uuid;

use assetdesk_core::error::{AppError, ErrorKind};
use assetdesk_core::result::AppResult;
use assetdesk_entity::catalog::{
    AssetModel, Category, CreateAssetModel, Manufacturer, StatusLabel, Supplier,
};

/// Model/manufacturer name pair used for asset audit summaries.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ModelNames {
    /// Model name.
    pub model_name: String,
    /// Manufacturer name.
    pub manufacturer_name: String,
}

/// Repository for catalog (CMDB) entities.
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    pool: PgPool,
}

impl CatalogRepository {
    /// Create a new catalog repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ── Asset models ─────────────────────────────────────────

    /// Find an asset model by primary key.
    pub async fn find_model_by_id(&self, id: Uuid) -> AppResult<Option<AssetModel>> {
        sqlx::query_as::<_, AssetModel>("SELECT * FROM asset_models WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find model", e))
    }

    /// Model and manufacturer names for audit summaries.
    pub async fn model_names(&self, model_id: Uuid) -> AppResult<Option<ModelNames>> {
        sqlx::query_as::<_, ModelNames>(
            "SELECT m.name AS model_name, mf.name AS manufacturer_name \
             FROM asset_models m JOIN manufacturers mf ON mf.id = m.manufacturer_id \
             WHERE m.id = $1",
        )
        .bind(model_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load model names", e))
    }

    /// List every asset model.
    pub async fn list_models(&self) -> AppResult<Vec<AssetModel>> {
        sqlx::query_as::<_, AssetModel>("SELECT * FROM asset_models ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list models", e))
    }

    /// Create a new asset model.
    pub async fn create_model(&self, data: &CreateAssetModel) -> AppResult<AssetModel> {
        sqlx::query_as::<_, AssetModel>(
            "INSERT INTO asset_models (name, manufacturer_id, category_id, model_number) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&data.name)
        .bind(data.manufacturer_id)
        .bind(data.category_id)
        .bind(&data.model_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create model", e))
    }

    /// Delete an asset model.
    pub async fn delete_model(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM asset_models WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete model", e))?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Model {id} not found")));
        }
        Ok(())
    }

    // ── Manufacturers ────────────────────────────────────────

    /// List every manufacturer.
    pub async fn list_manufacturers(&self) -> AppResult<Vec<Manufacturer>> {
        sqlx::query_as::<_, Manufacturer>("SELECT * FROM manufacturers ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list manufacturers", e)
            })
    }

    /// Create a new manufacturer.
    pub async fn create_manufacturer(&self, name: &str) -> AppResult<Manufacturer> {
        sqlx::query_as::<_, Manufacturer>(
            "INSERT INTO manufacturers (name) VALUES ($1) RETURNING *",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("manufacturers_name_key") =>
            {
                AppError::conflict(format!("Manufacturer '{name}' already exists"))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create manufacturer", e),
        })
    }

    /// Delete a manufacturer.
    pub async fn delete_manufacturer(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM manufacturers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete manufacturer", e)
            })?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Manufacturer {id} not found")));
        }
        Ok(())
    }

    // ── Categories ───────────────────────────────────────────

    /// List every category.
    pub async fn list_categories(&self) -> AppResult<Vec<Category>> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list categories", e)
            })
    }

    /// Create a new category.
    pub async fn create_category(&self, name: &str) -> AppResult<Category> {
        sqlx::query_as::<_, Category>("INSERT INTO categories (name) VALUES ($1) RETURNING *")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err)
                    if db_err.constraint() == Some("categories_name_key") =>
                {
                    AppError::conflict(format!("Category '{name}' already exists"))
                }
                _ => AppError::with_source(ErrorKind::Database, "Failed to create category", e),
            })
    }

    /// Delete a category.
    pub async fn delete_category(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete category", e)
            })?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Category {id} not found")));
        }
        Ok(())
    }

    // ── Status labels ────────────────────────────────────────

    /// List every status label.
    pub async fn list_status_labels(&self) -> AppResult<Vec<StatusLabel>> {
        sqlx::query_as::<_, StatusLabel>("SELECT * FROM status_labels ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list status labels", e)
            })
    }

    /// Create a new status label.
    pub async fn create_status_label(&self, name: &str, deployable: bool) -> AppResult<StatusLabel> {
        sqlx::query_as::<_, StatusLabel>(
            "INSERT INTO status_labels (name, deployable) VALUES ($1, $2) RETURNING *",
        )
        .bind(name)
        .bind(deployable)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("status_labels_name_key") =>
            {
                AppError::conflict(format!("Status label '{name}' already exists"))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create status label", e),
        })
    }

    /// Delete a status label.
    pub async fn delete_status_label(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM status_labels WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete status label", e)
            })?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Status label {id} not found")));
        }
        Ok(())
    }

    // ── Suppliers ────────────────────────────────────────────

    /// List every supplier.
    pub async fn list_suppliers(&self) -> AppResult<Vec<Supplier>> {
        sqlx::query_as::<_, Supplier>("SELECT * FROM suppliers ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list suppliers", e))
    }

    /// Create a new supplier.
    pub async fn create_supplier(
        &self,
        name: &str,
        contact_email: Option<&str>,
    ) -> AppResult<Supplier> {
        sqlx::query_as::<_, Supplier>(
            "INSERT INTO suppliers (name, contact_email) VALUES ($1, $2) RETURNING *",
        )
        .bind(name)
        .bind(contact_email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("suppliers_name_key") =>
            {
                AppError::conflict(format!("Supplier '{name}' already exists"))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create supplier", e),
        })
    }

    /// Delete a supplier.
    pub async fn delete_supplier(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM suppliers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete supplier", e)
            })?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Supplier {id} not found")));
        }
        Ok(())
    }
}
