//! Consumable repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use assetdesk_core::error::{AppError, ErrorKind};
use assetdesk_core::result::AppResult;
use assetdesk_core::types::pagination::{Page, PageRequest};
use assetdesk_entity::consumable::{Consumable, CreateConsumable};

/// Repository for consumable stock items.
#[derive(Debug, Clone)]
pub struct ConsumableRepository {
    pool: PgPool,
}

impl ConsumableRepository {
    /// Create a new consumable repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a consumable by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Consumable>> {
        sqlx::query_as::<_, Consumable>("SELECT * FROM consumables WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find consumable", e))
    }

    /// List consumables with pagination, optionally filtered by category.
    pub async fn list(
        &self,
        category_id: Option<Uuid>,
        page: &PageRequest,
    ) -> AppResult<Page<Consumable>> {
        let (count_sql, select_sql) = if category_id.is_some() {
            (
                "SELECT COUNT(*) FROM consumables WHERE category_id = $1",
                "SELECT * FROM consumables WHERE category_id = $1 \
                 ORDER BY name ASC LIMIT $2 OFFSET $3",
            )
        } else {
            (
                "SELECT COUNT(*) FROM consumables",
                "SELECT * FROM consumables ORDER BY name ASC LIMIT $1 OFFSET $2",
            )
        };

        let mut count_query = sqlx::query_scalar::<_, i64>(count_sql);
        let mut select_query = sqlx::query_as::<_, Consumable>(select_sql);
        if let Some(cid) = category_id {
            count_query = count_query.bind(cid);
            select_query = select_query.bind(cid);
        }

        let total = count_query.fetch_one(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count consumables", e)
        })?;

        let consumables = select_query
            .bind(page.limit as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list consumables", e)
            })?;

        Ok(Page::new(consumables, page, total as u64))
    }

    /// Count all consumables.
    pub async fn count_all(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM consumables")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count consumables", e)
            })
    }

    /// Create a new consumable.
    pub async fn create(&self, data: &CreateConsumable) -> AppResult<Consumable> {
        sqlx::query_as::<_, Consumable>(
            "INSERT INTO consumables (name, category_id, location_id, quantity, min_quantity) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&data.name)
        .bind(data.category_id)
        .bind(data.location_id)
        .bind(data.quantity)
        .bind(data.min_quantity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create consumable", e))
    }

    /// Update a consumable. `COALESCE` keeps unset fields unchanged.
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        quantity: Option<i32>,
        min_quantity: Option<i32>,
    ) -> AppResult<Consumable> {
        sqlx::query_as::<_, Consumable>(
            "UPDATE consumables SET name = COALESCE($2, name), \
                                    quantity = COALESCE($3, quantity), \
                                    min_quantity = COALESCE($4, min_quantity), \
                                    updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .bind(quantity)
        .bind(min_quantity)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update consumable", e))?
        .ok_or_else(|| AppError::not_found(format!("Consumable {id} not found")))
    }

    /// Delete a consumable.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM consumables WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete consumable", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Consumable {id} not found")));
        }
        Ok(())
    }
}
