//! Software license repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use assetdesk_core::error::{AppError, ErrorKind};
use assetdesk_core::result::AppResult;
use assetdesk_core::types::pagination::{Page, PageRequest};
use assetdesk_entity::license::{CreateLicense, License};

/// Repository for software licenses.
#[derive(Debug, Clone)]
pub struct LicenseRepository {
    pool: PgPool,
}

impl LicenseRepository {
    /// Create a new license repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a license by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<License>> {
        sqlx::query_as::<_, License>("SELECT * FROM licenses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find license", e))
    }

    /// List licenses with pagination, optionally matching a name substring.
    pub async fn list(
        &self,
        search: Option<&str>,
        page: &PageRequest,
    ) -> AppResult<Page<License>> {
        let (count_sql, select_sql) = if search.is_some() {
            (
                "SELECT COUNT(*) FROM licenses WHERE name ILIKE $1",
                "SELECT * FROM licenses WHERE name ILIKE $1 \
                 ORDER BY name ASC LIMIT $2 OFFSET $3",
            )
        } else {
            (
                "SELECT COUNT(*) FROM licenses",
                "SELECT * FROM licenses ORDER BY name ASC LIMIT $1 OFFSET $2",
            )
        };

        let mut count_query = sqlx::query_scalar::<_, i64>(count_sql);
        let mut select_query = sqlx::query_as::<_, License>(select_sql);
        if let Some(s) = search {
            let pattern = format!("%{s}%");
            count_query = count_query.bind(pattern.clone());
            select_query = select_query.bind(pattern);
        }

        let total = count_query.fetch_one(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count licenses", e)
        })?;

        let licenses = select_query
            .bind(page.limit as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list licenses", e))?;

        Ok(Page::new(licenses, page, total as u64))
    }

    /// Count all licenses.
    pub async fn count_all(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM licenses")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count licenses", e))
    }

    /// Create a new license.
    pub async fn create(&self, data: &CreateLicense) -> AppResult<License> {
        sqlx::query_as::<_, License>(
            "INSERT INTO licenses (name, product_key, seats, manufacturer_id, expires_at, notes) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.product_key)
        .bind(data.seats)
        .bind(data.manufacturer_id)
        .bind(data.expires_at)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create license", e))
    }

    /// Update a license. `COALESCE` keeps unset fields unchanged.
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        seats: Option<i32>,
        notes: Option<&str>,
    ) -> AppResult<License> {
        sqlx::query_as::<_, License>(
            "UPDATE licenses SET name = COALESCE($2, name), \
                                 seats = COALESCE($3, seats), \
                                 notes = COALESCE($4, notes), \
                                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .bind(seats)
        .bind(notes)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update license", e))?
        .ok_or_else(|| AppError::not_found(format!("License {id} not found")))
    }

    /// Delete a license.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM licenses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete license", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("License {id} not found")));
        }
        Ok(())
    }
}
