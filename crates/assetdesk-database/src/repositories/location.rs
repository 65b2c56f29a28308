//! Location repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use assetdesk_core::error::{AppError, ErrorKind};
use assetdesk_core::result::AppResult;
use assetdesk_core::types::pagination::{Page, PageRequest};
use assetdesk_entity::org::{Location, LocationReferences};

/// Fields accepted when creating a location.
#[derive(Debug, Clone)]
pub struct NewLocation<'a> {
    pub name: &'a str,
    pub parent_location_id: Option<Uuid>,
    pub address: Option<&'a str>,
    pub city: Option<&'a str>,
    pub country: Option<&'a str>,
}

/// Repository for location CRUD and reference counting.
#[derive(Debug, Clone)]
pub struct LocationRepository {
    pool: PgPool,
}

impl LocationRepository {
    /// Create a new location repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a location by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Location>> {
        sqlx::query_as::<_, Location>("SELECT * FROM locations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find location", e))
    }

    /// List locations with pagination.
    pub async fn list(&self, page: &PageRequest) -> AppResult<Page<Location>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM locations")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count locations", e)
            })?;

        let locations = sqlx::query_as::<_, Location>(
            "SELECT * FROM locations ORDER BY name ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list locations", e))?;

        Ok(Page::new(locations, page, total as u64))
    }

    /// List every location, for dropdown options.
    pub async fn list_all(&self) -> AppResult<Vec<Location>> {
        sqlx::query_as::<_, Location>("SELECT * FROM locations ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list locations", e))
    }

    /// Create a new location.
    pub async fn create(&self, data: &NewLocation<'_>) -> AppResult<Location> {
        sqlx::query_as::<_, Location>(
            "INSERT INTO locations (name, parent_location_id, address, city, country) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(data.name)
        .bind(data.parent_location_id)
        .bind(data.address)
        .bind(data.city)
        .bind(data.country)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create location", e))
    }

    /// Update a location. `COALESCE` keeps unset fields unchanged.
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        address: Option<&str>,
        city: Option<&str>,
        country: Option<&str>,
    ) -> AppResult<Location> {
        sqlx::query_as::<_, Location>(
            "UPDATE locations SET name = COALESCE($2, name), \
                                  address = COALESCE($3, address), \
                                  city = COALESCE($4, city), \
                                  country = COALESCE($5, country), \
                                  updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .bind(address)
        .bind(city)
        .bind(country)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update location", e))?
        .ok_or_else(|| AppError::not_found(format!("Location {id} not found")))
    }

    /// Count users, assets, and child locations still referencing the
    /// location. The three counts are gathered concurrently.
    pub async fn count_references(&self, id: Uuid) -> AppResult<LocationReferences> {
        let users_fut =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE location_id = $1")
                .bind(id)
                .fetch_one(&self.pool);
        let assets_fut =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM assets WHERE location_id = $1")
                .bind(id)
                .fetch_one(&self.pool);
        let children_fut = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM locations WHERE parent_location_id = $1",
        )
        .bind(id)
        .fetch_one(&self.pool);

        let (users, assets, child_locations) =
            tokio::try_join!(users_fut, assets_fut, children_fut).map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    "Failed to count location references",
                    e,
                )
            })?;

        Ok(LocationReferences {
            users,
            assets,
            child_locations,
        })
    }

    /// Delete a location. Callers run the reference pre-check first.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete location", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Location {id} not found")));
        }
        Ok(())
    }
}
