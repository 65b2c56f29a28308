//! User repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use assetdesk_core::error::{AppError, ErrorKind};
use assetdesk_core::result::AppResult;
use assetdesk_core::types::pagination::{Page, PageRequest};
use assetdesk_entity::user::{CreateUser, UpdateUser, User};

/// Optional filters for user listing.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    /// Restrict to one department.
    pub department_id: Option<Uuid>,
    /// Restrict to one location.
    pub location_id: Option<Uuid>,
    /// Restrict by active flag.
    pub is_active: Option<bool>,
    /// Substring match on username, display name, or email.
    pub search: Option<String>,
}

/// Repository for user CRUD and query operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// List users with optional filters and pagination.
    pub async fn list(&self, filter: &UserFilter, page: &PageRequest) -> AppResult<Page<User>> {
        let mut conditions = Vec::new();
        let mut param_idx = 1u32;

        if filter.department_id.is_some() {
            conditions.push(format!("department_id = ${param_idx}"));
            param_idx += 1;
        }
        if filter.location_id.is_some() {
            conditions.push(format!("location_id = ${param_idx}"));
            param_idx += 1;
        }
        if filter.is_active.is_some() {
            conditions.push(format!("is_active = ${param_idx}"));
            param_idx += 1;
        }
        if filter.search.is_some() {
            conditions.push(format!(
                "(username ILIKE ${param_idx} OR display_name ILIKE ${param_idx} OR email ILIKE ${param_idx})"
            ));
            param_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) FROM users {where_clause}");
        let select_sql = format!(
            "SELECT * FROM users {where_clause} ORDER BY username ASC LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        let mut select_query = sqlx::query_as::<_, User>(&select_sql);

        if let Some(did) = filter.department_id {
            count_query = count_query.bind(did);
            select_query = select_query.bind(did);
        }
        if let Some(lid) = filter.location_id {
            count_query = count_query.bind(lid);
            select_query = select_query.bind(lid);
        }
        if let Some(active) = filter.is_active {
            count_query = count_query.bind(active);
            select_query = select_query.bind(active);
        }
        if let Some(ref search) = filter.search {
            let pattern = format!("%{search}%");
            count_query = count_query.bind(pattern.clone());
            select_query = select_query.bind(pattern);
        }

        let total = count_query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))?;

        let users = select_query
            .bind(page.limit as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))?;

        Ok(Page::new(users, page, total as u64))
    }

    /// Create a new user.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email, display_name, department_id, location_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&data.username)
        .bind(&data.email)
        .bind(&data.display_name)
        .bind(data.department_id)
        .bind(data.location_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("users_username_key") =>
            {
                AppError::conflict(format!("Username '{}' already exists", data.username))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    /// Update a user. `COALESCE` keeps unset fields unchanged.
    pub async fn update(&self, data: &UpdateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET email = COALESCE($2, email), \
                              display_name = COALESCE($3, display_name), \
                              department_id = COALESCE($4, department_id), \
                              location_id = COALESCE($5, location_id), \
                              is_active = COALESCE($6, is_active), \
                              updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(data.id)
        .bind(&data.email)
        .bind(&data.display_name)
        .bind(data.department_id)
        .bind(data.location_id)
        .bind(data.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update user", e))?
        .ok_or_else(|| AppError::not_found(format!("User {} not found", data.id)))
    }

    /// Delete a user.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete user", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("User {id} not found")));
        }
        Ok(())
    }
}
