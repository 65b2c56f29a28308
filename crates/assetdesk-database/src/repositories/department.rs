//! Department repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use assetdesk_core::error::{AppError, ErrorKind};
use assetdesk_core::result::AppResult;
use assetdesk_core::types::pagination::{Page, PageRequest};
use assetdesk_entity::org::{Department, DepartmentReferences};

/// Repository for department CRUD and reference counting.
#[derive(Debug, Clone)]
pub struct DepartmentRepository {
    pool: PgPool,
}

impl DepartmentRepository {
    /// Create a new department repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a department by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Department>> {
        sqlx::query_as::<_, Department>("SELECT * FROM departments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find department", e))
    }

    /// List departments with pagination.
    pub async fn list(&self, page: &PageRequest) -> AppResult<Page<Department>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM departments")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count departments", e)
            })?;

        let departments = sqlx::query_as::<_, Department>(
            "SELECT * FROM departments ORDER BY name ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list departments", e))?;

        Ok(Page::new(departments, page, total as u64))
    }

    /// List every department, for dropdown options.
    pub async fn list_all(&self) -> AppResult<Vec<Department>> {
        sqlx::query_as::<_, Department>("SELECT * FROM departments ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list departments", e)
            })
    }

    /// Create a new department.
    pub async fn create(&self, name: &str, manager_id: Option<Uuid>) -> AppResult<Department> {
        sqlx::query_as::<_, Department>(
            "INSERT INTO departments (name, manager_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(name)
        .bind(manager_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("departments_name_key") =>
            {
                AppError::conflict(format!("Department '{name}' already exists"))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create department", e),
        })
    }

    /// Rename a department or change its manager.
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        manager_id: Option<Uuid>,
    ) -> AppResult<Department> {
        sqlx::query_as::<_, Department>(
            "UPDATE departments SET name = COALESCE($2, name), \
                                    manager_id = COALESCE($3, manager_id), \
                                    updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .bind(manager_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("departments_name_key") =>
            {
                AppError::conflict("Department name already exists".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update department", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("Department {id} not found")))
    }

    /// Count users and assets still referencing the department.
    ///
    /// Both counts are gathered concurrently; there is no ordering
    /// dependency between them.
    pub async fn count_references(&self, id: Uuid) -> AppResult<DepartmentReferences> {
        let users_fut = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM users WHERE department_id = $1",
        )
        .bind(id)
        .fetch_one(&self.pool);
        let assets_fut = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM assets WHERE department_id = $1",
        )
        .bind(id)
        .fetch_one(&self.pool);

        let (users, assets) = tokio::try_join!(users_fut, assets_fut).map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count department references", e)
        })?;

        Ok(DepartmentReferences { users, assets })
    }

    /// Delete a department. Callers run the reference pre-check first.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete department", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Department {id} not found")));
        }
        Ok(())
    }
}
