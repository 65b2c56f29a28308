//! RBAC repository: roles, permissions, and their join tables.

use sqlx::PgPool;
use uuid::Uuid;

use assetdesk_core::error::{AppError, ErrorKind};
use assetdesk_core::result::AppResult;
use assetdesk_entity::rbac::{PermissionRecord, Role};

/// Repository for roles, permissions, and assignments.
#[derive(Debug, Clone)]
pub struct RbacRepository {
    pool: PgPool,
}

impl RbacRepository {
    /// Create a new RBAC repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all roles.
    pub async fn list_roles(&self) -> AppResult<Vec<Role>> {
        sqlx::query_as::<_, Role>("SELECT * FROM roles ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list roles", e))
    }

    /// Find a role by its unique name.
    pub async fn find_role_by_name(&self, name: &str) -> AppResult<Option<Role>> {
        sqlx::query_as::<_, Role>("SELECT * FROM roles WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find role", e))
    }

    /// Insert a role if absent; returns the stored row either way.
    pub async fn upsert_role(&self, name: &str, description: Option<&str>) -> AppResult<Role> {
        sqlx::query_as::<_, Role>(
            "INSERT INTO roles (name, description) VALUES ($1, $2) \
             ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name \
             RETURNING *",
        )
        .bind(name)
        .bind(description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upsert role", e))
    }

    /// Insert a permission if absent; returns the stored row either way.
    pub async fn upsert_permission(&self, name: &str) -> AppResult<PermissionRecord> {
        sqlx::query_as::<_, PermissionRecord>(
            "INSERT INTO permissions (name) VALUES ($1) \
             ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name \
             RETURNING *",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upsert permission", e))
    }

    /// Attach a permission to a role. Idempotent.
    pub async fn grant_permission(&self, role_id: Uuid, permission_id: Uuid) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO role_permissions (role_id, permission_id) VALUES ($1, $2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(role_id)
        .bind(permission_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to grant permission", e))?;
        Ok(())
    }

    /// Assign a role to a user. Idempotent.
    pub async fn assign_role(&self, user_id: Uuid, role_id: Uuid) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO user_roles (user_id, role_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(user_id)
        .bind(role_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to assign role", e))?;
        Ok(())
    }

    /// Remove a role from a user.
    pub async fn revoke_role(&self, user_id: Uuid, role_id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM user_roles WHERE user_id = $1 AND role_id = $2")
            .bind(user_id)
            .bind(role_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to revoke role", e))?;
        Ok(())
    }

    /// List the roles assigned to a user.
    pub async fn roles_for_user(&self, user_id: Uuid) -> AppResult<Vec<Role>> {
        sqlx::query_as::<_, Role>(
            "SELECT r.* FROM roles r \
             JOIN user_roles ur ON ur.role_id = r.id \
             WHERE ur.user_id = $1 ORDER BY r.name ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load user roles", e))
    }

    /// Flat list of permission names reachable through a user's roles.
    ///
    /// Duplicates across roles are collapsed by the `DISTINCT`.
    pub async fn permission_names_for_user(&self, user_id: Uuid) -> AppResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT p.name FROM permissions p \
             JOIN role_permissions rp ON rp.permission_id = p.id \
             JOIN user_roles ur ON ur.role_id = rp.role_id \
             WHERE ur.user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load user permissions", e)
        })
    }
}
