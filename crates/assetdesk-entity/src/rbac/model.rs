//! Role and permission row models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A named bundle of permissions. Role names are globally unique.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Role {
    /// Unique role identifier.
    pub id: Uuid,
    /// Globally unique role name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// When the role was created.
    pub created_at: DateTime<Utc>,
}

/// A stored permission row. Permission names are globally unique.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PermissionRecord {
    /// Unique permission identifier.
    pub id: Uuid,
    /// Globally unique `resource:action` name.
    pub name: String,
    /// When the permission was created.
    pub created_at: DateTime<Utc>,
}
