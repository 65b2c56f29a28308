//! Comment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A comment on an asset, authored by one user.
///
/// Comments are mutable; an edit preserves a truncated before/after
/// snapshot in the audit trail rather than in this table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    /// Unique comment identifier.
    pub id: Uuid,
    /// The asset this comment belongs to.
    pub asset_id: Uuid,
    /// The authoring user.
    pub user_id: Uuid,
    /// Comment content.
    pub content: String,
    /// When the comment was created.
    pub created_at: DateTime<Utc>,
    /// When the comment was last edited.
    pub updated_at: DateTime<Utc>,
}
