//! Audit log entry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::action::AuditAction;

/// An immutable audit log entry recording a tracked mutation.
///
/// Entries are append-only: no update or delete path exists for them
/// anywhere in the application.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuditLogEntry {
    /// Unique audit entry identifier.
    pub id: Uuid,
    /// The user who performed the action.
    pub user_id: Uuid,
    /// The action that was performed.
    pub action: AuditAction,
    /// The type of target resource (e.g., `"asset"`, `"comment"`).
    pub target_type: String,
    /// The target resource ID (if applicable).
    pub target_id: Option<Uuid>,
    /// Resource-specific structured summary, never the full entity.
    pub details: Option<serde_json::Value>,
    /// Correlation token linking the action to an external ticket.
    pub external_ticket_id: String,
    /// When the action occurred.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new audit log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAuditLogEntry {
    /// The user who performed the action.
    pub user_id: Uuid,
    /// The action performed.
    pub action: AuditAction,
    /// Target resource type.
    pub target_type: String,
    /// Target resource ID.
    pub target_id: Option<Uuid>,
    /// Structured summary of the change.
    pub details: Option<serde_json::Value>,
    /// External ticket correlation token (must be non-empty).
    pub external_ticket_id: String,
}
