//! Simple named lookup entities used by the settings/dropdown handlers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An asset category (e.g., "Laptop", "Monitor").
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Unique category identifier.
    pub id: Uuid,
    /// Unique category name.
    pub name: String,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
}

/// A hardware manufacturer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Manufacturer {
    /// Unique manufacturer identifier.
    pub id: Uuid,
    /// Unique manufacturer name.
    pub name: String,
    /// When the manufacturer was created.
    pub created_at: DateTime<Utc>,
}

/// A deployable asset status (e.g., "Ready to Deploy", "In Repair").
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StatusLabel {
    /// Unique status identifier.
    pub id: Uuid,
    /// Unique status name.
    pub name: String,
    /// Whether assets with this status count as deployable.
    pub deployable: bool,
    /// When the status label was created.
    pub created_at: DateTime<Utc>,
}

/// A supplier assets are purchased from.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Supplier {
    /// Unique supplier identifier.
    pub id: Uuid,
    /// Unique supplier name.
    pub name: String,
    /// Contact email (optional).
    pub contact_email: Option<String>,
    /// When the supplier was created.
    pub created_at: DateTime<Utc>,
}
