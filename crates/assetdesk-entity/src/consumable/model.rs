//! Consumable entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A consumable stock item (toner, cables, batteries).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Consumable {
    /// Unique consumable identifier.
    pub id: Uuid,
    /// Item name.
    pub name: String,
    /// Category reference (optional).
    pub category_id: Option<Uuid>,
    /// Storage location (optional).
    pub location_id: Option<Uuid>,
    /// Current stock quantity.
    pub quantity: i32,
    /// Minimum stock quantity before restocking.
    pub min_quantity: i32,
    /// When the consumable was created.
    pub created_at: DateTime<Utc>,
    /// When the consumable was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new consumable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateConsumable {
    /// Item name.
    pub name: String,
    /// Category reference (optional).
    pub category_id: Option<Uuid>,
    /// Storage location (optional).
    pub location_id: Option<Uuid>,
    /// Initial stock quantity.
    pub quantity: i32,
    /// Minimum stock quantity.
    pub min_quantity: i32,
}
