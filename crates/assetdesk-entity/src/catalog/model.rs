//! Asset model entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A purchasable asset model; belongs to one manufacturer and one category.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssetModel {
    /// Unique model identifier.
    pub id: Uuid,
    /// Model name.
    pub name: String,
    /// Manufacturer reference.
    pub manufacturer_id: Uuid,
    /// Category reference.
    pub category_id: Uuid,
    /// Manufacturer part/model number (optional).
    pub model_number: Option<String>,
    /// When the model was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new asset model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAssetModel {
    /// Model name.
    pub name: String,
    /// Manufacturer reference.
    pub manufacturer_id: Uuid,
    /// Category reference.
    pub category_id: Uuid,
    /// Model number (optional).
    pub model_number: Option<String>,
}
