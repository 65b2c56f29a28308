//! Asset entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A tracked hardware asset.
///
/// Belongs to exactly one model and one status label; optionally assigned
/// to a user, a location, a department, and a supplier.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Asset {
    /// Unique asset identifier.
    pub id: Uuid,
    /// Unique human-facing asset tag (e.g., `"AS-1001"`).
    pub asset_tag: String,
    /// Serial number (optional).
    pub serial: Option<String>,
    /// The asset model.
    pub model_id: Uuid,
    /// The current status label.
    pub status_id: Uuid,
    /// The user this asset is assigned to (optional).
    pub assigned_to: Option<Uuid>,
    /// Current location (optional).
    pub location_id: Option<Uuid>,
    /// Owning department (optional).
    pub department_id: Option<Uuid>,
    /// Supplier the asset was purchased from (optional).
    pub supplier_id: Option<Uuid>,
    /// Relative URL of the uploaded photo (optional).
    pub photo_url: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Purchase date (optional).
    pub purchase_date: Option<NaiveDate>,
    /// When the asset was created.
    pub created_at: DateTime<Utc>,
    /// When the asset was last updated.
    pub updated_at: DateTime<Utc>,
}

/// An asset row joined with the names of its shallow relations.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssetExpanded {
    /// Unique asset identifier.
    pub id: Uuid,
    /// Unique human-facing asset tag.
    pub asset_tag: String,
    /// Serial number (optional).
    pub serial: Option<String>,
    /// The asset model.
    pub model_id: Uuid,
    /// Model name.
    pub model_name: String,
    /// Manufacturer name.
    pub manufacturer_name: String,
    /// Category name.
    pub category_name: String,
    /// The current status label.
    pub status_id: Uuid,
    /// Status label name.
    pub status_name: String,
    /// The user this asset is assigned to (optional).
    pub assigned_to: Option<Uuid>,
    /// Username of the assignee (optional).
    pub assigned_to_username: Option<String>,
    /// Current location (optional).
    pub location_id: Option<Uuid>,
    /// Owning department (optional).
    pub department_id: Option<Uuid>,
    /// Supplier (optional).
    pub supplier_id: Option<Uuid>,
    /// Relative URL of the uploaded photo (optional).
    pub photo_url: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Purchase date (optional).
    pub purchase_date: Option<NaiveDate>,
    /// When the asset was created.
    pub created_at: DateTime<Utc>,
    /// When the asset was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAsset {
    /// Unique asset tag.
    pub asset_tag: String,
    /// Serial number (optional).
    pub serial: Option<String>,
    /// Model reference.
    pub model_id: Uuid,
    /// Status reference.
    pub status_id: Uuid,
    /// Assignee (optional).
    pub assigned_to: Option<Uuid>,
    /// Location (optional).
    pub location_id: Option<Uuid>,
    /// Department (optional).
    pub department_id: Option<Uuid>,
    /// Supplier (optional).
    pub supplier_id: Option<Uuid>,
    /// Notes (optional).
    pub notes: Option<String>,
    /// Purchase date (optional).
    pub purchase_date: Option<NaiveDate>,
}

/// Data for updating an existing asset. `None` fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAsset {
    /// The asset ID to update.
    pub id: Uuid,
    /// New serial number.
    pub serial: Option<String>,
    /// New model reference.
    pub model_id: Option<Uuid>,
    /// New status reference.
    pub status_id: Option<Uuid>,
    /// New assignee.
    pub assigned_to: Option<Uuid>,
    /// New location.
    pub location_id: Option<Uuid>,
    /// New department.
    pub department_id: Option<Uuid>,
    /// New supplier.
    pub supplier_id: Option<Uuid>,
    /// New notes.
    pub notes: Option<String>,
    /// New purchase date.
    pub purchase_date: Option<NaiveDate>,
}
