//! Software license entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A purchased software license with a seat count.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct License {
    /// Unique license identifier.
    pub id: Uuid,
    /// License/product name.
    pub name: String,
    /// Product key (optional).
    pub product_key: Option<String>,
    /// Number of purchased seats.
    pub seats: i32,
    /// Manufacturer reference (optional).
    pub manufacturer_id: Option<Uuid>,
    /// Expiration date (optional, perpetual if absent).
    pub expires_at: Option<NaiveDate>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// When the license was created.
    pub created_at: DateTime<Utc>,
    /// When the license was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new license.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLicense {
    /// License/product name.
    pub name: String,
    /// Product key (optional).
    pub product_key: Option<String>,
    /// Number of purchased seats.
    pub seats: i32,
    /// Manufacturer reference (optional).
    pub manufacturer_id: Option<Uuid>,
    /// Expiration date (optional).
    pub expires_at: Option<NaiveDate>,
    /// Notes (optional).
    pub notes: Option<String>,
}
