//! Request DTOs.
//!
//! Every mutating request carries an `external_ticket_id`; a blank value
//! fails validation before any state changes.

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

// ── Assets ───────────────────────────────────────────────────

/// Body for `POST /api/assets`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAssetRequest {
    /// Unique asset tag.
    #[validate(length(min = 1, max = 64))]
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
    /// External ticket correlation token.
    #[validate(length(min = 1, max = 128))]
    pub external_ticket_id: String,
}

/// Body for `PUT /api/assets/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateAssetRequest {
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
    /// External ticket correlation token.
    #[validate(length(min = 1, max = 128))]
    pub external_ticket_id: String,
}

/// Query filters for `GET /api/assets`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetListQuery {
    /// Restrict to one status label.
    pub status_id: Option<Uuid>,
    /// Restrict to one model.
    pub model_id: Option<Uuid>,
    /// Restrict to one assignee.
    pub assigned_to: Option<Uuid>,
    /// Restrict to one location.
    pub location_id: Option<Uuid>,
    /// Substring match on asset tag or serial.
    pub search: Option<String>,
}

// ── Comments ─────────────────────────────────────────────────

/// Body for `POST /api/assets/{id}/comments`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    /// Comment text.
    #[validate(length(min = 1, max = 2000))]
    pub content: String,
    /// External ticket correlation token.
    #[validate(length(min = 1, max = 128))]
    pub external_ticket_id: String,
}

/// Body for `PUT /api/comments/{id}`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    /// Replacement comment text.
    #[validate(length(min = 1, max = 2000))]
    pub content: String,
    /// External ticket correlation token.
    #[validate(length(min = 1, max = 128))]
    pub external_ticket_id: String,
}

// ── Users ────────────────────────────────────────────────────

/// Body for `POST /api/users`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Desired username.
    #[validate(length(min = 1, max = 64))]
    pub username: String,
    /// Email address (optional).
    #[validate(email)]
    pub email: Option<String>,
    /// Display name (optional).
    pub display_name: Option<String>,
    /// Department assignment (optional).
    pub department_id: Option<Uuid>,
    /// Location assignment (optional).
    pub location_id: Option<Uuid>,
    /// External ticket correlation token.
    #[validate(length(min = 1, max = 128))]
    pub external_ticket_id: String,
}

/// Body for `PUT /api/users/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// New email address.
    #[validate(email)]
    pub email: Option<String>,
    /// New display name.
    pub display_name: Option<String>,
    /// New department assignment.
    pub department_id: Option<Uuid>,
    /// New location assignment.
    pub location_id: Option<Uuid>,
    /// New active flag.
    pub is_active: Option<bool>,
    /// External ticket correlation token.
    #[validate(length(min = 1, max = 128))]
    pub external_ticket_id: String,
}

/// Query filters for `GET /api/users`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserListQuery {
    /// Restrict to one department.
    pub department_id: Option<Uuid>,
    /// Restrict to one location.
    pub location_id: Option<Uuid>,
    /// Restrict by active flag.
    pub is_active: Option<bool>,
    /// Substring match on username, display name, or email.
    pub search: Option<String>,
}

/// Body for `POST /api/users/{id}/roles`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AssignRoleRequest {
    /// The role to assign.
    pub role_id: Uuid,
    /// External ticket correlation token.
    #[validate(length(min = 1, max = 128))]
    pub external_ticket_id: String,
}

// ── Departments ──────────────────────────────────────────────

/// Body for `POST /api/departments`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDepartmentRequest {
    /// Department name.
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    /// Manager (optional).
    pub manager_id: Option<Uuid>,
    /// External ticket correlation token.
    #[validate(length(min = 1, max = 128))]
    pub external_ticket_id: String,
}

/// Body for `PUT /api/departments/{id}`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateDepartmentRequest {
    /// New department name.
    #[validate(length(min = 1, max = 128))]
    pub name: Option<String>,
    /// New manager.
    pub manager_id: Option<Uuid>,
    /// External ticket correlation token.
    #[validate(length(min = 1, max = 128))]
    pub external_ticket_id: String,
}

// ── Locations ────────────────────────────────────────────────

/// Body for `POST /api/locations`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLocationRequest {
    /// Location name.
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    /// Parent location (optional).
    pub parent_location_id: Option<Uuid>,
    /// Street address (optional).
    pub address: Option<String>,
    /// City (optional).
    pub city: Option<String>,
    /// Country (optional).
    pub country: Option<String>,
    /// External ticket correlation token.
    #[validate(length(min = 1, max = 128))]
    pub external_ticket_id: String,
}

/// Body for `PUT /api/locations/{id}`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateLocationRequest {
    /// New location name.
    #[validate(length(min = 1, max = 128))]
    pub name: Option<String>,
    /// New street address.
    pub address: Option<String>,
    /// New city.
    pub city: Option<String>,
    /// New country.
    pub country: Option<String>,
    /// External ticket correlation token.
    #[validate(length(min = 1, max = 128))]
    pub external_ticket_id: String,
}

// ── Consumables ──────────────────────────────────────────────

/// Body for `POST /api/consumables`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateConsumableRequest {
    /// Item name.
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    /// Category (optional).
    pub category_id: Option<Uuid>,
    /// Storage location (optional).
    pub location_id: Option<Uuid>,
    /// Initial stock quantity.
    #[validate(range(min = 0))]
    pub quantity: i32,
    /// Minimum stock quantity.
    #[validate(range(min = 0))]
    pub min_quantity: i32,
    /// External ticket correlation token.
    #[validate(length(min = 1, max = 128))]
    pub external_ticket_id: String,
}

/// Body for `PUT /api/consumables/{id}`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateConsumableRequest {
    /// New item name.
    #[validate(length(min = 1, max = 128))]
    pub name: Option<String>,
    /// New stock quantity.
    #[validate(range(min = 0))]
    pub quantity: Option<i32>,
    /// New minimum stock quantity.
    #[validate(range(min = 0))]
    pub min_quantity: Option<i32>,
    /// External ticket correlation token.
    #[validate(length(min = 1, max = 128))]
    pub external_ticket_id: String,
}

/// Query filters for `GET /api/consumables`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConsumableListQuery {
    /// Restrict to one category.
    pub category_id: Option<Uuid>,
}

// ── Licenses ─────────────────────────────────────────────────

/// Body for `POST /api/licenses`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLicenseRequest {
    /// License/product name.
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    /// Product key (optional).
    pub product_key: Option<String>,
    /// Number of purchased seats.
    #[validate(range(min = 1))]
    pub seats: i32,
    /// Manufacturer (optional).
    pub manufacturer_id: Option<Uuid>,
    /// Expiration date (optional).
    pub expires_at: Option<NaiveDate>,
    /// Notes (optional).
    pub notes: Option<String>,
    /// External ticket correlation token.
    #[validate(length(min = 1, max = 128))]
    pub external_ticket_id: String,
}

/// Body for `PUT /api/licenses/{id}`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateLicenseRequest {
    /// New license name.
    #[validate(length(min = 1, max = 128))]
    pub name: Option<String>,
    /// New seat count.
    #[validate(range(min = 1))]
    pub seats: Option<i32>,
    /// New notes.
    pub notes: Option<String>,
    /// External ticket correlation token.
    #[validate(length(min = 1, max = 128))]
    pub external_ticket_id: String,
}

/// Query filters for `GET /api/licenses`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LicenseListQuery {
    /// Substring match on license name.
    pub search: Option<String>,
}

// ── Catalog (settings) ───────────────────────────────────────

/// Body for `POST /api/settings/models`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateModelRequest {
    /// Model name.
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    /// Manufacturer reference.
    pub manufacturer_id: Uuid,
    /// Category reference.
    pub category_id: Uuid,
    /// Model number (optional).
    pub model_number: Option<String>,
    /// External ticket correlation token.
    #[validate(length(min = 1, max = 128))]
    pub external_ticket_id: String,
}

/// Body for creating name-only catalog rows (manufacturers, categories).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNamedRequest {
    /// Entry name.
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    /// External ticket correlation token.
    #[validate(length(min = 1, max = 128))]
    pub external_ticket_id: String,
}

/// Body for `POST /api/settings/status-labels`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStatusLabelRequest {
    /// Status label name.
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    /// Whether assets with this status count as deployable.
    #[serde(default)]
    pub deployable: bool,
    /// External ticket correlation token.
    #[validate(length(min = 1, max = 128))]
    pub external_ticket_id: String,
}

/// Body for `POST /api/settings/suppliers`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSupplierRequest {
    /// Supplier name.
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    /// Contact email (optional).
    #[validate(email)]
    pub contact_email: Option<String>,
    /// External ticket correlation token.
    #[validate(length(min = 1, max = 128))]
    pub external_ticket_id: String,
}

// ── Shared ───────────────────────────────────────────────────

/// Query parameter carrying the ticket for DELETE endpoints.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TicketQuery {
    /// External ticket correlation token.
    #[validate(length(min = 1, max = 128))]
    pub external_ticket_id: String,
}

/// Query filters for `GET /api/activity`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActivityListQuery {
    /// Restrict to one acting user.
    pub user_id: Option<Uuid>,
    /// Restrict to one action name (e.g. `ASSET_CREATE`).
    pub action: Option<String>,
    /// Restrict to one target type.
    pub target_type: Option<String>,
    /// Restrict to one target row.
    pub target_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::validate_payload;

    #[test]
    fn test_create_asset_requires_ticket() {
        let body: CreateAssetRequest = serde_json::from_value(serde_json::json!({
            "asset_tag": "AS-1001",
            "model_id": Uuid::new_v4(),
            "status_id": Uuid::new_v4(),
            "external_ticket_id": ""
        }))
        .unwrap();
        assert!(validate_payload(&body).is_err());
    }

    #[test]
    fn test_create_asset_accepts_minimal_body() {
        let body: CreateAssetRequest = serde_json::from_value(serde_json::json!({
            "asset_tag": "AS-1001",
            "model_id": Uuid::new_v4(),
            "status_id": Uuid::new_v4(),
            "external_ticket_id": "TICKET-7"
        }))
        .unwrap();
        assert!(validate_payload(&body).is_ok());
    }

    #[test]
    fn test_create_user_rejects_bad_email() {
        let body: CreateUserRequest = serde_json::from_value(serde_json::json!({
            "username": "jdoe",
            "email": "not-an-email",
            "external_ticket_id": "TICKET-7"
        }))
        .unwrap();
        assert!(validate_payload(&body).is_err());
    }

    #[test]
    fn test_consumable_rejects_negative_quantity() {
        let body: CreateConsumableRequest = serde_json::from_value(serde_json::json!({
            "name": "Toner",
            "quantity": -1,
            "min_quantity": 0,
            "external_ticket_id": "TICKET-7"
        }))
        .unwrap();
        assert!(validate_payload(&body).is_err());
    }
}
