//! Audit action enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed taxonomy of tracked actions.
///
/// Every mutating business operation records exactly one of these.
/// Values are stored as their `SCREAMING_SNAKE_CASE` wire names in the
/// `activity_log.action` column; unknown names fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    #[sqlx(rename = "USER_CREATE")]
    UserCreate,
    #[sqlx(rename = "USER_UPDATE")]
    UserUpdate,
    #[sqlx(rename = "USER_DELETE")]
    UserDelete,
    #[sqlx(rename = "USER_ROLE_ASSIGN")]
    UserRoleAssign,
    #[sqlx(rename = "USER_ROLE_REVOKE")]
    UserRoleRevoke,
    #[sqlx(rename = "ASSET_CREATE")]
    AssetCreate,
    #[sqlx(rename = "ASSET_UPDATE")]
    AssetUpdate,
    #[sqlx(rename = "ASSET_DELETE")]
    AssetDelete,
    #[sqlx(rename = "ASSET_PHOTO_UPLOAD")]
    AssetPhotoUpload,
    #[sqlx(rename = "COMMENT_CREATE")]
    CommentCreate,
    #[sqlx(rename = "COMMENT_UPDATE")]
    CommentUpdate,
    #[sqlx(rename = "COMMENT_DELETE")]
    CommentDelete,
    #[sqlx(rename = "CONSUMABLE_CREATE")]
    ConsumableCreate,
    #[sqlx(rename = "CONSUMABLE_UPDATE")]
    ConsumableUpdate,
    #[sqlx(rename = "CONSUMABLE_DELETE")]
    ConsumableDelete,
    #[sqlx(rename = "LICENSE_CREATE")]
    LicenseCreate,
    #[sqlx(rename = "LICENSE_UPDATE")]
    LicenseUpdate,
    #[sqlx(rename = "LICENSE_DELETE")]
    LicenseDelete,
    #[sqlx(rename = "DEPARTMENT_CREATE")]
    DepartmentCreate,
    #[sqlx(rename = "DEPARTMENT_UPDATE")]
    DepartmentUpdate,
    #[sqlx(rename = "DEPARTMENT_DELETE")]
    DepartmentDelete,
    #[sqlx(rename = "LOCATION_CREATE")]
    LocationCreate,
    #[sqlx(rename = "LOCATION_UPDATE")]
    LocationUpdate,
    #[sqlx(rename = "LOCATION_DELETE")]
    LocationDelete,
    #[sqlx(rename = "CATALOG_CREATE")]
    CatalogCreate,
    #[sqlx(rename = "CATALOG_UPDATE")]
    CatalogUpdate,
    #[sqlx(rename = "CATALOG_DELETE")]
    CatalogDelete,
}

impl AuditAction {
    /// Return the action as its wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserCreate => "USER_CREATE",
            Self::UserUpdate => "USER_UPDATE",
            Self::UserDelete => "USER_DELETE",
            Self::UserRoleAssign => "USER_ROLE_ASSIGN",
            Self::UserRoleRevoke => "USER_ROLE_REVOKE",
            Self::AssetCreate => "ASSET_CREATE",
            Self::AssetUpdate => "ASSET_UPDATE",
            Self::AssetDelete => "ASSET_DELETE",
            Self::AssetPhotoUpload => "ASSET_PHOTO_UPLOAD",
            Self::CommentCreate => "COMMENT_CREATE",
            Self::CommentUpdate => "COMMENT_UPDATE",
            Self::CommentDelete => "COMMENT_DELETE",
            Self::ConsumableCreate => "CONSUMABLE_CREATE",
            Self::ConsumableUpdate => "CONSUMABLE_UPDATE",
            Self::ConsumableDelete => "CONSUMABLE_DELETE",
            Self::LicenseCreate => "LICENSE_CREATE",
            Self::LicenseUpdate => "LICENSE_UPDATE",
            Self::LicenseDelete => "LICENSE_DELETE",
            Self::DepartmentCreate => "DEPARTMENT_CREATE",
            Self::DepartmentUpdate => "DEPARTMENT_UPDATE",
            Self::DepartmentDelete => "DEPARTMENT_DELETE",
            Self::LocationCreate => "LOCATION_CREATE",
            Self::LocationUpdate => "LOCATION_UPDATE",
            Self::LocationDelete => "LOCATION_DELETE",
            Self::CatalogCreate => "CATALOG_CREATE",
            Self::CatalogUpdate => "CATALOG_UPDATE",
            Self::CatalogDelete => "CATALOG_DELETE",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AuditAction {
    type Err = assetdesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER_CREATE" => Ok(Self::UserCreate),
            "USER_UPDATE" => Ok(Self::UserUpdate),
            "USER_DELETE" => Ok(Self::UserDelete),
            "USER_ROLE_ASSIGN" => Ok(Self::UserRoleAssign),
            "USER_ROLE_REVOKE" => Ok(Self::UserRoleRevoke),
            "ASSET_CREATE" => Ok(Self::AssetCreate),
            "ASSET_UPDATE" => Ok(Self::AssetUpdate),
            "ASSET_DELETE" => Ok(Self::AssetDelete),
            "ASSET_PHOTO_UPLOAD" => Ok(Self::AssetPhotoUpload),
            "COMMENT_CREATE" => Ok(Self::CommentCreate),
            "COMMENT_UPDATE" => Ok(Self::CommentUpdate),
            "COMMENT_DELETE" => Ok(Self::CommentDelete),
            "CONSUMABLE_CREATE" => Ok(Self::ConsumableCreate),
            "CONSUMABLE_UPDATE" => Ok(Self::ConsumableUpdate),
            "CONSUMABLE_DELETE" => Ok(Self::ConsumableDelete),
            "LICENSE_CREATE" => Ok(Self::LicenseCreate),
            "LICENSE_UPDATE" => Ok(Self::LicenseUpdate),
            "LICENSE_DELETE" => Ok(Self::LicenseDelete),
            "DEPARTMENT_CREATE" => Ok(Self::DepartmentCreate),
            "DEPARTMENT_UPDATE" => Ok(Self::DepartmentUpdate),
            "DEPARTMENT_DELETE" => Ok(Self::DepartmentDelete),
            "LOCATION_CREATE" => Ok(Self::LocationCreate),
            "LOCATION_UPDATE" => Ok(Self::LocationUpdate),
            "LOCATION_DELETE" => Ok(Self::LocationDelete),
            "CATALOG_CREATE" => Ok(Self::CatalogCreate),
            "CATALOG_UPDATE" => Ok(Self::CatalogUpdate),
            "CATALOG_DELETE" => Ok(Self::CatalogDelete),
            _ => Err(assetdesk_core::AppError::validation(format!(
                "Invalid audit action: '{s}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_name_round_trip() {
        for action in [
            AuditAction::AssetCreate,
            AuditAction::CommentUpdate,
            AuditAction::UserRoleAssign,
            AuditAction::CatalogDelete,
        ] {
            assert_eq!(action.as_str().parse::<AuditAction>().unwrap(), action);
        }
    }

    #[test]
    fn test_unknown_action_rejected() {
        assert!("ASSET_EXPLODE".parse::<AuditAction>().is_err());
        assert!("asset_create".parse::<AuditAction>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&AuditAction::AssetCreate).unwrap();
        assert_eq!(json, "\"ASSET_CREATE\"");
    }
}
