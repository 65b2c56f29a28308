//! Permission name enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed catalog of capability names.
///
/// Permissions are rendered as `resource:action` strings; that rendering is
/// what the `permissions.name` column stores. Unknown names fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    AssetView,
    AssetCreate,
    AssetUpdate,
    AssetDelete,
    UserView,
    UserCreate,
    UserUpdate,
    UserDelete,
    UserAssignRoles,
    DepartmentView,
    DepartmentManage,
    LocationView,
    LocationManage,
    ConsumableView,
    ConsumableManage,
    LicenseView,
    LicenseManage,
    CatalogView,
    CatalogManage,
    ActivityView,
}

impl Permission {
    /// Every permission in the catalog, used by the RBAC bootstrap.
    pub const CATALOG: [Permission; 20] = [
        Self::AssetView,
        Self::AssetCreate,
        Self::AssetUpdate,
        Self::AssetDelete,
        Self::UserView,
        Self::UserCreate,
        Self::UserUpdate,
        Self::UserDelete,
        Self::UserAssignRoles,
        Self::DepartmentView,
        Self::DepartmentManage,
        Self::LocationView,
        Self::LocationManage,
        Self::ConsumableView,
        Self::ConsumableManage,
        Self::LicenseView,
        Self::LicenseManage,
        Self::CatalogView,
        Self::CatalogManage,
        Self::ActivityView,
    ];

    /// Return the permission as its `resource:action` name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AssetView => "asset:view",
            Self::AssetCreate => "asset:create",
            Self::AssetUpdate => "asset:update",
            Self::AssetDelete => "asset:delete",
            Self::UserView => "user:view",
            Self::UserCreate => "user:create",
            Self::UserUpdate => "user:update",
            Self::UserDelete => "user:delete",
            Self::UserAssignRoles => "user:assign_roles",
            Self::DepartmentView => "department:view",
            Self::DepartmentManage => "department:manage",
            Self::LocationView => "location:view",
            Self::LocationManage => "location:manage",
            Self::ConsumableView => "consumable:view",
            Self::ConsumableManage => "consumable:manage",
            Self::LicenseView => "license:view",
            Self::LicenseManage => "license:manage",
            Self::CatalogView => "catalog:view",
            Self::CatalogManage => "catalog:manage",
            Self::ActivityView => "activity:view",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Permission {
    type Err = assetdesk_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::CATALOG
            .iter()
            .find(|p| p.as_str() == s)
            .copied()
            .ok_or_else(|| {
                assetdesk_core::AppError::validation(format!("Invalid permission name: '{s}'"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_names_unique() {
        let mut names: Vec<&str> = Permission::CATALOG.iter().map(|p| p.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Permission::CATALOG.len());
    }

    #[test]
    fn test_name_round_trip() {
        for p in Permission::CATALOG {
            assert_eq!(p.as_str().parse::<Permission>().unwrap(), p);
        }
    }

    #[test]
    fn test_unknown_name_rejected() {
        assert!("asset:reboot".parse::<Permission>().is_err());
        assert!("".parse::<Permission>().is_err());
    }
}
