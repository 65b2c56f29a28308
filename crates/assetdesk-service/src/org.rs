//! Delete guards for organizational entities.
//!
//! Departments and locations may only be deleted once nothing references
//! them. The guard reports exactly what still points at the row so the
//! caller can act on it.

use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use assetdesk_core::error::AppError;
use assetdesk_core::result::AppResult;
use assetdesk_database::repositories::department::DepartmentRepository;
use assetdesk_database::repositories::location::LocationRepository;
use assetdesk_entity::org::{DepartmentReferences, LocationReferences};

/// Guarded delete operations for departments and locations.
#[derive(Debug, Clone)]
pub struct OrgService {
    departments: Arc<DepartmentRepository>,
    locations: Arc<LocationRepository>,
}

impl OrgService {
    /// Create a new organizational service.
    pub fn new(departments: Arc<DepartmentRepository>, locations: Arc<LocationRepository>) -> Self {
        Self {
            departments,
            locations,
        }
    }

    /// Delete a department after verifying nothing references it.
    pub async fn delete_department(&self, id: Uuid) -> AppResult<()> {
        let refs = self.departments.count_references(id).await?;
        if refs.is_referenced() {
            return Err(department_in_use(&refs));
        }
        self.departments.delete(id).await
    }

    /// Delete a location after verifying nothing references it.
    pub async fn delete_location(&self, id: Uuid) -> AppResult<()> {
        let refs = self.locations.count_references(id).await?;
        if refs.is_referenced() {
            return Err(location_in_use(&refs));
        }
        self.locations.delete(id).await
    }
}

/// Validation error naming everything still pointing at a department.
fn department_in_use(refs: &DepartmentReferences) -> AppError {
    AppError::validation(format!(
        "Department is still referenced by {} user(s) and {} asset(s)",
        refs.users, refs.assets
    ))
    .with_details(json!({
        "users": refs.users,
        "assets": refs.assets,
    }))
}

/// Validation error naming everything still pointing at a location.
fn location_in_use(refs: &LocationReferences) -> AppError {
    AppError::validation(format!(
        "Location is still referenced by {} user(s), {} asset(s), and {} child location(s)",
        refs.users, refs.assets, refs.child_locations
    ))
    .with_details(json!({
        "users": refs.users,
        "assets": refs.assets,
        "child_locations": refs.child_locations,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetdesk_core::error::ErrorKind;

    #[test]
    fn test_department_in_use_reports_exact_counts() {
        let err = department_in_use(&DepartmentReferences { users: 3, assets: 1 });
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.message.contains("3 user(s)"));
        assert!(err.message.contains("1 asset(s)"));
        assert_eq!(err.details, Some(json!({ "users": 3, "assets": 1 })));
    }

    #[test]
    fn test_location_in_use_reports_exact_counts() {
        let err = location_in_use(&LocationReferences {
            users: 0,
            assets: 2,
            child_locations: 4,
        });
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.message.contains("0 user(s)"));
        assert!(err.message.contains("2 asset(s)"));
        assert!(err.message.contains("4 child location(s)"));
        assert_eq!(
            err.details,
            Some(json!({ "users": 0, "assets": 2, "child_locations": 4 }))
        );
    }
}
