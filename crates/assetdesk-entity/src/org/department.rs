//! Department entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A department users and assets can belong to. Names are unique.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Department {
    /// Unique department identifier.
    pub id: Uuid,
    /// Unique department name.
    pub name: String,
    /// Optional manager.
    pub manager_id: Option<Uuid>,
    /// When the department was created.
    pub created_at: DateTime<Utc>,
    /// When the department was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Counts of rows still referencing a department.
///
/// Deletion is refused while any count is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentReferences {
    /// Users assigned to the department.
    pub users: i64,
    /// Assets owned by the department.
    pub assets: i64,
}

impl DepartmentReferences {
    /// Whether any row still references the department.
    pub fn is_referenced(&self) -> bool {
        self.users > 0 || self.assets > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreferenced_department_is_deletable() {
        let refs = DepartmentReferences { users: 0, assets: 0 };
        assert!(!refs.is_referenced());
    }

    #[test]
    fn test_any_reference_blocks_deletion() {
        assert!(DepartmentReferences { users: 1, assets: 0 }.is_referenced());
        assert!(DepartmentReferences { users: 0, assets: 2 }.is_referenced());
    }
}
