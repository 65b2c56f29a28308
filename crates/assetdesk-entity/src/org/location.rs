//! Location entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A physical location. Locations form a tree via `parent_location_id`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Location {
    /// Unique location identifier.
    pub id: Uuid,
    /// Location name.
    pub name: String,
    /// Parent location (optional).
    pub parent_location_id: Option<Uuid>,
    /// Street address (optional).
    pub address: Option<String>,
    /// City (optional).
    pub city: Option<String>,
    /// Country (optional).
    pub country: Option<String>,
    /// When the location was created.
    pub created_at: DateTime<Utc>,
    /// When the location was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Counts of rows still referencing a location.
///
/// Deletion is refused while any count is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationReferences {
    /// Users based at the location.
    pub users: i64,
    /// Assets stored at the location.
    pub assets: i64,
    /// Child locations.
    pub child_locations: i64,
}

impl LocationReferences {
    /// Whether any row still references the location.
    pub fn is_referenced(&self) -> bool {
        self.users > 0 || self.assets > 0 || self.child_locations > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreferenced_location_is_deletable() {
        let refs = LocationReferences {
            users: 0,
            assets: 0,
            child_locations: 0,
        };
        assert!(!refs.is_referenced());
    }

    #[test]
    fn test_any_reference_blocks_deletion() {
        assert!(
            LocationReferences {
                users: 1,
                assets: 0,
                child_locations: 0,
            }
            .is_referenced()
        );
        assert!(
            LocationReferences {
                users: 0,
                assets: 1,
                child_locations: 0,
            }
            .is_referenced()
        );
        assert!(
            LocationReferences {
                users: 0,
                assets: 0,
                child_locations: 1,
            }
            .is_referenced()
        );
    }
}
