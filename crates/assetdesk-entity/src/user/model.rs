//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered user of the asset-management system.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Unique login name.
    pub username: String,
    /// Email address (optional).
    pub email: Option<String>,
    /// Human-readable display name.
    pub display_name: Option<String>,
    /// The department this user belongs to (optional).
    pub department_id: Option<Uuid>,
    /// The location this user is based at (optional).
    pub location_id: Option<Uuid>,
    /// Whether the account is active. Inactive users resolve to zero
    /// effective permissions regardless of role assignments.
    pub is_active: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Name shown in audit details: display name if set, otherwise username.
    pub fn shown_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Desired username.
    pub username: String,
    /// Email address (optional).
    pub email: Option<String>,
    /// Display name (optional).
    pub display_name: Option<String>,
    /// Department assignment (optional).
    pub department_id: Option<Uuid>,
    /// Location assignment (optional).
    pub location_id: Option<Uuid>,
}

/// Data for updating an existing user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUser {
    /// The user ID to update.
    pub id: Uuid,
    /// New email address.
    pub email: Option<String>,
    /// New display name.
    pub display_name: Option<String>,
    /// New department assignment.
    pub department_id: Option<Uuid>,
    /// New location assignment.
    pub location_id: Option<Uuid>,
    /// New active flag.
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shown_name_prefers_display_name() {
        let mut user = User {
            id: Uuid::new_v4(),
            username: "jdoe".to_string(),
            email: None,
            display_name: Some("J. Doe".to_string()),
            department_id: None,
            location_id: None,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(user.shown_name(), "J. Doe");
        user.display_name = None;
        assert_eq!(user.shown_name(), "jdoe");
    }
}
