//! Permission resolution for users.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::warn;
use uuid::Uuid;

use assetdesk_core::error::AppError;
use assetdesk_core::result::AppResult;
use assetdesk_database::repositories::rbac::RbacRepository;
use assetdesk_database::repositories::user::UserRepository;
use assetdesk_entity::rbac::Permission;

/// Resolves a user's effective permissions from their role assignments.
///
/// Results are computed fresh on every call; nothing is cached between
/// requests.
#[derive(Debug, Clone)]
pub struct PermissionResolver {
    user_repo: Arc<UserRepository>,
    rbac_repo: Arc<RbacRepository>,
}

impl PermissionResolver {
    /// Create a new permission resolver.
    pub fn new(user_repo: Arc<UserRepository>, rbac_repo: Arc<RbacRepository>) -> Self {
        Self {
            user_repo,
            rbac_repo,
        }
    }

    /// Resolve the flat set of effective permissions for a user.
    ///
    /// A missing or inactive user resolves to the empty set regardless of
    /// role assignments.
    pub async fn resolve(&self, user_id: Uuid) -> AppResult<HashSet<Permission>> {
        let user = match self.user_repo.find_by_id(user_id).await? {
            Some(user) if user.is_active => user,
            _ => return Ok(HashSet::new()),
        };

        let names = self.rbac_repo.permission_names_for_user(user.id).await?;
        Ok(flatten_permission_names(&names))
    }

    /// Membership test for a single permission.
    pub async fn has_permission(&self, user_id: Uuid, permission: Permission) -> AppResult<bool> {
        Ok(self.resolve(user_id).await?.contains(&permission))
    }

    /// Any-of membership test.
    pub async fn has_any_permission(
        &self,
        user_id: Uuid,
        permissions: &[Permission],
    ) -> AppResult<bool> {
        let resolved = self.resolve(user_id).await?;
        Ok(permissions.iter().any(|p| resolved.contains(p)))
    }

    /// Guard that fails with an access-denied error naming the missing
    /// permission. Does not cache results across calls.
    pub async fn require_permission(&self, user_id: Uuid, permission: Permission) -> AppResult<()> {
        if self.has_permission(user_id, permission).await? {
            Ok(())
        } else {
            Err(AppError::forbidden(format!(
                "Missing required permission '{permission}'"
            )))
        }
    }
}

/// Flatten stored permission names into the typed set.
///
/// Names that no longer exist in the closed catalog are skipped with a
/// warning rather than failing the whole resolution.
pub fn flatten_permission_names(names: &[String]) -> HashSet<Permission> {
    let mut set = HashSet::new();
    for name in names {
        match name.parse::<Permission>() {
            Ok(permission) => {
                set.insert(permission);
            }
            Err(_) => warn!(name = %name, "Skipping unknown permission name"),
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_collapses_duplicates() {
        let names = vec![
            "asset:view".to_string(),
            "asset:view".to_string(),
            "asset:create".to_string(),
        ];
        let set = flatten_permission_names(&names);
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Permission::AssetView));
        assert!(set.contains(&Permission::AssetCreate));
    }

    #[test]
    fn test_flatten_skips_unknown_names() {
        let names = vec!["asset:view".to_string(), "asset:launch".to_string()];
        let set = flatten_permission_names(&names);
        assert_eq!(set, HashSet::from([Permission::AssetView]));
    }

    #[test]
    fn test_flatten_empty() {
        assert!(flatten_permission_names(&[]).is_empty());
    }
}
