//! Idempotent RBAC bootstrap.

use tracing::info;

use assetdesk_core::result::AppResult;
use assetdesk_database::repositories::rbac::RbacRepository;
use assetdesk_entity::rbac::Permission;

/// Name of the role granted every permission in the catalog.
pub const ADMINISTRATOR_ROLE: &str = "Administrator";

/// Upsert the fixed permission catalog and the Administrator role.
///
/// Safe to re-run on every startup: existing rows are left untouched and
/// nothing is ever removed.
pub async fn initialize_rbac(repo: &RbacRepository) -> AppResult<()> {
    info!("Initializing RBAC catalog");

    let role = repo
        .upsert_role(ADMINISTRATOR_ROLE, Some("Full administrative access"))
        .await?;

    for permission in Permission::CATALOG {
        let record = repo.upsert_permission(permission.as_str()).await?;
        repo.grant_permission(role.id, record.id).await?;
    }

    info!(
        permissions = Permission::CATALOG.len(),
        role = ADMINISTRATOR_ROLE,
        "RBAC catalog initialized"
    );
    Ok(())
}
