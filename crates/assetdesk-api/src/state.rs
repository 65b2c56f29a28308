//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use assetdesk_core::config::AppConfig;
use assetdesk_database::connection::DatabasePool;
use assetdesk_database::repositories::asset::AssetRepository;
use assetdesk_database::repositories::audit::ActivityLogRepository;
use assetdesk_database::repositories::catalog::CatalogRepository;
use assetdesk_database::repositories::comment::CommentRepository;
use assetdesk_database::repositories::consumable::ConsumableRepository;
use assetdesk_database::repositories::department::DepartmentRepository;
use assetdesk_database::repositories::license::LicenseRepository;
use assetdesk_database::repositories::location::LocationRepository;
use assetdesk_database::repositories::rbac::RbacRepository;
use assetdesk_database::repositories::user::UserRepository;
use assetdesk_rbac::PermissionResolver;
use assetdesk_service::{AuditRecorder, DashboardService, OrgService, PhotoStorage};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Database connection handle.
    pub db: DatabasePool,

    // ── Repositories ─────────────────────────────────────────
    /// User repository.
    pub users: Arc<UserRepository>,
    /// Asset repository.
    pub assets: Arc<AssetRepository>,
    /// Comment repository.
    pub comments: Arc<CommentRepository>,
    /// Consumable repository.
    pub consumables: Arc<ConsumableRepository>,
    /// License repository.
    pub licenses: Arc<LicenseRepository>,
    /// Department repository.
    pub departments: Arc<DepartmentRepository>,
    /// Location repository.
    pub locations: Arc<LocationRepository>,
    /// Catalog repository.
    pub catalog: Arc<CatalogRepository>,
    /// Activity log repository.
    pub activity: Arc<ActivityLogRepository>,
    /// RBAC repository.
    pub rbac: Arc<RbacRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Permission resolver.
    pub resolver: Arc<PermissionResolver>,
    /// Audit recorder.
    pub audit: Arc<AuditRecorder>,
    /// Photo storage.
    pub photos: Arc<PhotoStorage>,
    /// Dashboard aggregation service.
    pub dashboard: Arc<DashboardService>,
    /// Organizational delete guards.
    pub org: Arc<OrgService>,
}

impl AppState {
    /// Wire up repositories and services on top of one connection pool.
    pub fn new(config: Arc<AppConfig>, db: DatabasePool) -> Self {
        let pool = db.pool().clone();

        let users = Arc::new(UserRepository::new(pool.clone()));
        let assets = Arc::new(AssetRepository::new(pool.clone()));
        let comments = Arc::new(CommentRepository::new(pool.clone()));
        let consumables = Arc::new(ConsumableRepository::new(pool.clone()));
        let licenses = Arc::new(LicenseRepository::new(pool.clone()));
        let departments = Arc::new(DepartmentRepository::new(pool.clone()));
        let locations = Arc::new(LocationRepository::new(pool.clone()));
        let catalog = Arc::new(CatalogRepository::new(pool.clone()));
        let activity = Arc::new(ActivityLogRepository::new(pool.clone()));
        let rbac = Arc::new(RbacRepository::new(pool));

        let resolver = Arc::new(PermissionResolver::new(users.clone(), rbac.clone()));
        let audit = Arc::new(AuditRecorder::new(activity.clone()));
        let photos = Arc::new(PhotoStorage::new(config.uploads.clone()));
        let dashboard = Arc::new(DashboardService::new(
            assets.clone(),
            consumables.clone(),
            licenses.clone(),
        ));
        let org = Arc::new(OrgService::new(departments.clone(), locations.clone()));

        Self {
            config,
            db,
            users,
            assets,
            comments,
            consumables,
            licenses,
            departments,
            locations,
            catalog,
            activity,
            rbac,
            resolver,
            audit,
            photos,
            dashboard,
            org,
        }
    }
}
