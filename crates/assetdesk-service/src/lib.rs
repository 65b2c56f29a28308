//! # assetdesk-service
//!
//! Domain services sitting between the HTTP layer and the repositories:
//! audit recording, photo storage, dashboard aggregation, and
//! organizational delete guards.

pub mod audit;
pub mod dashboard;
pub mod org;
pub mod uploads;

pub use audit::AuditRecorder;
pub use dashboard::DashboardService;
pub use org::OrgService;
pub use uploads::PhotoStorage;
