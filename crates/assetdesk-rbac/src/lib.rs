//! # assetdesk-rbac
//!
//! Role-based access control: flattens a user's role assignments into a
//! flat permission set, answers capability queries, and idempotently
//! seeds the permission catalog.

pub mod bootstrap;
pub mod resolver;

pub use bootstrap::initialize_rbac;
pub use resolver::PermissionResolver;
