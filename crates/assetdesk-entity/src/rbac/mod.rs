//! RBAC entities: roles, permission records, and the permission enum.

pub mod model;
pub mod permission;

pub use model::{PermissionRecord, Role};
pub use permission::Permission;
