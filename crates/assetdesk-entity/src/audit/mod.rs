//! Audit log entities.

pub mod action;
pub mod model;

pub use action::AuditAction;
pub use model::{AuditLogEntry, CreateAuditLogEntry};
