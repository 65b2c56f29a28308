//! Concrete repository implementations, one per entity.

pub mod asset;
pub mod audit;
pub mod catalog;
pub mod comment;
pub mod consumable;
pub mod department;
pub mod license;
pub mod location;
pub mod rbac;
pub mod user;
