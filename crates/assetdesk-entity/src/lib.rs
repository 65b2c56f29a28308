//! # assetdesk-entity
//!
//! Domain entity models for AssetDesk: assets, users, organizational
//! units, catalog entities, consumables, licenses, comments, the audit
//! log, and the closed action/permission enumerations.

pub mod asset;
pub mod audit;
pub mod catalog;
pub mod comment;
pub mod consumable;
pub mod license;
pub mod org;
pub mod rbac;
pub mod user;
