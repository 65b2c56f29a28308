//! # assetdesk-api
//!
//! HTTP layer for AssetDesk: the Axum router, request handlers, DTOs,
//! extractors, and middleware. Handlers stay thin: decode and validate
//! the request, call a repository or service, record the audit entry,
//! and shape the JSON envelope.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
