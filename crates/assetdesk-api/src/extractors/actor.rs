//! Acting-user extractor.
//!
//! AssetDesk sits behind a gateway that authenticates requests and
//! forwards the caller's identity in the `x-user-id` header. The extractor
//! only parses that identity; permission checks happen in the handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use assetdesk_core::error::AppError;

use crate::error::ApiError;

/// Header carrying the authenticated caller's user ID.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated user performing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    /// The acting user's ID.
    pub user_id: Uuid,
}

impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::validation(format!("Missing required header '{USER_ID_HEADER}'"))
            })?;

        let user_id = value.parse::<Uuid>().map_err(|_| {
            AppError::validation(format!("Header '{USER_ID_HEADER}' is not a valid UUID"))
        })?;

        Ok(Self { user_id })
    }
}
