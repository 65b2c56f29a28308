//! Response envelope types.

use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

use assetdesk_core::types::pagination::{Page, Pagination};

/// Standard success envelope for single resources and plain lists.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Always `true` on the success path.
    pub success: bool,
    /// The response payload.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap a payload in the success envelope.
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Wrap a freshly created resource in the success envelope, served as
/// 201 Created.
pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<ApiResponse<T>>) {
    (StatusCode::CREATED, Json(ApiResponse::new(data)))
}

/// Success envelope for paginated lists.
#[derive(Debug, Clone, Serialize)]
pub struct PagedResponse<T: Serialize> {
    /// Always `true` on the success path.
    pub success: bool,
    /// The items on this page.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub pagination: Pagination,
}

impl<T: Serialize> From<Page<T>> for PagedResponse<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            success: true,
            data: page.data,
            pagination: page.pagination,
        }
    }
}

/// Success envelope for operations without a resource payload.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    /// Always `true` on the success path.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
}

impl MessageResponse {
    /// Wrap a message in the success envelope.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;
    use serde_json::json;

    #[test]
    fn test_created_envelope_serves_201() {
        let response = created(json!({ "asset_tag": "AS-1001" })).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[test]
    fn test_plain_envelope_serves_200() {
        let response = Json(ApiResponse::new("payload")).into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
