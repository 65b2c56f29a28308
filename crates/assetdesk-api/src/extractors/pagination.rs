//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};

use assetdesk_core::types::pagination::PageRequest;

/// Query parameters for paginated endpoints.
///
/// Absent parameters fall back to the application defaults; out-of-range
/// values are clamped rather than rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-based, default: 1).
    pub page: Option<u64>,
    /// Items per page (default: 50, max: 100).
    pub limit: Option<u64>,
}

impl PaginationParams {
    /// Convert to a clamped `PageRequest`.
    pub fn into_page_request(self) -> PageRequest {
        let defaults = PageRequest::default();
        PageRequest::new(
            self.page.unwrap_or(defaults.page),
            self.limit.unwrap_or(defaults.limit),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let request = PaginationParams::default().into_page_request();
        assert_eq!(request.page, 1);
        assert_eq!(request.limit, 50);
    }

    #[test]
    fn test_limit_clamped_to_maximum() {
        let request = PaginationParams {
            page: Some(2),
            limit: Some(5000),
        }
        .into_page_request();
        assert_eq!(request.page, 2);
        assert_eq!(request.limit, 100);
    }

    #[test]
    fn test_zero_page_clamped() {
        let request = PaginationParams {
            page: Some(0),
            limit: Some(10),
        }
        .into_page_request();
        assert_eq!(request.page, 1);
    }
}
