//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size.
const DEFAULT_PAGE_SIZE: u64 = 50;
/// Maximum page size.
const MAX_PAGE_SIZE: u64 = 100;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl PageRequest {
    /// Create a new page request, clamping out-of-range values.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Calculate the SQL `OFFSET` value.
    pub fn offset(&self) -> u64 {
        (self.page.saturating_sub(1)) * self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Pagination metadata returned alongside every page of data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub limit: u64,
    /// Total number of items across all pages.
    pub total: u64,
    /// Total number of pages (`ceil(total / limit)`).
    pub total_pages: u64,
}

/// Paginated response wrapper: items plus pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T: Serialize> {
    /// The items on this page.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub pagination: Pagination,
}

impl<T: Serialize> Page<T> {
    /// Create a new paginated response.
    ///
    /// Out-of-range pages yield an empty `data` vector with the correctly
    /// computed `total` and `total_pages`.
    pub fn new(data: Vec<T>, request: &PageRequest, total: u64) -> Self {
        Self {
            data,
            pagination: Pagination {
                page: request.page,
                limit: request.limit,
                total,
                total_pages: total.div_ceil(request.limit.max(1)),
            },
        }
    }
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    DEFAULT_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_math() {
        assert_eq!(PageRequest::new(1, 50).offset(), 0);
        assert_eq!(PageRequest::new(3, 20).offset(), 40);
        // Page 0 is clamped to 1.
        assert_eq!(PageRequest::new(0, 20).offset(), 0);
    }

    #[test]
    fn test_limit_clamped() {
        assert_eq!(PageRequest::new(1, 0).limit, 1);
        assert_eq!(PageRequest::new(1, 10_000).limit, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        let req = PageRequest::new(1, 50);
        assert_eq!(Page::new(vec![1], &req, 101).pagination.total_pages, 3);
        assert_eq!(Page::new(vec![1], &req, 100).pagination.total_pages, 2);
        assert_eq!(Page::<i32>::new(vec![], &req, 0).pagination.total_pages, 0);
    }

    #[test]
    fn test_out_of_range_page_keeps_totals() {
        let req = PageRequest::new(99, 50);
        let page = Page::<i32>::new(vec![], &req, 7);
        assert!(page.data.is_empty());
        assert_eq!(page.pagination.total, 7);
        assert_eq!(page.pagination.total_pages, 1);
        assert_eq!(page.pagination.page, 99);
    }
}
