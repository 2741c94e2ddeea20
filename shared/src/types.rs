//! Common types used across the service

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Upper bound on page size for any paginated endpoint
pub const MAX_PER_PAGE: u32 = 100;

/// Pagination parameters, already clamped to valid ranges
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Pagination {
    /// Build pagination from raw query values.
    ///
    /// Pages are 1-based; `per_page` is capped at [`MAX_PER_PAGE`].
    pub fn clamped(page: Option<u32>, per_page: Option<u32>, default_per_page: u32) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            per_page: per_page.unwrap_or(default_per_page).clamp(1, MAX_PER_PAGE),
        }
    }

    pub fn limit(&self) -> i64 {
        self.per_page as i64
    }

    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * self.per_page as i64
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 20,
        }
    }
}

/// Paginated response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, pagination: Pagination, total_items: u64) -> Self {
        Self {
            data,
            pagination: PaginationMeta::new(pagination, total_items),
        }
    }
}

/// Pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    pub page: u32,
    pub per_page: u32,
    pub total_items: u64,
    pub total_pages: u32,
}

impl PaginationMeta {
    pub fn new(pagination: Pagination, total_items: u64) -> Self {
        let per_page = pagination.per_page.max(1) as u64;
        Self {
            page: pagination.page,
            per_page: pagination.per_page,
            total_items,
            total_pages: total_items.div_ceil(per_page) as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_missing_values_to_defaults() {
        let p = Pagination::clamped(None, None, 20);
        assert_eq!(p.page, 1);
        assert_eq!(p.per_page, 20);
    }

    #[test]
    fn clamps_per_page_to_maximum() {
        let p = Pagination::clamped(Some(2), Some(500), 20);
        assert_eq!(p.per_page, MAX_PER_PAGE);
    }

    #[test]
    fn clamps_zero_page_and_per_page() {
        let p = Pagination::clamped(Some(0), Some(0), 10);
        assert_eq!(p.page, 1);
        assert_eq!(p.per_page, 1);
    }

    #[test]
    fn offset_is_zero_based() {
        let p = Pagination::clamped(Some(3), Some(10), 10);
        assert_eq!(p.offset(), 20);
        assert_eq!(p.limit(), 10);
    }

    #[test]
    fn meta_rounds_total_pages_up() {
        let p = Pagination::clamped(Some(1), Some(10), 10);
        assert_eq!(PaginationMeta::new(p, 0).total_pages, 0);
        assert_eq!(PaginationMeta::new(p, 10).total_pages, 1);
        assert_eq!(PaginationMeta::new(p, 11).total_pages, 2);
    }
}
