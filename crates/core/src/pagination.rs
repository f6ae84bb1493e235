//! Page/limit resolution and list pagination metadata.
//!
//! Every list endpoint funnels its optional `page` / `limit` query values
//! through [`PageRequest`] and [`resolve`], so defaults and the limit cap are
//! applied identically for landlords, properties, and tenants.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Page number used when the request does not specify one.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the request does not specify one.
pub const DEFAULT_LIMIT: i64 = 20;

/// Largest page size a client may request. Larger values are clamped.
pub const MAX_LIMIT: i64 = 100;

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Optional pagination inputs as they arrive on a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Concrete pagination window derived from a [`PageRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub page: i64,
    pub offset: i64,
}

/// Resolve optional page/limit values into a concrete window.
///
/// - Missing page defaults to [`DEFAULT_PAGE`], missing limit to [`DEFAULT_LIMIT`].
/// - Limit is clamped to [`MAX_LIMIT`] without error.
/// - Offset is `(page - 1) * limit`, saturating at `i64::MAX` so a huge
///   page number yields an empty page instead of overflowing.
///
/// Page numbers below 1 are passed through untouched; request validation
/// rejects them before they get here.
///
/// # Examples
///
/// ```
/// use propman_core::pagination::{resolve, PageRequest};
/// let p = resolve(&PageRequest { page: Some(3), limit: Some(10) });
/// assert_eq!((p.limit, p.page, p.offset), (10, 3, 20));
/// ```
pub fn resolve(request: &PageRequest) -> Pagination {
    let page = request.page.unwrap_or(DEFAULT_PAGE);
    let limit = request.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);

    Pagination {
        limit,
        page,
        offset: page.saturating_sub(1).saturating_mul(limit),
    }
}

// ---------------------------------------------------------------------------
// Metadata
// ---------------------------------------------------------------------------

/// The `pagination` object returned alongside list `items`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Number of rows matching the filters, across all pages.
    pub total: i64,
    /// Number of rows in this page.
    pub count: i64,
    pub per_page: i64,
    pub current_page: i64,
    pub total_pages: i64,
}

impl PaginationMeta {
    /// Build metadata for a page of `count` rows out of `total`.
    pub fn new(total: i64, count: usize, window: &Pagination) -> Self {
        Self {
            total,
            count: count as i64,
            per_page: window.limit,
            current_page: window.page,
            total_pages: total_pages(total, window.limit),
        }
    }
}

/// `ceil(total / per_page)`, or 0 when `per_page` is not positive.
fn total_pages(total: i64, per_page: i64) -> i64 {
    if per_page <= 0 {
        return 0;
    }
    (total + per_page - 1) / per_page
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- resolve -------------------------------------------------------------

    #[test]
    fn defaults_when_nothing_supplied() {
        let p = resolve(&PageRequest::default());
        assert_eq!(p, Pagination { limit: 20, page: 1, offset: 0 });
    }

    #[test]
    fn limit_above_max_is_clamped() {
        for limit in [101, 250, i64::MAX] {
            let p = resolve(&PageRequest { page: Some(2), limit: Some(limit) });
            assert_eq!(p.limit, MAX_LIMIT);
            assert_eq!(p.offset, MAX_LIMIT);
        }
    }

    #[test]
    fn limit_at_max_is_kept() {
        let p = resolve(&PageRequest { page: None, limit: Some(100) });
        assert_eq!(p.limit, 100);
    }

    #[test]
    fn missing_page_defaults_to_first() {
        let p = resolve(&PageRequest { page: None, limit: Some(5) });
        assert_eq!(p.page, 1);
        assert_eq!(p.offset, 0);
    }

    #[test]
    fn offset_is_page_minus_one_times_limit() {
        for (page, limit) in [(1, 5), (2, 5), (7, 13), (4, 100)] {
            let p = resolve(&PageRequest { page: Some(page), limit: Some(limit) });
            assert_eq!(p.offset, (page - 1) * limit);
        }
    }

    #[test]
    fn huge_page_saturates_offset() {
        let p = resolve(&PageRequest { page: Some(i64::MAX), limit: Some(20) });
        assert_eq!(p.page, i64::MAX);
        assert_eq!(p.limit, 20);
        assert_eq!(p.offset, i64::MAX);
    }

    #[test]
    fn non_positive_page_is_not_rejected() {
        let p = resolve(&PageRequest { page: Some(0), limit: Some(10) });
        assert_eq!(p.page, 0);
        assert_eq!(p.offset, -10);
    }

    // -- PaginationMeta ------------------------------------------------------

    #[test]
    fn meta_for_second_page_of_twelve() {
        let window = resolve(&PageRequest { page: Some(2), limit: Some(5) });
        let meta = PaginationMeta::new(12, 5, &window);
        assert_eq!(meta.total, 12);
        assert_eq!(meta.count, 5);
        assert_eq!(meta.per_page, 5);
        assert_eq!(meta.current_page, 2);
        assert_eq!(meta.total_pages, 3);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
    }

    #[test]
    fn total_pages_guards_zero_limit() {
        assert_eq!(total_pages(10, 0), 0);
    }
}
