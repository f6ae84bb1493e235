//! Shared response envelope types for API handlers.

use propman_core::pagination::{Pagination, PaginationMeta};
use serde::Serialize;

/// `{ "items": [...], "pagination": {...} }` envelope for list endpoints.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub items: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T: Serialize> ListResponse<T> {
    /// Wrap one page of `items` drawn from `total` matching records.
    pub fn new(items: Vec<T>, total: i64, window: &Pagination) -> Self {
        let pagination = PaginationMeta::new(total, items.len(), window);
        Self { items, pagination }
    }
}
