//! Paginated product pages.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// One page of filtered products as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    /// Products on this page.
    pub products: Vec<Product>,
    /// Page number (1-based).
    pub page: u32,
    /// Total page count for the query.
    pub pages: u32,
    /// Total matching products across all pages.
    pub total_products: u64,
}

impl ProductPage {
    /// Pagination view info for this page.
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.pages, self.total_products)
    }
}

/// Pagination info derived from a server response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: u32,
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of items.
    pub total: u64,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info.
    pub fn new(page: u32, total_pages: u32, total: u64) -> Self {
        Self {
            page,
            total_pages,
            total,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Check if on first page.
    pub fn is_first(&self) -> bool {
        self.page <= 1
    }

    /// Check if on last page.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Get page numbers for display (e.g., [3, 4, 5, 6, 7]).
    pub fn page_numbers(&self, max_visible: u32) -> Vec<u32> {
        if self.total_pages <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let half = max_visible / 2;
        let start = self.page.saturating_sub(half).max(1);
        let end = (start + max_visible - 1).min(self.total_pages);
        let start = (end + 1).saturating_sub(max_visible).max(1);

        (start..=end).collect()
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, 1, 0)
    }
}
