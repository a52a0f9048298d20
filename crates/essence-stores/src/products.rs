//! Paginated product list state machine.

use essence_api::ApiError;
use essence_commerce::catalog::Product;
use essence_commerce::filters::FilterSet;
use essence_commerce::page::{Pagination, ProductPage};

/// Ticket for an in-flight product page fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    generation: u64,
    filters: FilterSet,
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Filters the page is scoped to.
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Requested page number (1-based).
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Requested page size.
    pub fn limit(&self) -> u32 {
        self.limit
    }
}

/// Holds the filtered, incrementally paged product collection.
///
/// Page 1 replaces the collection (fresh search); later pages append.
/// The `loading` flag rejects overlapping fetches, so out-of-order page
/// requests cannot be issued in the first place.
#[derive(Debug)]
pub struct ProductListStore {
    items: Vec<Product>,
    current_page: u32,
    total_pages: u32,
    total_count: u64,
    active_filters: FilterSet,
    loading: bool,
    error: Option<String>,
    generation: u64,
    page_size: u32,
}

impl ProductListStore {
    pub fn new(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            current_page: 0,
            total_pages: 0,
            total_count: 0,
            active_filters: FilterSet::new(),
            loading: false,
            error: None,
            generation: 0,
            page_size,
        }
    }

    /// Products accumulated across the pages fetched so far.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Filters driving the current collection.
    pub fn active_filters(&self) -> &FilterSet {
        &self.active_filters
    }

    /// Whether a page fetch is outstanding.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Last fetch failure, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Total matching products across all pages.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Whether more pages remain.
    pub fn has_more(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Pagination view info for the collection.
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.current_page.max(1), self.total_pages, self.total_count)
    }

    /// Start a fetch of `page` under `filters`.
    ///
    /// Returns `None` while another fetch is outstanding (re-entrancy
    /// lock; requests are rejected, not queued).
    pub fn begin_fetch(&mut self, filters: FilterSet, page: u32) -> Option<PageRequest> {
        if self.loading {
            tracing::debug!(page, "product fetch already in flight; request rejected");
            return None;
        }
        self.loading = true;
        self.error = None;
        self.active_filters = filters.clone();
        self.generation += 1;
        Some(PageRequest {
            generation: self.generation,
            filters,
            page,
            limit: self.page_size,
        })
    }

    /// Request the next page under the active filters.
    ///
    /// No-op when the last page is already loaded or a fetch is in
    /// flight.
    pub fn load_more(&mut self) -> Option<PageRequest> {
        if !self.has_more() {
            return None;
        }
        self.begin_fetch(self.active_filters.clone(), self.current_page + 1)
    }

    /// Apply the response for a page fetch.
    ///
    /// Superseded tickets are discarded. On success, page 1 replaces the
    /// collection and later pages append. On failure the previously
    /// shown items are preserved and only `error` is set.
    ///
    /// Returns whether the response was applied.
    pub fn resolve_page(
        &mut self,
        request: &PageRequest,
        result: Result<ProductPage, ApiError>,
    ) -> bool {
        if request.generation != self.generation {
            tracing::debug!(
                stale = request.generation,
                current = self.generation,
                "discarding superseded product page"
            );
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                if request.page <= 1 {
                    self.items = page.products;
                } else {
                    self.items.extend(page.products);
                }
                self.current_page = page.page;
                self.total_pages = page.pages;
                self.total_count = page.total_products;
            }
            Err(error) => {
                tracing::warn!(%error, page = request.page, "product fetch failed");
                self.error = Some(error.to_string());
            }
        }
        true
    }

    /// Reset to the pre-search state (e.g., when leaving the listing
    /// view). Advances the generation so any page response still in
    /// flight resolves against an outdated ticket and is discarded.
    pub fn reset(&mut self) {
        self.items.clear();
        self.current_page = 0;
        self.total_pages = 0;
        self.total_count = 0;
        self.active_filters.clear_all();
        self.loading = false;
        self.error = None;
        self.generation += 1;
    }
}
