//! Filter selection and taxonomy state machine.

use essence_api::ApiError;
use essence_commerce::filters::{FilterKey, FilterSet, Taxonomy};

/// Ticket for an in-flight taxonomy fetch.
///
/// Carries the generation captured at dispatch time; the store applies
/// the response only if the generation is still current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyRequest {
    generation: u64,
    scope: FilterSet,
}

impl TaxonomyRequest {
    /// The filter scope the taxonomy should be narrowed to.
    pub fn scope(&self) -> &FilterSet {
        &self.scope
    }
}

/// Holds the UI-selected filters and the server-returned taxonomy.
///
/// `ui_filters` is what the user has picked but not yet applied;
/// `active_filters` is the last applied set, which drives the product
/// query. Changing a filter cascades resets to the narrower dimensions
/// and invalidates any taxonomy fetch still in flight.
#[derive(Debug, Default)]
pub struct FilterStore {
    ui_filters: FilterSet,
    active_filters: FilterSet,
    taxonomy: Taxonomy,
    taxonomy_loading: bool,
    generation: u64,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters the user has picked but not yet applied.
    pub fn ui_filters(&self) -> &FilterSet {
        &self.ui_filters
    }

    /// The last applied filter set.
    pub fn active_filters(&self) -> &FilterSet {
        &self.active_filters
    }

    /// The current taxonomy options.
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Whether a taxonomy fetch is outstanding.
    pub fn taxonomy_loading(&self) -> bool {
        self.taxonomy_loading
    }

    /// Select a value for one dimension, cascading resets to the
    /// narrower ones, and request a re-scoped taxonomy.
    ///
    /// Returns `None` when `value` equals the current selection: nothing
    /// changes and no request is issued (idempotence guard). An empty
    /// `value` clears the dimension; whether that also triggers a search
    /// is the caller's choice (see [`Storefront`](crate::Storefront)).
    pub fn set_filter(&mut self, key: FilterKey, value: &str) -> Option<TaxonomyRequest> {
        if !self.ui_filters.set(key, value) {
            return None;
        }
        Some(self.begin_taxonomy_fetch())
    }

    /// Clear one dimension. Equivalent to `set_filter(key, "")`.
    pub fn clear_filter(&mut self, key: FilterKey) -> Option<TaxonomyRequest> {
        self.set_filter(key, "")
    }

    /// Reset every dimension and request the unscoped taxonomy.
    pub fn clear_all(&mut self) -> TaxonomyRequest {
        self.ui_filters.clear_all();
        self.begin_taxonomy_fetch()
    }

    /// Apply the response for a taxonomy fetch.
    ///
    /// A response whose ticket is no longer current is discarded
    /// (last-issued-wins). A failed fetch resets the options to empty
    /// rather than leaving a stale scope visible.
    ///
    /// Returns whether the response was applied.
    pub fn resolve_taxonomy(
        &mut self,
        request: &TaxonomyRequest,
        result: Result<Taxonomy, ApiError>,
    ) -> bool {
        if request.generation != self.generation {
            tracing::debug!(
                stale = request.generation,
                current = self.generation,
                "discarding superseded taxonomy response"
            );
            return false;
        }
        self.taxonomy_loading = false;
        match result {
            Ok(taxonomy) => self.taxonomy = taxonomy,
            Err(error) => {
                tracing::warn!(%error, "taxonomy fetch failed; clearing options");
                self.taxonomy = Taxonomy::empty();
            }
        }
        true
    }

    /// Promote the current UI selection to the active filter set and
    /// return a snapshot of it.
    pub fn apply(&mut self) -> FilterSet {
        self.active_filters = self.ui_filters.non_empty();
        self.active_filters.clone()
    }

    /// Reset to the unfiltered state (e.g., when leaving the listing
    /// view). Advances the generation so any response still in flight
    /// resolves against an outdated ticket and is discarded.
    pub fn reset(&mut self) {
        self.ui_filters.clear_all();
        self.active_filters.clear_all();
        self.taxonomy = Taxonomy::empty();
        self.taxonomy_loading = false;
        self.generation += 1;
    }

    fn begin_taxonomy_fetch(&mut self) -> TaxonomyRequest {
        self.generation += 1;
        self.taxonomy_loading = true;
        TaxonomyRequest {
            generation: self.generation,
            scope: self.ui_filters.non_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxonomy_with_brands(brands: &[&str]) -> Taxonomy {
        Taxonomy {
            brands: brands.iter().map(|b| b.to_string()).collect(),
            ..Taxonomy::empty()
        }
    }

    #[test]
    fn test_set_filter_scopes_request() {
        let mut store = FilterStore::new();
        let request = store
            .set_filter(FilterKey::Department, "Fragancias")
            .expect("change should issue a request");
        assert_eq!(
            request.scope().get(FilterKey::Department),
            Some("Fragancias")
        );
        assert!(store.taxonomy_loading());
    }

    #[test]
    fn test_idempotent_set_issues_no_request() {
        let mut store = FilterStore::new();
        store.set_filter(FilterKey::Department, "Fragancias").unwrap();
        assert!(store
            .set_filter(FilterKey::Department, "Fragancias")
            .is_none());
    }

    #[test]
    fn test_cascade_through_store() {
        let mut store = FilterStore::new();
        store.set_filter(FilterKey::Department, "Ropa").unwrap();
        store.set_filter(FilterKey::Brand, "Nike").unwrap();
        store.set_filter(FilterKey::Category, "Zapatos").unwrap();
        store.set_filter(FilterKey::Subcategory, "Running").unwrap();

        store.set_filter(FilterKey::Brand, "Adidas").unwrap();
        let ui = store.ui_filters();
        assert_eq!(ui.get(FilterKey::Department), Some("Ropa"));
        assert_eq!(ui.get(FilterKey::Brand), Some("Adidas"));
        assert_eq!(ui.get(FilterKey::Category), None);
        assert_eq!(ui.get(FilterKey::Subcategory), None);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut store = FilterStore::new();
        let r1 = store.set_filter(FilterKey::Department, "A").unwrap();
        let r2 = store.set_filter(FilterKey::Department, "B").unwrap();

        // R2's response arrives first and wins.
        assert!(store.resolve_taxonomy(&r2, Ok(taxonomy_with_brands(&["b-brand"]))));
        // R1's late response must not overwrite.
        assert!(!store.resolve_taxonomy(&r1, Ok(taxonomy_with_brands(&["a-brand"]))));

        assert_eq!(store.taxonomy().brands, vec!["b-brand".to_string()]);
        assert!(!store.taxonomy_loading());
    }

    #[test]
    fn test_stale_response_does_not_clear_loading() {
        let mut store = FilterStore::new();
        let r1 = store.set_filter(FilterKey::Department, "A").unwrap();
        let _r2 = store.set_filter(FilterKey::Department, "B").unwrap();

        store.resolve_taxonomy(&r1, Ok(Taxonomy::empty()));
        // r2 is still outstanding.
        assert!(store.taxonomy_loading());
    }

    #[test]
    fn test_failed_fetch_resets_taxonomy() {
        let mut store = FilterStore::new();
        let r1 = store.set_filter(FilterKey::Department, "A").unwrap();
        store.resolve_taxonomy(&r1, Ok(taxonomy_with_brands(&["x"])));

        let r2 = store.set_filter(FilterKey::Department, "B").unwrap();
        store.resolve_taxonomy(&r2, Err(ApiError::Timeout));

        assert!(store.taxonomy().is_empty());
        assert!(!store.taxonomy_loading());
    }

    #[test]
    fn test_apply_snapshots_non_empty_filters() {
        let mut store = FilterStore::new();
        store.set_filter(FilterKey::Department, "Fragancias").unwrap();
        let applied = store.apply();
        assert_eq!(applied.get(FilterKey::Department), Some("Fragancias"));
        assert_eq!(store.active_filters(), &applied);
    }

    #[test]
    fn test_clear_all_unscopes_request() {
        let mut store = FilterStore::new();
        store.set_filter(FilterKey::Department, "Fragancias").unwrap();
        let request = store.clear_all();
        assert!(request.scope().is_empty());
        assert!(store.ui_filters().is_empty());
    }

    #[test]
    fn test_resolve_after_reset_is_discarded() {
        let mut store = FilterStore::new();
        let r = store.set_filter(FilterKey::Department, "A").unwrap();
        // Listing view torn down with the taxonomy fetch still in flight.
        store.reset();

        assert!(!store.resolve_taxonomy(&r, Ok(taxonomy_with_brands(&["old"]))));
        assert!(store.taxonomy().is_empty());
        assert!(!store.taxonomy_loading());
    }

    #[test]
    fn test_reset_invalidates_in_flight_request() {
        let mut store = FilterStore::new();
        let r1 = store.set_filter(FilterKey::Department, "A").unwrap();
        store.reset();
        let r2 = store.set_filter(FilterKey::Department, "B").unwrap();

        assert!(!store.resolve_taxonomy(&r1, Ok(taxonomy_with_brands(&["old"]))));
        assert!(store.resolve_taxonomy(&r2, Ok(taxonomy_with_brands(&["new"]))));
        assert_eq!(store.taxonomy().brands, vec!["new".to_string()]);
    }
}
