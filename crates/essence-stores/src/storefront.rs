//! Async facade driving the stores against the backend.

use crate::cart::CartStore;
use crate::error::StoreError;
use crate::filter::{FilterStore, TaxonomyRequest};
use crate::products::ProductListStore;
use essence_api::{ApiError, Session, StorefrontApi, StorefrontConfig};
use essence_commerce::catalog::Product;
use essence_commerce::checkout::Order;
use essence_commerce::error::CommerceError;
use essence_commerce::filters::FilterKey;
use essence_commerce::ids::ProductId;
use std::sync::Arc;

/// The storefront client the view layer talks to.
///
/// Owns the three stores, the injected API client, and the optional
/// session. All operations swallow their failures into store-local error
/// state (plus a tracing event) and leave the stores at their last
/// known-good value; [`Storefront::place_order`] is the one operation
/// that returns its result, because the view needs the order record for
/// the agent handoff.
pub struct Storefront {
    api: Arc<dyn StorefrontApi>,
    session: Option<Session>,
    filters: FilterStore,
    products: ProductListStore,
    cart: CartStore,
    on_listing_view: bool,
}

impl Storefront {
    /// Create a storefront over an API client.
    pub fn new(api: Arc<dyn StorefrontApi>, config: &StorefrontConfig) -> Self {
        Self {
            api,
            session: None,
            filters: FilterStore::new(),
            products: ProductListStore::new(config.page_size),
            cart: CartStore::new(),
            on_listing_view: false,
        }
    }

    /// Attach a session at construction time.
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    pub fn filters(&self) -> &FilterStore {
        &self.filters
    }

    pub fn products(&self) -> &ProductListStore {
        &self.products
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Whether the listing view should be (or is) shown.
    pub fn on_listing_view(&self) -> bool {
        self.on_listing_view
    }

    /// Begin an authenticated session and sync the cart to server truth.
    pub async fn sign_in(&mut self, session: Session) {
        self.session = Some(session);
        self.refresh_cart().await;
    }

    /// Drop the session and the locally held cart.
    pub fn sign_out(&mut self) {
        self.session = None;
        self.cart.clear_local();
    }

    /// Enter the listing view: unscoped taxonomy plus the unfiltered
    /// first page.
    pub async fn enter_listing(&mut self) {
        self.on_listing_view = true;
        self.clear_all_filters().await;
    }

    /// Leave the listing view, resetting filter and product state.
    pub fn leave_listing(&mut self) {
        self.on_listing_view = false;
        self.filters.reset();
        self.products.reset();
    }

    /// Select a value for one filter dimension.
    ///
    /// Narrows the taxonomy to the new selection. Selecting the empty
    /// value ("all") additionally triggers a search — the two effects
    /// are distinct store operations, sequenced here rather than baked
    /// into the filter store.
    pub async fn set_filter(&mut self, key: FilterKey, value: &str) {
        let Some(request) = self.filters.set_filter(key, value) else {
            return;
        };
        let cleared = value.is_empty();
        self.fetch_taxonomy(request).await;
        if cleared {
            self.run_search().await;
        }
    }

    /// Clear one filter dimension and re-run the search.
    pub async fn clear_filter(&mut self, key: FilterKey) {
        if let Some(request) = self.filters.clear_filter(key) {
            self.fetch_taxonomy(request).await;
        }
        self.run_search().await;
    }

    /// Clear every filter, refetch the unscoped taxonomy, and search the
    /// full catalog.
    pub async fn clear_all_filters(&mut self) {
        let request = self.filters.clear_all();
        self.fetch_taxonomy(request).await;
        self.run_search().await;
    }

    /// Explicit "Search" action: apply the UI selection and fetch page 1.
    ///
    /// No-op while a taxonomy or product fetch is outstanding, to prevent
    /// overlapping search dispatch. Returns whether a search was run.
    pub async fn apply_filters(&mut self) -> bool {
        if self.filters.taxonomy_loading() || self.products.loading() {
            tracing::debug!("fetch outstanding; apply ignored");
            return false;
        }
        self.run_search().await;
        true
    }

    /// Fetch the next page of the current search and append it.
    pub async fn load_more(&mut self) {
        let Some(request) = self.products.load_more() else {
            return;
        };
        let result = self
            .api
            .fetch_products(
                self.session.as_ref(),
                request.filters(),
                request.page(),
                request.limit(),
            )
            .await;
        self.products.resolve_page(&request, result);
    }

    /// Sync the cart to server truth. Without a session the cart is
    /// emptied locally and no request is made.
    pub async fn refresh_cart(&mut self) {
        let Some(session) = self.session.clone() else {
            self.cart.clear_local();
            return;
        };
        let Some(request) = self.cart.begin() else {
            return;
        };
        let result = self.api.fetch_cart(&session).await;
        self.cart.resolve_items(&request, result);
    }

    /// Add a product to the cart at its current price, then re-sync.
    ///
    /// The stock pre-check is advisory; the server may still reject.
    pub async fn add_to_cart(&mut self, product: &Product, quantity: i64) {
        let Some(session) = self.session.clone() else {
            self.cart.reject(&ApiError::Unauthenticated);
            return;
        };
        if let Err(error) = product.can_order(quantity) {
            self.cart.reject(&error);
            return;
        }
        if !product.price.is_positive() {
            self.cart
                .reject(&CommerceError::InvalidPrice(product.price.amount_cents));
            return;
        }
        let Some(request) = self.cart.begin() else {
            return;
        };
        match self
            .api
            .add_cart_item(&session, &product.id, quantity, product.price)
            .await
        {
            Ok(()) => {
                let result = self.api.fetch_cart(&session).await;
                self.cart.resolve_items(&request, result);
            }
            Err(error) => self.cart.fail(&request, &error),
        }
    }

    /// Change a line's quantity, then re-sync.
    ///
    /// Quantity 0 is rejected locally; removing a line is the explicit
    /// [`Storefront::remove_item`] operation.
    pub async fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if quantity < 1 {
            self.cart.reject(&CommerceError::InvalidQuantity(quantity));
            return;
        }
        let Some(session) = self.session.clone() else {
            self.cart.reject(&ApiError::Unauthenticated);
            return;
        };
        let Some(request) = self.cart.begin() else {
            return;
        };
        match self
            .api
            .update_cart_quantity(&session, product_id, quantity)
            .await
        {
            Ok(()) => {
                let result = self.api.fetch_cart(&session).await;
                self.cart.resolve_items(&request, result);
            }
            Err(error) => self.cart.fail(&request, &error),
        }
    }

    /// Remove a line, then re-sync.
    pub async fn remove_item(&mut self, product_id: &ProductId) {
        let Some(session) = self.session.clone() else {
            self.cart.reject(&ApiError::Unauthenticated);
            return;
        };
        let Some(request) = self.cart.begin() else {
            return;
        };
        match self.api.remove_cart_item(&session, product_id).await {
            Ok(()) => {
                let result = self.api.fetch_cart(&session).await;
                self.cart.resolve_items(&request, result);
            }
            Err(error) => self.cart.fail(&request, &error),
        }
    }

    /// Place the order and return the server-assigned record.
    ///
    /// Validations run before any network call. On success the local
    /// cart is cleared; the returned order feeds the view's order
    /// summary.
    pub async fn place_order(&mut self, agent_contact: &str) -> Result<Order, StoreError> {
        let Some(session) = self.session.clone() else {
            return Err(StoreError::Api(ApiError::Unauthenticated));
        };
        if self.cart.is_empty() {
            return Err(CommerceError::EmptyCart.into());
        }
        if agent_contact.trim().is_empty() {
            return Err(CommerceError::MissingAgentContact.into());
        }
        let Some(request) = self.cart.begin() else {
            return Err(StoreError::Busy);
        };
        match self
            .api
            .place_order(&session, self.cart.items(), agent_contact)
            .await
        {
            Ok(order) => {
                self.cart.complete_order(&request);
                Ok(order)
            }
            Err(error) => {
                self.cart.fail(&request, &error);
                Err(error.into())
            }
        }
    }

    async fn fetch_taxonomy(&mut self, request: TaxonomyRequest) {
        let result = self
            .api
            .fetch_taxonomy(self.session.as_ref(), request.scope())
            .await;
        self.filters.resolve_taxonomy(&request, result);
    }

    /// Apply the UI filters and fetch page 1. Navigates to the listing
    /// view when the applied set is non-trivial.
    async fn run_search(&mut self) {
        let active = self.filters.apply();
        if !active.is_empty() {
            self.on_listing_view = true;
        }
        let Some(request) = self.products.begin_fetch(active, 1) else {
            return;
        };
        let result = self
            .api
            .fetch_products(
                self.session.as_ref(),
                request.filters(),
                request.page(),
                request.limit(),
            )
            .await;
        self.products.resolve_page(&request, result);
    }
}
