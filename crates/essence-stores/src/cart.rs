//! Server-authoritative cart state machine.

use essence_api::ApiError;
use essence_commerce::cart::{cart_total, CartLine};
use essence_commerce::error::CommerceError;
use essence_commerce::money::Money;

/// Ticket for an in-flight cart request (fetch or mutation cycle).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRequest {
    generation: u64,
}

/// Holds the cart lines as last read from the server.
///
/// There are no optimistic updates: the invariant is that `items` always
/// mirror the last successful server read. A mutation cycle is "send the
/// mutation, then refetch the authoritative cart", and the whole cycle
/// holds the single `loading` lock.
#[derive(Debug, Default)]
pub struct CartStore {
    items: Vec<CartLine>,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cart lines from the last successful server read.
    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    /// Whether a cart request is outstanding.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Last failure, if any (validation or remote).
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|l| l.quantity).sum()
    }

    /// Cart total across lines.
    pub fn total(&self) -> Result<Money, CommerceError> {
        cart_total(&self.items)
    }

    /// Look up a line by product.
    pub fn line(&self, product_id: &essence_commerce::ids::ProductId) -> Option<&CartLine> {
        self.items.iter().find(|l| &l.product_id == product_id)
    }

    /// Start a cart request (fetch or mutation cycle).
    ///
    /// Returns `None` while another cart request is outstanding.
    pub fn begin(&mut self) -> Option<CartRequest> {
        if self.loading {
            tracing::debug!("cart request already in flight; rejected");
            return None;
        }
        self.loading = true;
        self.error = None;
        self.generation += 1;
        Some(CartRequest {
            generation: self.generation,
        })
    }

    /// Apply the authoritative cart read that ends a request cycle.
    ///
    /// On success `items` are fully replaced (never merged); on failure
    /// they are left at the last-known-good value.
    ///
    /// Returns whether the response was applied.
    pub fn resolve_items(
        &mut self,
        request: &CartRequest,
        result: Result<Vec<CartLine>, ApiError>,
    ) -> bool {
        if request.generation != self.generation {
            tracing::debug!(
                stale = request.generation,
                current = self.generation,
                "discarding superseded cart response"
            );
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(error) => {
                tracing::warn!(%error, "cart fetch failed");
                self.error = Some(error.to_string());
            }
        }
        true
    }

    /// Record a failed mutation, ending the request cycle with items
    /// unchanged.
    pub fn fail(&mut self, request: &CartRequest, error: &ApiError) {
        if request.generation != self.generation {
            return;
        }
        tracing::warn!(%error, "cart mutation failed");
        self.loading = false;
        self.error = Some(error.to_string());
    }

    /// Record a precondition failure (no request was made).
    pub fn reject(&mut self, error: &dyn std::fmt::Display) {
        tracing::warn!(%error, "cart mutation rejected locally");
        self.error = Some(error.to_string());
    }

    /// Empty the cart locally: used when there is no session to fetch
    /// for, and after a successfully placed order. Advances the
    /// generation so a response still in flight (e.g., issued before
    /// sign-out) resolves against an outdated ticket and is discarded.
    pub fn clear_local(&mut self) {
        self.items.clear();
        self.error = None;
        self.loading = false;
        self.generation += 1;
    }

    /// End a request cycle after a successful order, clearing the cart.
    pub fn complete_order(&mut self, request: &CartRequest) {
        if request.generation != self.generation {
            return;
        }
        self.loading = false;
        self.clear_local();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use essence_commerce::ids::ProductId;
    use essence_commerce::money::Currency;

    fn line(id: &str, quantity: i64) -> CartLine {
        CartLine::new(
            ProductId::new(id),
            "Perfume",
            format!("SKU-{id}"),
            quantity,
            Money::new(1000, Currency::MXN),
        )
        .unwrap()
    }

    #[test]
    fn test_fetch_replaces_items() {
        let mut store = CartStore::new();
        let r = store.begin().unwrap();
        store.resolve_items(&r, Ok(vec![line("p1", 2)]));

        assert_eq!(store.item_count(), 2);
        assert_eq!(store.total().unwrap().amount_cents, 2000);
    }

    #[test]
    fn test_overlapping_request_rejected() {
        let mut store = CartStore::new();
        let _r = store.begin().unwrap();
        assert!(store.begin().is_none());
    }

    #[test]
    fn test_failure_preserves_items() {
        let mut store = CartStore::new();
        let r1 = store.begin().unwrap();
        store.resolve_items(&r1, Ok(vec![line("p1", 1)]));

        let r2 = store.begin().unwrap();
        store.fail(&r2, &ApiError::Remote {
            status: 409,
            message: "Stock insuficiente".into(),
        });

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.error(), Some("Stock insuficiente"));
        assert!(!store.loading());
    }

    #[test]
    fn test_local_rejection_sets_error_without_request() {
        let mut store = CartStore::new();
        store.reject(&CommerceError::InvalidQuantity(0));
        assert!(store.error().unwrap().contains("Invalid quantity"));
        assert!(!store.loading());
    }

    #[test]
    fn test_complete_order_clears_cart() {
        let mut store = CartStore::new();
        let r1 = store.begin().unwrap();
        store.resolve_items(&r1, Ok(vec![line("p1", 1)]));

        let r2 = store.begin().unwrap();
        store.complete_order(&r2);

        assert!(store.is_empty());
        assert!(!store.loading());
        assert!(store.error().is_none());
    }

    #[test]
    fn test_stale_cart_response_discarded() {
        let mut store = CartStore::new();
        let r1 = store.begin().unwrap();
        store.resolve_items(&r1, Ok(vec![line("p1", 1)]));
        let r2 = store.begin().unwrap();

        assert!(!store.resolve_items(&r1, Ok(vec![line("old", 9)])));
        assert!(store.resolve_items(&r2, Ok(vec![line("p2", 1)])));
        assert_eq!(store.items()[0].product_id.as_str(), "p2");
    }

    #[test]
    fn test_resolve_after_clear_local_is_discarded() {
        let mut store = CartStore::new();
        let r = store.begin().unwrap();
        // Sign-out while the cart fetch is still in flight.
        store.clear_local();

        assert!(!store.resolve_items(&r, Ok(vec![line("p1", 3)])));
        assert!(store.is_empty());
        assert!(!store.loading());
    }

    #[test]
    fn test_line_lookup() {
        let mut store = CartStore::new();
        let r = store.begin().unwrap();
        store.resolve_items(&r, Ok(vec![line("p1", 2)]));
        assert!(store.line(&ProductId::new("p1")).is_some());
        assert!(store.line(&ProductId::new("p2")).is_none());
    }
}
