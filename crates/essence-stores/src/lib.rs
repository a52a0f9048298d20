//! Filter, product-list, and cart state machines for Essence.
//!
//! This is the synchronization core of the storefront: it keeps
//! UI-selected filters, the server-held taxonomy, the paginated product
//! list, and the server-authoritative cart consistent under interleaved
//! user edits and asynchronous network responses.
//!
//! The stores themselves are pure reducers. Every operation that needs
//! the network hands back a typed request ticket carrying a generation
//! number; the matching `resolve_*` call applies the response only if no
//! newer request of the same kind has been issued since (last-issued-wins,
//! regardless of response arrival order). `loading` flags act as coarse
//! re-entrancy locks: while a fetch of one kind is outstanding, new
//! fetches of the same kind are rejected rather than queued.
//!
//! [`Storefront`] is the async facade the view layer talks to: it owns
//! the injected [`StorefrontApi`](essence_api::StorefrontApi) client and
//! optional session, drives the reducers, and swallows fetch failures
//! into per-store error state (only `place_order` returns its result to
//! the caller).

mod cart;
mod error;
mod filter;
mod products;
mod storefront;

pub use cart::{CartRequest, CartStore};
pub use error::StoreError;
pub use filter::{FilterStore, TaxonomyRequest};
pub use products::{PageRequest, ProductListStore};
pub use storefront::Storefront;
