//! Storefront domain types and logic for Essence.
//!
//! This crate provides the pure (network-free) types the storefront client
//! is built on:
//!
//! - **Catalog**: products and paginated product pages
//! - **Filters**: the department/brand/category/subcategory selector with
//!   its cascading-reset rule, and the server-computed taxonomy of
//!   still-reachable option values
//! - **Cart**: cart lines with prices frozen at add-time and checked totals
//! - **Checkout**: placed-order records
//!
//! # Example
//!
//! ```
//! use essence_commerce::prelude::*;
//!
//! let mut filters = FilterSet::new();
//! filters.set(FilterKey::Department, "Fragancias");
//! filters.set(FilterKey::Brand, "Dior");
//!
//! // Changing a higher-ranked dimension clears everything below it.
//! filters.set(FilterKey::Department, "Cuidado Personal");
//! assert_eq!(filters.get(FilterKey::Brand), None);
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod filters;
pub mod ids;
pub mod money;
pub mod page;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    pub use crate::cart::{cart_total, CartLine};
    pub use crate::catalog::Product;
    pub use crate::checkout::Order;
    pub use crate::filters::{FilterKey, FilterSet, Taxonomy};
    pub use crate::page::{Pagination, ProductPage};
}
