//! Backend API contract and HTTP client for Essence.
//!
//! The storefront consumes a remote REST backend; this crate pins down
//! that contract as the [`StorefrontApi`] trait, the camelCase wire types
//! behind it, and [`HttpStorefrontApi`], the `reqwest`-backed
//! implementation. Stores depend only on the trait, so tests can swap in
//! a scripted mock.

mod client;
mod config;
mod error;
mod session;
mod types;

pub use client::{HttpStorefrontApi, StorefrontApi};
pub use config::{ConfigError, StorefrontConfig};
pub use error::ApiError;
pub use session::Session;
