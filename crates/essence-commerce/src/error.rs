//! Commerce error types.

use thiserror::Error;

/// Errors raised by local storefront validation and arithmetic.
///
/// These are all rejected before any network call is made; remote failures
/// are a separate concern (see the API crate).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Quantity must be at least 1.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Price must be positive.
    #[error("Invalid price: {0} cents")]
    InvalidPrice(i64),

    /// Requested quantity exceeds the last known stock count.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: String,
        requested: i64,
        available: i64,
    },

    /// Order placed with an empty cart.
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,

    /// Order placed without an agent contact.
    #[error("Missing agent contact for order")]
    MissingAgentContact,

    /// Currency mismatch in money arithmetic.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow in a money calculation.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}
