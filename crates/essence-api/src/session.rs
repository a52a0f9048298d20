//! Authenticated session credential.

use serde::{Deserialize, Serialize};

/// A bearer credential for an authenticated customer session.
///
/// Injected explicitly into the storefront facade at construction rather
/// than read from ambient state, so stores stay independently testable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    token: String,
    /// Display name of the signed-in customer, if known.
    pub customer_name: Option<String>,
}

impl Session {
    /// Create a session from a bearer token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            customer_name: None,
        }
    }

    /// Attach the customer's display name.
    pub fn with_customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self
    }

    /// The bearer token to send on requests.
    pub fn token(&self) -> &str {
        &self.token
    }
}
