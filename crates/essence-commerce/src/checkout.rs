//! Placed-order records.

use crate::cart::CartLine;
use crate::ids::OrderId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// An order as confirmed by the backend.
///
/// Returned from `place_order` so the view layer can build a
/// human-readable summary for the sales-agent handoff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Server-assigned order identifier.
    pub id: OrderId,
    /// Snapshot of the lines that were ordered.
    pub items: Vec<CartLine>,
    /// Order total as computed by the backend.
    pub total: Money,
    /// Contact handle of the agent the order was routed to.
    pub agent_contact: String,
    /// Unix timestamp the backend recorded for the order.
    pub created_at: i64,
}

impl Order {
    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|l| l.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;
    use crate::money::Currency;

    #[test]
    fn test_item_count() {
        let order = Order {
            id: OrderId::new("order-1"),
            items: vec![
                CartLine::new(
                    ProductId::new("p1"),
                    "A",
                    "A-1",
                    2,
                    Money::new(1000, Currency::MXN),
                )
                .unwrap(),
                CartLine::new(
                    ProductId::new("p2"),
                    "B",
                    "B-1",
                    1,
                    Money::new(2000, Currency::MXN),
                )
                .unwrap(),
            ],
            total: Money::new(4000, Currency::MXN),
            agent_contact: "+52 555 000 0000".into(),
            created_at: 0,
        };
        assert_eq!(order.item_count(), 3);
    }
}
