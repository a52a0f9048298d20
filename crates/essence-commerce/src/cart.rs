//! Cart line types and totals.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// One product entry in the shopping cart.
///
/// `price_at_sale` is frozen at the time the line was added; later catalog
/// price changes do not affect it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product this line refers to.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Merchant SKU code.
    pub code: String,
    /// Quantity, always at least 1.
    pub quantity: i64,
    /// Unit price frozen at add-time.
    pub price_at_sale: Money,
}

impl CartLine {
    /// Create a validated cart line.
    pub fn new(
        product_id: ProductId,
        name: impl Into<String>,
        code: impl Into<String>,
        quantity: i64,
        price_at_sale: Money,
    ) -> Result<Self, CommerceError> {
        if quantity < 1 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if !price_at_sale.is_positive() {
            return Err(CommerceError::InvalidPrice(price_at_sale.amount_cents));
        }
        Ok(Self {
            product_id,
            name: name.into(),
            code: code.into(),
            quantity,
            price_at_sale,
        })
    }

    /// Line total (`quantity * price_at_sale`), overflow-checked.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.price_at_sale
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

/// Sum of line totals across the cart.
pub fn cart_total(lines: &[CartLine]) -> Result<Money, CommerceError> {
    let currency = lines
        .first()
        .map(|l| l.price_at_sale.currency)
        .unwrap_or(Currency::default());
    let totals = lines
        .iter()
        .map(CartLine::line_total)
        .collect::<Result<Vec<_>, _>>()?;
    Money::try_sum(totals.iter(), currency)
}
