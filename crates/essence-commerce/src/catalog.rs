//! Product catalog types.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A catalog product as the backend reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Merchant SKU code.
    pub code: String,
    /// Brand name.
    pub brand: String,
    /// Department (broadest classification).
    pub department: String,
    /// Category within the department.
    pub category: String,
    /// Subcategory within the category.
    pub subcategory: String,
    /// Current list price.
    pub price: Money,
    /// Server-reported stock count at fetch time.
    pub stock: i64,
    /// Primary image URL.
    pub image_url: Option<String>,
    /// Long description.
    pub description: Option<String>,
}

impl Product {
    /// Check if the product has any stock at all.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Advisory pre-check that `quantity` can be ordered.
    ///
    /// The server remains the enforcement point; this only rejects
    /// requests that are certain to fail against the last known stock
    /// count.
    pub fn can_order(&self, quantity: i64) -> Result<(), CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if quantity > self.stock {
            return Err(CommerceError::InsufficientStock {
                product_id: self.id.to_string(),
                requested: quantity,
                available: self.stock,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn perfume(stock: i64) -> Product {
        Product {
            id: ProductId::new("prod-1"),
            name: "Sauvage".into(),
            code: "DIOR-100".into(),
            brand: "Dior".into(),
            department: "Fragancias".into(),
            category: "Eau de Parfum".into(),
            subcategory: "Hombre".into(),
            price: Money::new(249900, Currency::MXN),
            stock,
            image_url: None,
            description: None,
        }
    }

    #[test]
    fn test_can_order_within_stock() {
        assert!(perfume(5).can_order(3).is_ok());
    }

    #[test]
    fn test_can_order_rejects_over_stock() {
        assert!(matches!(
            perfume(2).can_order(3),
            Err(CommerceError::InsufficientStock { requested: 3, available: 2, .. })
        ));
    }

    #[test]
    fn test_can_order_rejects_non_positive() {
        assert!(matches!(
            perfume(2).can_order(0),
            Err(CommerceError::InvalidQuantity(0))
        ));
    }

    #[test]
    fn test_in_stock() {
        assert!(perfume(1).in_stock());
        assert!(!perfume(0).in_stock());
    }
}
