//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues. The backend speaks decimal amounts on the wire
//! (`priceAtSale: 1499.90`), so conversions in both directions are
//! provided.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    MXN,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "MXN").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::MXN => "MXN",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::MXN => "$",
            Currency::USD => "US$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "MXN" => Some(Currency::MXN),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in cents. Arithmetic is checked: mismatched
/// currencies and overflow yield `None` from the `try_*` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount as it appears on the wire.
    ///
    /// ```
    /// use essence_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(1499.90, Currency::MXN);
    /// assert_eq!(price.amount_cents, 149990);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        Self::new((amount * 100.0).round() as i64, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.amount_cents > 0
    }

    /// Convert to a decimal value for the wire.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Format as a display string (e.g., "$1,499.90" without grouping).
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency.symbol(), self.to_decimal())
    }

    /// Try to add another Money value.
    ///
    /// Returns `None` if currencies differ or the addition overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount_cents.checked_add(other.amount_cents)?;
        Some(Money::new(amount, self.currency))
    }

    /// Try to multiply by a scalar, returning `None` on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        let amount = self.amount_cents.checked_mul(factor)?;
        Some(Money::new(amount, self.currency))
    }

    /// Sum an iterator of Money values with overflow and currency checks.
    pub fn try_sum<'a>(
        mut iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Result<Money, CommerceError> {
        iter.try_fold(Money::zero(currency), |acc, m| {
            if m.currency != currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: currency.code().to_string(),
                    got: m.currency.code().to_string(),
                });
            }
            acc.try_add(m).ok_or(CommerceError::Overflow)
        })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::MXN);
        assert_eq!(m.amount_cents, 4999);
    }

    #[test]
    fn test_money_to_decimal() {
        let m = Money::new(4999, Currency::MXN);
        assert!((m.to_decimal() - 49.99).abs() < 0.001);
    }

    #[test]
    fn test_money_display() {
        let m = Money::new(149990, Currency::MXN);
        assert_eq!(m.display(), "$1499.90");
    }

    #[test]
    fn test_try_add() {
        let a = Money::new(1000, Currency::MXN);
        let b = Money::new(500, Currency::MXN);
        assert_eq!(a.try_add(&b).unwrap().amount_cents, 1500);
    }

    #[test]
    fn test_try_add_currency_mismatch() {
        let a = Money::new(1000, Currency::MXN);
        let b = Money::new(500, Currency::USD);
        assert!(a.try_add(&b).is_none());
    }

    #[test]
    fn test_try_multiply_overflow() {
        let m = Money::new(i64::MAX, Currency::MXN);
        assert!(m.try_multiply(2).is_none());
    }

    #[test]
    fn test_try_sum() {
        let values = [
            Money::new(1000, Currency::MXN),
            Money::new(2500, Currency::MXN),
        ];
        let sum = Money::try_sum(values.iter(), Currency::MXN).unwrap();
        assert_eq!(sum.amount_cents, 3500);
    }

    #[test]
    fn test_try_sum_mixed_currency() {
        let values = [
            Money::new(1000, Currency::MXN),
            Money::new(2500, Currency::USD),
        ];
        assert!(matches!(
            Money::try_sum(values.iter(), Currency::MXN),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("mxn"), Some(Currency::MXN));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
