//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Discounts make it worse:                                               │
//! │    15% of $0.99 = $0.1485 → integer cents can't hold it                │
//! │                                                                         │
//! │  OUR SOLUTION: exact base-10 decimals                                  │
//! │    0.99 × 0.15 = 0.1485 exactly, carried through every sum             │
//! │    Rounded to $0.15 only when shown to the user                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopcart_core::money::Money;
//!
//! // Create from cents or parse from user input
//! let price = Money::from_cents(1099); // $10.99
//! let parsed: Money = "10.99".parse().unwrap();
//! assert_eq!(price, parsed);
//!
//! // Arithmetic operations
//! let total = price + Money::from_cents(500); // $15.99
//! assert_eq!(total.to_string(), "$15.99");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

use crate::error::ValidationError;
use crate::types::DiscountRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in major currency units (dollars for USD).
///
/// ## Design Decisions
/// - **Decimal (signed)**: exact; negative values are representable so
///   subtraction is total, validation rejects them at the edges
/// - **Single field tuple struct**: Zero-cost abstraction over `Decimal`
/// - **No rounding in arithmetic**: only [`Money::rounded`] and `Display` round
///
/// ## Where Money is Used
/// ```text
/// Product.price ──┬──► Discount::calculate_discount ──► CartLine.discounted_price
///                 │
///                 └──► Cart::subtotal
///
/// Cart::calculate_total_price ──► Order::total_price ──► PaymentMethod::pay
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Wraps an exact decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.to_string(), "$10.99");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Returns the exact decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns `rate` of this amount, unrounded.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::money::Money;
    /// use shopcart_core::types::DiscountRate;
    /// use rust_decimal::Decimal;
    ///
    /// let price = Money::from_cents(99); // $0.99
    /// let part = price.percentage(DiscountRate::from_bps(1500)); // 15%
    /// assert_eq!(part.amount(), Decimal::new(1485, 4)); // $0.1485
    /// ```
    pub fn percentage(&self, rate: DiscountRate) -> Money {
        Money(self.0 * rate.as_fraction())
    }

    /// Rounds to `dp` decimal places, half away from zero.
    ///
    /// Only the presentation layer should call this; every computation in
    /// this crate keeps full precision.
    pub fn rounded(&self, dp: u32) -> Money {
        Money(
            self.0
                .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money rounded to cents, e.g. `$942.50` or `-$5.50`.
///
/// The CLI uses `ConfigState::format_currency` when it needs another symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.rounded(2);
        let sign = if rounded.is_negative() { "-" } else { "" };
        write!(f, "{}${:.2}", sign, rounded.0.abs())
    }
}

/// Parses a plain decimal amount such as `"19.99"` or `"1000"`.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim())
            .map(Money)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "price".to_string(),
                reason: format!("'{}' is not a decimal amount", s.trim()),
            })
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.amount(), Decimal::new(1099, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_display_rounds_half_away_from_zero() {
        // 0.125 would become 0.12 under bankers rounding
        let money = Money::new(Decimal::new(125, 3));
        assert_eq!(money.to_string(), "$0.13");
    }

    #[test]
    fn test_display_sign_follows_rounded_value() {
        assert_eq!(Money::new(Decimal::new(-1, 3)).to_string(), "$0.00");
        assert_eq!(Money::new(Decimal::new(-5, 3)).to_string(), "-$0.01");
    }

    #[test]
    fn test_parse() {
        let money: Money = "942.5".parse().unwrap();
        assert_eq!(money, Money::from_cents(94250));

        let money: Money = " 1000 ".parse().unwrap();
        assert_eq!(money, Money::from_cents(100_000));

        assert!("ten dollars".parse::<Money>().is_err());
        assert!("".parse::<Money>().is_err());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a + b, Money::from_cents(1500));
        assert_eq!(a - b, Money::from_cents(500));

        let mut c = a;
        c += b;
        c -= Money::from_cents(250);
        assert_eq!(c, Money::from_cents(1250));
    }

    #[test]
    fn test_sum() {
        let amounts = [Money::from_cents(90000), Money::from_cents(4250)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total, Money::from_cents(94250));

        let empty: Vec<Money> = Vec::new();
        assert!(empty.into_iter().sum::<Money>().is_zero());
    }

    #[test]
    fn test_percentage_keeps_precision() {
        let price = Money::from_cents(99);
        let part = price.percentage(DiscountRate::from_bps(1500));
        assert_eq!(part.amount(), Decimal::new(1485, 4));
        assert_eq!(part.rounded(2), Money::from_cents(15));
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
        assert!(!negative.is_positive());
    }
}
