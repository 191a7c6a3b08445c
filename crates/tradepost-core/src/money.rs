//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    12.5 * 4 + 8.0 = 58 (fine)   0.1 + 0.2 = 0.30000000000000004 (not)  │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    1250 cents × 4 + 800 cents = 5800 cents = $58.00, always             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tradepost_core::money::Money;
//!
//! let price = Money::from_cents(1250); // $12.50
//! let line_total = price.multiply_quantity(4);
//! assert_eq!(line_total.cents(), 5000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: the type itself allows negatives; the cart clamps
///   selected prices at zero
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serialized as a bare integer**: `{"selectedPrice": 1250}`
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product.price.min ──► CartLineItem.selected_price ──► line total      │
/// │                                                              │          │
/// │                                     CartState::total_price ◄─┘          │
/// │                                                                         │
/// │  QuoteRequest.target_price (optional, buyer's wish)                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tradepost_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use tradepost_core::money::Money;
    ///
    /// let price = Money::from_major_minor(12, 50); // $12.50
    /// assert_eq!(price.cents(), 1250);
    ///
    /// let negative = Money::from_major_minor(-5, 50);
    /// assert_eq!(negative.cents(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Clamps negative amounts to zero.
    ///
    /// ## Example
    /// ```rust
    /// use tradepost_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(-1).non_negative(), Money::zero());
    /// assert_eq!(Money::from_cents(890).non_negative().cents(), 890);
    /// ```
    #[inline]
    pub const fn non_negative(self) -> Self {
        if self.0 < 0 {
            Money(0)
        } else {
            self
        }
    }

    /// Multiplies money by a quantity.
    ///
    /// Saturates at the i64 bounds instead of overflowing, so cart totals
    /// stay defined for any quantity a caller manages to push in.
    ///
    /// ## Example
    /// ```rust
    /// use tradepost_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1250); // $12.50
    /// let line_total = unit_price.multiply_quantity(4);
    /// assert_eq!(line_total.cents(), 5000); // $50.00
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Adds two amounts, saturating at the i64 bounds.
    #[inline]
    pub const fn saturating_add(self, other: Money) -> Self {
        Money(self.0.saturating_add(other.0))
    }

    /// Subtracts `other`, saturating at the i64 bounds.
    #[inline]
    pub const fn saturating_sub(self, other: Money) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and debugging. The storefront formats with the
/// configured currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Arithmetic operators saturate like [`Money::multiply_quantity`].
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = self.saturating_add(other);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        self.saturating_sub(other)
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

/// Summing line totals. Saturating, like [`Money::multiply_quantity`].
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Money::saturating_add)
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
        let money = Money::from_cents(1250);
        assert_eq!(money.cents(), 1250);
        assert_eq!(money.dollars(), 12);
        assert_eq!(money.cents_part(), 50);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(8, 0).cents(), 800);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(5800)), "$58.00");
        assert_eq!(format!("{}", Money::from_cents(890)), "$8.90");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);
    }

    #[test]
    fn test_multiply_quantity_saturates() {
        let price = Money::from_cents(i64::MAX / 2);
        assert_eq!(price.multiply_quantity(3).cents(), i64::MAX);
        assert_eq!(price.multiply_quantity(-3).cents(), i64::MIN);
    }

    #[test]
    fn test_operators_saturate() {
        let near_max = Money::from_cents(i64::MAX - 10);
        assert_eq!((near_max + Money::from_cents(100)).cents(), i64::MAX);

        let mut total = near_max;
        total += Money::from_cents(100);
        assert_eq!(total.cents(), i64::MAX);

        let near_min = Money::from_cents(i64::MIN + 10);
        assert_eq!((near_min - Money::from_cents(100)).cents(), i64::MIN);
        assert_eq!(
            (Money::from_cents(500) - Money::from_cents(200)).cents(),
            300
        );
    }

    #[test]
    fn test_sum_of_line_totals() {
        // 12.50 × 4 + 8.00 × 1 = 58.00
        let total: Money = [
            Money::from_cents(1250).multiply_quantity(4),
            Money::from_cents(800).multiply_quantity(1),
        ]
        .into_iter()
        .sum();
        assert_eq!(total, Money::from_cents(5800));
    }

    #[test]
    fn test_zero_and_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_cents(100).is_positive());
        assert!(Money::from_cents(-100).is_negative());
        assert_eq!(Money::from_cents(-100).non_negative(), Money::zero());
    }

    #[test]
    fn test_serializes_as_bare_integer() {
        let json = serde_json::to_string(&Money::from_cents(1250)).unwrap();
        assert_eq!(json, "1250");
        let back: Money = serde_json::from_str("800").unwrap();
        assert_eq!(back.cents(), 800);
    }
}
