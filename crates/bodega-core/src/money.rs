//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Integer Cents Only
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │  Floating point drifts:  0.1 + 0.2 = 0.30000000000000004  │
//! │                                                           │
//! │  Here every amount is integer cents:                      │
//! │    $14.50  →  1450 cents                                  │
//! │    half of $0.99 → 49 cents (the lost cent is explicit)   │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! Promotion math that cannot land on a whole cent rounds in the buyer's
//! favor: `half()` floors, and the percentage discount rounds the discount
//! to the nearest cent. Charges never exceed the undiscounted total.
//!
//! ## Usage
//! ```rust
//! use bodega_core::money::Money;
//!
//! let price = Money::from_cents(1450);          // $14.50
//! let pair = price * 2i64;                      // $29.00
//! let total = pair + Money::from_cents(50);     // $29.50
//! assert_eq!(total.to_string(), "$29.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// Single-field tuple struct over `i64`; signed so that refund-style
/// arithmetic stays representable even though validated product prices are
/// never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use bodega_core::money::Money;
    ///
    /// let price = Money::from_cents(1450);
    /// assert_eq!(price.cents(), 1450);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -$5.50.
    ///
    /// ```rust
    /// use bodega_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(14, 50).cents(), 1450);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// The value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// The major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// The minor unit (cents) portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Half of this amount, rounded down to the whole cent.
    ///
    /// ```rust
    /// use bodega_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(5000).half().cents(), 2500);
    /// assert_eq!(Money::from_cents(99).half().cents(), 49);
    /// ```
    #[inline]
    pub const fn half(&self) -> Self {
        Money(self.0 / 2)
    }

    /// Multiplies this amount by a unit count.
    ///
    /// ```rust
    /// use bodega_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Arguments
    /// * `discount_bps` - Discount in basis points (1000 = 10%)
    ///
    /// ## Rounding
    /// Integer math over i128: `discount = (amount * bps + 5000) / 10000`,
    /// so the discount lands on the nearest cent. 10000 bps discounts the
    /// full amount, leaving exactly zero.
    ///
    /// ```rust
    /// use bodega_core::money::Money;
    ///
    /// let total = Money::from_cents(10_000);                    // $100.00
    /// assert_eq!(total.apply_percentage_discount(3000).cents(), 7000);
    /// assert_eq!(total.apply_percentage_discount(10_000).cents(), 0);
    /// ```
    pub fn apply_percentage_discount(&self, discount_bps: u32) -> Money {
        let discount_amount = (self.0 as i128 * discount_bps as i128 + 5000) / 10000;
        Money::from_cents(self.0 - discount_amount as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly rendering as `$x.yy`. Presentation-layer formatting and
/// localization are the collaborator's concern.
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

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
