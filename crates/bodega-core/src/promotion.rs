//! # Promotion Strategies
//!
//! Pluggable pricing strategies attached to products.
//!
//! A promotion is a pure function from (unit price, quantity) to the charged
//! total. It holds no mutable state, so the same promotion value can be
//! attached to any number of products.
//!
//! ## Strategy Overview
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │  HalfPriceOnPairs   1st full, 2nd half, 3rd full, ...     │
//! │                     (the odd unit is the half-price one)  │
//! │  OneFreePerThree    every 3rd unit free                   │
//! │  PercentOff(p)      p% off the whole line                 │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! Whatever the strategy, the charge never exceeds `price × quantity`, never
//! decreases when the quantity grows, and is zero for a zero quantity.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreResult;
use crate::money::Money;
use crate::validation;

// =============================================================================
// Promotion
// =============================================================================

/// A pricing strategy with a display label.
///
/// Closed variant set; adding a strategy means adding a variant here and an
/// arm in [`Promotion::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Promotion {
    /// Every second unit is charged at half price. With an odd quantity the
    /// leftover unit is the half-price one.
    HalfPriceOnPairs { name: String },

    /// Every third unit is free: `quantity / 3` units are not charged.
    OneFreePerThree { name: String },

    /// A flat percentage off the whole line. `percent` is within `[0, 100]`.
    PercentOff { name: String, percent: u32 },
}

impl Promotion {
    /// Half price on every second unit.
    pub fn half_price_on_pairs(name: impl Into<String>) -> Self {
        Promotion::HalfPriceOnPairs { name: name.into() }
    }

    /// Every third unit free.
    pub fn one_free_per_three(name: impl Into<String>) -> Self {
        Promotion::OneFreePerThree { name: name.into() }
    }

    /// A flat percentage off.
    ///
    /// Fails when `percent` is outside `[0, 100]`.
    pub fn percent_off(name: impl Into<String>, percent: u32) -> CoreResult<Self> {
        validation::validate_percent(percent)?;
        Ok(Promotion::PercentOff {
            name: name.into(),
            percent,
        })
    }

    /// The display label.
    pub fn name(&self) -> &str {
        match self {
            Promotion::HalfPriceOnPairs { name }
            | Promotion::OneFreePerThree { name }
            | Promotion::PercentOff { name, .. } => name,
        }
    }

    /// Computes the charged total for `quantity` units at `unit_price`.
    ///
    /// Pure: no mutation, no side effects, stateless across calls. A zero
    /// quantity always charges zero.
    ///
    /// ```rust
    /// use bodega_core::{Money, Promotion};
    ///
    /// let pairs = Promotion::half_price_on_pairs("Second Half Price");
    /// // 2 full + 3 half at $50: 2*$50 + 3*$25
    /// assert_eq!(pairs.apply(Money::from_cents(5000), 5), Money::from_cents(17_500));
    ///
    /// let thirds = Promotion::one_free_per_three("Buy 2 Get 1 Free");
    /// // 6 units, 2 free, pay for 4 at $20
    /// assert_eq!(thirds.apply(Money::from_cents(2000), 6), Money::from_cents(8000));
    /// ```
    pub fn apply(&self, unit_price: Money, quantity: i64) -> Money {
        match self {
            Promotion::HalfPriceOnPairs { .. } => {
                let full = quantity / 2;
                let half = quantity - full;
                unit_price * full + unit_price.half() * half
            }
            Promotion::OneFreePerThree { .. } => {
                let free = quantity / 3;
                unit_price * (quantity - free)
            }
            Promotion::PercentOff { percent, .. } => unit_price
                .multiply_quantity(quantity)
                .apply_percentage_discount(percent * 100),
        }
    }
}

impl fmt::Display for Promotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};

    #[test]
    fn test_half_price_on_pairs() {
        let promo = Promotion::half_price_on_pairs("Second Half Price");
        let price = Money::from_cents(1000); // $10.00

        // 2 full + 2 half = $20 + $10
        assert_eq!(promo.apply(price, 4), Money::from_cents(3000));
        // odd unit is half price: 0 full + 1 half
        assert_eq!(promo.apply(price, 1), Money::from_cents(500));
        // 2 full + 3 half = $20 + $15
        assert_eq!(promo.apply(price, 5), Money::from_cents(3500));
    }

    #[test]
    fn test_half_price_formula_matches_partition() {
        let promo = Promotion::half_price_on_pairs("Second Half Price");
        let price = Money::from_cents(5000);

        for q in 0..20 {
            let full = q / 2;
            let half = q - full;
            let expected = price * full + price.half() * half;
            assert_eq!(promo.apply(price, q), expected);
        }
    }

    #[test]
    fn test_one_free_per_three() {
        let promo = Promotion::one_free_per_three("Buy 2 Get 1 Free");
        let price = Money::from_cents(1500); // $15.00

        // exactly one free set
        assert_eq!(promo.apply(price, 3), Money::from_cents(3000));
        // 6 units, 2 free, pay for 4
        assert_eq!(promo.apply(price, 6), Money::from_cents(6000));
        // below the threshold nothing is free
        assert_eq!(promo.apply(price, 2), Money::from_cents(3000));
    }

    #[test]
    fn test_percent_off() {
        let promo = Promotion::percent_off("20% Off", 20).unwrap();
        let price = Money::from_cents(5000); // $50.00

        // $100 - 20%
        assert_eq!(promo.apply(price, 2), Money::from_cents(8000));
    }

    #[test]
    fn test_percent_off_boundaries() {
        let free = Promotion::percent_off("Everything must go", 100).unwrap();
        let full = Promotion::percent_off("0% Off", 0).unwrap();
        let price = Money::from_cents(1000);

        assert_eq!(free.apply(price, 2), Money::zero());
        assert_eq!(full.apply(price, 2), Money::from_cents(2000));
    }

    #[test]
    fn test_percent_off_rejects_out_of_range() {
        let err = Promotion::percent_off("Too good", 101).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_zero_quantity_charges_zero() {
        let price = Money::from_cents(999);
        let promos = [
            Promotion::half_price_on_pairs("pairs"),
            Promotion::one_free_per_three("thirds"),
            Promotion::percent_off("percent", 30).unwrap(),
        ];

        for promo in &promos {
            assert_eq!(promo.apply(price, 0), Money::zero());
        }
    }

    #[test]
    fn test_charge_never_exceeds_full_price_and_is_monotone() {
        // odd cent price exercises the rounding paths
        let price = Money::from_cents(99);
        let promos = [
            Promotion::half_price_on_pairs("pairs"),
            Promotion::one_free_per_three("thirds"),
            Promotion::percent_off("percent", 33).unwrap(),
        ];

        for promo in &promos {
            let mut prev = Money::zero();
            for q in 0..50 {
                let charge = promo.apply(price, q);
                assert!(charge <= price * q, "{} overcharged at q={}", promo, q);
                assert!(charge >= prev, "{} decreased at q={}", promo, q);
                prev = charge;
            }
        }
    }

    #[test]
    fn test_name_and_display() {
        let promo = Promotion::percent_off("30% off!", 30).unwrap();
        assert_eq!(promo.name(), "30% off!");
        assert_eq!(promo.to_string(), "30% off!");
    }
}
