//! # Product Module
//!
//! Products, their stock policies, and the purchase operation.
//!
//! ## Purchase Flow
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                       buy(quantity)                       │
//! │                                                           │
//! │  quantity > 0 ?──────────── no ──► NonPositiveQuantity    │
//! │       │                                                   │
//! │  within per-order cap ?──── no ──► PurchaseLimitExceeded  │
//! │  (LimitedPerOrder only)                                   │
//! │       │                                                   │
//! │  enough stock ?──────────── no ──► InsufficientStock      │
//! │  (skipped for NonStocked)                                 │
//! │       │                                                   │
//! │  decrement stock (not NonStocked)                         │
//! │       │                                                   │
//! │  promotion attached ?── yes ──► promotion.apply(price, q) │
//! │       │ no                                                │
//! │       ▼                                                   │
//! │  price × quantity                                         │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! The stock decrement happens before the charge is computed and is never
//! rolled back by a later failure in the same order batch. A failed purchase
//! leaves the stock untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::promotion::Promotion;
use crate::validation;

// =============================================================================
// Stock Policy
// =============================================================================

/// Stock handling for a product.
///
/// Closed variant set over the purchase/quantity behavior; everything else
/// about a product (identity, price, active flag, promotion) is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StockPolicy {
    /// Physical stock; purchases draw it down and fail when it runs out.
    Stocked,

    /// Digital or service item. The stored quantity is pinned at 0 and a
    /// purchase of any positive amount succeeds without changing it.
    NonStocked,

    /// Physical stock with a cap on units per single purchase, checked
    /// before the stock check.
    LimitedPerOrder { maximum: i64 },
}

// =============================================================================
// Product
// =============================================================================

/// A product in the store's inventory.
///
/// ## Identity
/// Dual-key: the immutable `id` (UUID v4, assigned at construction) is the
/// identity used by the store and by order lines; `name` is the human-facing
/// business identifier and is not required to be unique.
///
/// ## Invariants
/// - `price` is never negative
/// - `quantity` is never negative, and stays 0 for NonStocked products
///
/// Fields are private; all mutation goes through validating setters, so a
/// constructed product can never leave the invariants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: Uuid,
    name: String,
    price: Money,
    quantity: i64,
    active: bool,
    promotion: Option<Promotion>,
    policy: StockPolicy,
    created_at: DateTime<Utc>,
}

impl Product {
    /// Creates a regular stocked product.
    ///
    /// ```rust
    /// use bodega_core::{Money, Product};
    ///
    /// let pixel = Product::new("Google Pixel 7", Money::from_cents(50_000), 250).unwrap();
    /// assert_eq!(pixel.quantity(), 250);
    /// assert!(pixel.is_active());
    /// ```
    pub fn new(name: impl Into<String>, price: Money, quantity: i64) -> CoreResult<Self> {
        Self::build(name.into(), price, quantity, StockPolicy::Stocked)
    }

    /// Creates a non-stocked product (license, download, service fee).
    ///
    /// The stored quantity is 0 and stays 0; purchases always succeed.
    pub fn non_stocked(name: impl Into<String>, price: Money) -> CoreResult<Self> {
        Self::build(name.into(), price, 0, StockPolicy::NonStocked)
    }

    /// Creates a stocked product with a per-order purchase cap.
    ///
    /// Fails when `maximum` is not strictly positive.
    pub fn limited(
        name: impl Into<String>,
        price: Money,
        quantity: i64,
        maximum: i64,
    ) -> CoreResult<Self> {
        validation::validate_max_per_order(maximum)?;
        Self::build(
            name.into(),
            price,
            quantity,
            StockPolicy::LimitedPerOrder { maximum },
        )
    }

    fn build(name: String, price: Money, quantity: i64, policy: StockPolicy) -> CoreResult<Self> {
        validation::validate_product_name(&name)?;
        validation::validate_price(price)?;
        validation::validate_stock_level(quantity)?;

        Ok(Product {
            id: Uuid::new_v4(),
            name,
            price,
            quantity,
            active: true,
            promotion: None,
            policy,
            created_at: Utc::now(),
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The immutable product identity.
    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Units currently in stock (always 0 for NonStocked).
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// The stock policy tag.
    #[inline]
    pub fn policy(&self) -> StockPolicy {
        self.policy
    }

    /// The attached promotion, if any.
    #[inline]
    pub fn promotion(&self) -> Option<&Promotion> {
        self.promotion.as_ref()
    }

    /// When the product was constructed.
    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether the product shows up in listings and totals.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Includes the product in listings and totals again.
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Hides the product from listings and totals. It stays addressable
    /// through the store for later reactivation.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Replaces the unit price, re-validating non-negativity.
    pub fn set_price(&mut self, price: Money) -> CoreResult<()> {
        validation::validate_price(price)?;
        self.price = price;
        Ok(())
    }

    /// Replaces the stock level.
    ///
    /// The new level must be non-negative, and for a NonStocked product it
    /// must be 0 (the quantity is pinned).
    pub fn set_quantity(&mut self, quantity: i64) -> CoreResult<()> {
        validation::validate_stock_level(quantity)?;

        if matches!(self.policy, StockPolicy::NonStocked) && quantity != 0 {
            return Err(crate::error::ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: 0,
                max: 0,
            }
            .into());
        }

        self.quantity = quantity;
        Ok(())
    }

    /// Attaches a promotion, replaces the current one, or clears it with
    /// `None`. Promotions are immutable values, so the same promotion can be
    /// attached to several products.
    pub fn set_promotion(&mut self, promotion: Option<Promotion>) {
        self.promotion = promotion;
    }

    // =========================================================================
    // Purchase
    // =========================================================================

    /// Purchases `quantity` units and returns the charged total.
    ///
    /// ## Checks, in order
    /// 1. `quantity` must be positive
    /// 2. within the per-order cap (LimitedPerOrder only)
    /// 3. enough stock (Stocked and LimitedPerOrder)
    ///
    /// On success the stock is decremented (NonStocked quantity stays 0),
    /// then the charge is computed: the attached promotion's price, or
    /// `price × quantity` without one. On failure the stock is untouched.
    ///
    /// ```rust
    /// use bodega_core::{Money, Product};
    ///
    /// let mut monitor = Product::new("Monitor", Money::from_cents(20_000), 5).unwrap();
    /// let charge = monitor.buy(2).unwrap();
    /// assert_eq!(charge, Money::from_cents(40_000));
    /// assert_eq!(monitor.quantity(), 3);
    /// ```
    pub fn buy(&mut self, quantity: i64) -> CoreResult<Money> {
        validation::validate_purchase_quantity(quantity)
            .map_err(|_| CoreError::NonPositiveQuantity {
                requested: quantity,
            })?;

        if let StockPolicy::LimitedPerOrder { maximum } = self.policy {
            if quantity > maximum {
                return Err(CoreError::PurchaseLimitExceeded {
                    name: self.name.clone(),
                    maximum,
                    requested: quantity,
                });
            }
        }

        match self.policy {
            StockPolicy::Stocked | StockPolicy::LimitedPerOrder { .. } => {
                if quantity > self.quantity {
                    return Err(CoreError::InsufficientStock {
                        name: self.name.clone(),
                        available: self.quantity,
                        requested: quantity,
                    });
                }
                self.quantity -= quantity;
            }
            StockPolicy::NonStocked => {}
        }

        let charge = match &self.promotion {
            Some(promotion) => promotion.apply(self.price, quantity),
            None => self.price.multiply_quantity(quantity),
        };

        Ok(charge)
    }

    // =========================================================================
    // Display
    // =========================================================================

    /// A one-line human-readable summary.
    ///
    /// Contains the name and price; the quantity (except for NonStocked);
    /// the per-order cap (LimitedPerOrder); and the promotion name when one
    /// is attached. The exact wording is presentation, not contract.
    pub fn describe(&self) -> String {
        let mut summary = match self.policy {
            StockPolicy::Stocked => {
                format!("{}, Price: {}, Quantity: {}", self.name, self.price, self.quantity)
            }
            StockPolicy::NonStocked => format!("{}, Price: {}", self.name, self.price),
            StockPolicy::LimitedPerOrder { maximum } => format!(
                "{}, Price: {}, Quantity: {}, Limited to {} per order",
                self.name, self.price, self.quantity, maximum
            ),
        };

        if let Some(promotion) = &self.promotion {
            summary.push_str(", Promotion: ");
            summary.push_str(promotion.name());
        }

        summary
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
