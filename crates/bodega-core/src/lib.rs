//! # bodega-core: Pure Business Logic for bodega
//!
//! Everything with real computation and invariants lives here: money math,
//! product stock rules, promotion pricing, and the store's order
//! transaction. The crate has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                   bodega Architecture                     │
//! │                                                           │
//! │  ┌─────────────────────────────────────────────────────┐  │
//! │  │                  Console Menu (app)                 │  │
//! │  │   list products ── show totals ── make an order     │  │
//! │  └──────────────────────────┬──────────────────────────┘  │
//! │                             │ function calls              │
//! │  ┌──────────────────────────▼──────────────────────────┐  │
//! │  │             ★ bodega-core (THIS CRATE) ★            │  │
//! │  │                                                     │  │
//! │  │  ┌─────────┐ ┌─────────┐ ┌───────────┐ ┌─────────┐  │  │
//! │  │  │  money  │ │ product │ │ promotion │ │  store  │  │  │
//! │  │  │  Money  │ │ Product │ │ Promotion │ │  Store  │  │  │
//! │  │  └─────────┘ └─────────┘ └───────────┘ └─────────┘  │  │
//! │  │                                                     │  │
//! │  │  NO I/O • NO LOGGING • PURE, SYNCHRONOUS FUNCTIONS  │  │
//! │  └─────────────────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`product`] - Product variants and the purchase operation
//! - [`promotion`] - Pluggable pricing strategies
//! - [`store`] - The inventory aggregate and order processing
//! - [`error`] - Domain error types
//! - [`validation`] - Field-level input validation
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: same state + same input = same result, every time
//! 2. **No I/O**: terminal, file system and network access are FORBIDDEN here
//! 3. **Integer Money**: all monetary values are cents (i64)
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use bodega_core::{Money, Product, Promotion};
//!
//! let mut shirt = Product::new("Shirt", Money::from_cents(5000), 5).unwrap();
//! shirt.set_promotion(Some(Promotion::half_price_on_pairs("Second Half Price")));
//!
//! // 2 shirts at full price, 3 at half price
//! let charge = shirt.buy(5).unwrap();
//! assert_eq!(charge, Money::from_cents(17_500));
//! assert_eq!(shirt.quantity(), 0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod product;
pub mod promotion;
pub mod store;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bodega_core::Money` instead of
// `use bodega_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use product::{Product, StockPolicy};
pub use promotion::Promotion;
pub use store::{OrderLine, Store};
