//! # Validation Module
//!
//! Field-level validation for product and promotion construction.
//!
//! ## Validation Strategy
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                   Validation Layers                       │
//! │                                                           │
//! │  Layer 1: Console input parsing                           │
//! │  ├── numeric parsing, empty-line handling                 │
//! │  └── immediate re-prompt on bad input                     │
//! │           │                                               │
//! │           ▼                                               │
//! │  Layer 2: THIS MODULE, at the constructor/setter boundary │
//! │  ├── names present and within bounds                      │
//! │  ├── prices and stock levels never negative               │
//! │  └── per-order caps and percentages within range          │
//! │                                                           │
//! │  Past this boundary every Product/Promotion is valid.     │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bodega_core::validation::{validate_product_name, validate_purchase_quantity};
//!
//! assert!(validate_product_name("Google Pixel 7").is_ok());
//! assert!(validate_purchase_quantity(5).is_ok());
//! assert!(validate_purchase_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted product name.
pub const MAX_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
///
/// ```rust
/// use bodega_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Bose QuietComfort Earbuds").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// Zero is allowed (free items); negative amounts are not.
///
/// ```rust
/// use bodega_core::money::Money;
/// use bodega_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(1450)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-1)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a stored stock level.
///
/// Stock is a count of units on hand; it can be zero but never negative.
pub fn validate_stock_level(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a requested purchase quantity.
///
/// ## Rules
/// - Must be positive (> 0); zero and negative requests are not purchases
///
/// Per-order caps are a property of the individual product, not a global
/// bound, so no upper limit is applied here.
pub fn validate_purchase_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a per-order purchase cap.
///
/// A cap of zero would make the product unbuyable, so the cap must be
/// strictly positive.
pub fn validate_max_per_order(maximum: i64) -> ValidationResult<()> {
    if maximum <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "maximum".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount percentage.
///
/// ## Rules
/// - Must be between 0 and 100 inclusive (100 makes the item free)
pub fn validate_percent(percent: u32) -> ValidationResult<()> {
    if percent > 100 {
        return Err(ValidationError::OutOfRange {
            field: "percent".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
