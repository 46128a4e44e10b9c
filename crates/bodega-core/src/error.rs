//! # Error Types
//!
//! Domain-specific error types for bodega-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                       Error Types                         │
//! │                                                           │
//! │  bodega-core errors (this file)                           │
//! │  ├── CoreError        - Purchase and lookup failures      │
//! │  └── ValidationError  - Construction/setter input errors  │
//! │                                                           │
//! │  Console app                                              │
//! │  └── prints the Display message and re-prompts            │
//! │                                                           │
//! │  Flow: ValidationError → CoreError → caller               │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, bounds, amounts)
//! 3. Errors are enum variants, never String
//! 4. Every failure is deterministic; the core never retries and never logs

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Purchase failures carry the product name and the offending amounts so the
/// caller can render a message without another lookup.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product with the given id exists in the store.
    ///
    /// Raised by removal and by order lines referencing an unknown id.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A purchase asked for more units than are in stock.
    ///
    /// ## When This Occurs
    /// - A stocked product has fewer units than the requested amount
    /// - A later order line re-requests a product the same batch already
    ///   drained
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// A purchase exceeded a product's per-order cap.
    ///
    /// Checked before the stock check, so this fires even when stock would
    /// have been sufficient.
    #[error("Cannot buy {requested} of {name}: limited to {maximum} per order")]
    PurchaseLimitExceeded {
        name: String,
        maximum: i64,
        requested: i64,
    },

    /// A purchase request was zero or negative.
    ///
    /// Purchases are requested as positive unit counts; zero is not a valid
    /// purchase even though the promotion math accepts it internally.
    #[error("Purchase quantity must be positive, got {requested}")]
    NonPositiveQuantity { requested: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// True for the family of purchase-request failures: non-positive
    /// amounts, per-order caps, and insufficient stock.
    ///
    /// Lookup failures and construction errors are outside the family.
    pub fn is_invalid_quantity(&self) -> bool {
        matches!(
            self,
            CoreError::NonPositiveQuantity { .. }
                | CoreError::PurchaseLimitExceeded { .. }
                | CoreError::InsufficientStock { .. }
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised at the construction/setter boundary, before any business logic
/// runs. Not recoverable by the core; surfaced to the caller.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
