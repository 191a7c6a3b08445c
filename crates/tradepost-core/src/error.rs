//! # Error Types
//!
//! Domain-specific error types for tradepost-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tradepost-core errors (this file)                                     │
//! │  ├── CoreError        - Domain rule violations (quotes, MOQ advice)    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  tradepost-catalog errors (separate crate)                             │
//! │  └── CatalogError     - Seed and lookup failures                       │
//! │                                                                         │
//! │  Storefront errors (in app)                                            │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  NOTE: the cart has no error type. Every cart operation is total.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::types::QuoteStatus;

// =============================================================================
// Core Error
// =============================================================================

/// Domain errors raised outside the cart.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Quote request cannot be found.
    #[error("Quote request not found: {0}")]
    QuoteRequestNotFound(String),

    /// The requested quantity is under the supplier's minimum order quantity.
    ///
    /// ## When This Occurs
    /// Only when a caller explicitly asks for MOQ enforcement, e.g. a quote
    /// request. The cart store never raises it.
    #[error("Quantity {requested} for {product_id} is below the minimum order quantity ({moq})")]
    BelowMinimumOrder {
        product_id: String,
        requested: i64,
        moq: i64,
    },

    /// Quote request quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Quote status transition is not allowed.
    ///
    /// ## Quote Lifecycle
    /// ```text
    /// Pending ──► Quoted ──► Negotiating ──► Accepted
    ///    │          │  ▲          │
    ///    │          │  └──────────┘
    ///    ▼          ▼             ▼
    /// Rejected   Rejected      Rejected
    /// ```
    #[error("Quote request {request_id} cannot move from {from:?} to {to:?}")]
    InvalidQuoteTransition {
        request_id: String,
        from: QuoteStatus,
        to: QuoteStatus,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
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

    /// Invalid format (e.g., unparseable date, date in the past).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
