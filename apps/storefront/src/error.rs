//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in TradePost                              │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  submit_quote_request(form)                                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Lookup miss? ─── CatalogError::NotFound ─────────┐             │  │
//! │  │         │                                          │             │  │
//! │  │         ▼                                          ▼             │  │
//! │  │  Below MOQ? ─── CoreError::BelowMinimumOrder ──── ApiError ─────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ───────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "BELOW_MOQ", "message": "Quantity 10 for prod-001 ..." }    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart commands never fail on cart contents; the only cart error is an
//! unknown product id in `add_to_cart`.

use serde::Serialize;
use tradepost_catalog::CatalogError;
use tradepost_core::{CoreError, ValidationError};

use crate::state::{MessagingError, OrderError};

/// API error returned from storefront commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: prod-999"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Quantity below the supplier's minimum order
    #[serde(rename = "BELOW_MOQ")]
    BelowMoq,

    /// Business rule violated, e.g. an illegal quote transition (422)
    BusinessLogic,

    /// Seed data could not be loaded (500)
    CatalogError,

    /// Internal error (500)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::QuoteRequestNotFound(id) => ApiError::not_found("Quote request", &id),
            err @ CoreError::BelowMinimumOrder { .. } => {
                ApiError::new(ErrorCode::BelowMoq, err.to_string())
            }
            CoreError::QuantityTooLarge { requested, max } => ApiError::validation(format!(
                "Quantity {} exceeds maximum allowed ({})",
                requested, max
            )),
            err @ CoreError::InvalidQuoteTransition { .. } => {
                ApiError::new(ErrorCode::BusinessLogic, err.to_string())
            }
            CoreError::Validation(e) => ApiError::from(e),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts catalog errors to API errors.
impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            other => {
                // Log the actual error but return a generic message
                tracing::error!("Catalog failure: {}", other);
                ApiError::new(ErrorCode::CatalogError, "Catalog data is unavailable")
            }
        }
    }
}

impl From<MessagingError> for ApiError {
    fn from(err: MessagingError) -> Self {
        match err {
            MessagingError::ConversationNotFound(id) => ApiError::not_found("Conversation", &id),
            MessagingError::ConversationArchived(id) => ApiError::new(
                ErrorCode::BusinessLogic,
                format!("Conversation {} is archived", id),
            ),
            MessagingError::InvalidSeed(e) => {
                tracing::error!("Conversation seed failure: {}", e);
                ApiError::internal("Messages are unavailable")
            }
            MessagingError::Validation(e) => ApiError::from(e),
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::OrderNotFound(id) => ApiError::not_found("Order", &id),
            other => {
                tracing::error!("Order seed failure: {}", other);
                ApiError::internal("Orders are unavailable")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
