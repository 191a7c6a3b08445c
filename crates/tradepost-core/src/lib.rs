//! # tradepost-core: Pure Domain Logic for TradePost
//!
//! This crate is the **heart** of the TradePost storefront. It contains the
//! cart state container and everything it needs, as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        TradePost Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Frontend                                 │   │
//! │  │    Catalog ──► Product Card ──► Cart Sidebar ──► Quote Modal    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Storefront Commands                          │   │
//! │  │    search_products, add_to_cart, submit_quote_request, etc.    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tradepost-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐  ┌─────────┐  ┌─────────┐  ┌─────────┐           │   │
//! │  │   │  types  │  │  cart   │  │  store  │  │  query  │           │   │
//! │  │   │ Product │  │ reducer │  │dispatch │  │ filter  │           │   │
//! │  │   │Supplier │  │selectors│  │listeners│  │  sort   │           │   │
//! │  │   └─────────┘  └─────────┘  └─────────┘  └─────────┘           │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO TIMERS • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                tradepost-catalog (Mock Data)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Supplier, QuoteRequest, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart state, actions, the reducer, and derived totals
//! - [`store`] - `CartStore`: dispatch entry point and subscribers
//! - [`query`] - Product and supplier filtering/sorting
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use tradepost_core::{CartStore, Money};
//! # use tradepost_core::types::test_support::sample_product;
//!
//! let product = Arc::new(sample_product("prod-001", 1250));
//! let mut store = CartStore::new();
//!
//! store.add_item(product.clone(), 4, Money::from_cents(1250));
//! assert_eq!(store.total_items(), 4);
//! assert_eq!(store.total_price(), Money::from_cents(5000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod query;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartAction, CartLineItem, CartState};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use store::{CartStore, Subscription};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest quantity accepted for a single quote request.
///
/// Guards against a stray extra zero in the quote form. The cart itself is
/// not bound by this: cart operations are total and never reject input.
pub const MAX_QUOTE_QUANTITY: i64 = 1_000_000;

/// Maximum length of the free-text requirements on a quote request.
pub const MAX_REQUIREMENTS_LEN: usize = 2000;
