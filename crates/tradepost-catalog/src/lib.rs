//! # tradepost-catalog: Mock Catalog for TradePost
//!
//! This crate provides the storefront's product and supplier data. There is
//! no backend: everything comes from a JSON seed embedded at compile time.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        TradePost Data Flow                              │
//! │                                                                         │
//! │  Storefront command (search_products)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                tradepost-catalog (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Catalog     │    │  Repositories │    │    Seed      │  │   │
//! │  │   │ (catalog.rs)  │───►│ ProductRepo   │    │ catalog.json │  │   │
//! │  │   │               │    │ SupplierRepo  │    │  (embedded)  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  tradepost-core::query (filter + sort rules)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`catalog`] - The `Catalog` handle
//! - [`seed`] - Embedded seed parsing and cross-checks
//! - [`error`] - Catalog error types
//! - [`repository`] - Product and supplier repositories

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};

pub use repository::product::ProductRepository;
pub use repository::supplier::SupplierRepository;
