//! # Repository Module
//!
//! Read-only repositories over the loaded catalog.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Storefront Command                                                    │
//! │       │                                                                 │
//! │       │  catalog.products().search(&query)                             │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── search(&self, query)      ──► tradepost_core::query               │
//! │  ├── by_supplier(&self, id)                                            │
//! │  └── categories(&self)                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogData (embedded seed, in memory)                                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product lookup and search
//! - [`SupplierRepository`](supplier::SupplierRepository) - Supplier directory

pub mod product;
pub mod supplier;
