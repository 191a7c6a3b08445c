//! # Commands Module
//!
//! All commands exposed to the storefront frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── cart.rs       ◄─── Cart manipulation and MOQ warnings
//! ├── product.rs    ◄─── Product search and detail
//! ├── supplier.rs   ◄─── Supplier directory and profiles
//! ├── quote.rs      ◄─── Requests for quotation
//! ├── order.rs      ◄─── Order management view
//! ├── messaging.rs  ◄─── Inbox and auto-replies
//! ├── dashboard.rs  ◄─── Buyer dashboard summary
//! └── config.rs     ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Frontend event                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  fn add_to_cart(                                                        │
//! │      catalog: &Catalog,         ◄── Borrowed from the Storefront        │
//! │      cart: &mut CartStore,      ◄── Only the state it needs             │
//! │      product_id: &str,          ◄── From the request                    │
//! │      quantity: Option<i64>,     ◄── Optional param                      │
//! │  ) -> Result<CartResponse, ApiError>                                    │
//! │       │                                                                 │
//! │       │ (JSON serialization)                                            │
//! │       ▼                                                                 │
//! │  Frontend receives: CartResponse                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod config;
pub mod dashboard;
pub mod messaging;
pub mod order;
pub mod product;
pub mod quote;
pub mod supplier;
