//! # Catalog Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Seed JSON (serde_json::Error) / lookup miss                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError (this module) ← Adds context and categorization          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in storefront) ← Serialized for frontend                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Catalog load and lookup errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Entity not found in the catalog.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// The seed is not valid JSON or does not match the schema.
    #[error("Invalid catalog seed: {0}")]
    InvalidSeed(#[from] serde_json::Error),

    /// Two records of the same kind share an id.
    #[error("Duplicate {entity} id: {id}")]
    DuplicateId { entity: String, id: String },

    /// A product points at a supplier that is not in the seed.
    #[error("Product {product_id} references unknown supplier {supplier_id}")]
    UnknownSupplier {
        product_id: String,
        supplier_id: String,
    },
}

impl CatalogError {
    /// Shorthand for [`CatalogError::NotFound`].
    pub fn not_found(entity: &str, id: &str) -> Self {
        CatalogError::NotFound {
            entity: entity.to_string(),
            id: id.to_string(),
        }
    }
}

/// Convenience type alias for catalog results.
pub type CatalogResult<T> = Result<T, CatalogError>;
