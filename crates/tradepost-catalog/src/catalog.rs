//! # Catalog Handle
//!
//! The loaded catalog. Cheap to clone: records are shared behind `Arc`.

use std::sync::Arc;

use tradepost_core::User;

use crate::error::CatalogResult;
use crate::repository::product::ProductRepository;
use crate::repository::supplier::SupplierRepository;
use crate::seed::{self, CatalogData, EMBEDDED_SEED};

/// The marketplace's static data.
///
/// ## Usage
/// ```rust
/// use tradepost_catalog::Catalog;
///
/// let catalog = Catalog::load_embedded().unwrap();
/// assert_eq!(catalog.suppliers().all().len(), 3);
/// assert_eq!(catalog.buyer().name, "John Smith");
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    data: Arc<CatalogData>,
}

impl Catalog {
    /// Loads the seed compiled into this crate.
    pub fn load_embedded() -> CatalogResult<Self> {
        Self::from_json(EMBEDDED_SEED)
    }

    /// Loads a seed document, e.g. a fixture in tests.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        Ok(Catalog {
            data: Arc::new(seed::parse(json)?),
        })
    }

    /// Returns the product repository.
    pub fn products(&self) -> ProductRepository<'_> {
        ProductRepository::new(&self.data.products)
    }

    /// Returns the supplier repository.
    pub fn suppliers(&self) -> SupplierRepository<'_> {
        SupplierRepository::new(&self.data.suppliers)
    }

    /// The signed-in buyer of the mock session.
    pub fn buyer(&self) -> &User {
        &self.data.buyer
    }

    pub fn product_count(&self) -> usize {
        self.data.products.len()
    }

    pub fn supplier_count(&self) -> usize {
        self.data.suppliers.len()
    }
}
