//! # Product Repository
//!
//! Lookups and search over the catalog's products.

use std::sync::Arc;

use tracing::debug;
use tradepost_core::query::ProductQuery;
use tradepost_core::Product;

use crate::error::{CatalogError, CatalogResult};

/// Repository for product lookups.
///
/// ## Usage
/// ```rust
/// use tradepost_catalog::Catalog;
/// use tradepost_core::query::ProductQuery;
///
/// let catalog = Catalog::load_embedded().unwrap();
/// let product = catalog.products().get_by_id("prod-001").unwrap();
/// assert_eq!(product.moq, 100);
///
/// let all = catalog.products().search(&ProductQuery::default());
/// assert_eq!(all.len(), 4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ProductRepository<'a> {
    products: &'a [Arc<Product>],
}

impl<'a> ProductRepository<'a> {
    pub fn new(products: &'a [Arc<Product>]) -> Self {
        ProductRepository { products }
    }

    /// Gets a product by id.
    ///
    /// ## Errors
    /// [`CatalogError::NotFound`] if no product has this id.
    pub fn get_by_id(&self, id: &str) -> CatalogResult<Arc<Product>> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found("Product", id))
    }

    /// Every product, in catalog order.
    pub fn all(&self) -> Vec<Arc<Product>> {
        self.products.to_vec()
    }

    /// Filters and sorts the catalog.
    pub fn search(&self, query: &ProductQuery) -> Vec<Arc<Product>> {
        let hits = query.apply(self.products);
        debug!(
            text = ?query.text,
            category = ?query.category,
            sort = ?query.sort,
            hits = hits.len(),
            "Searching products"
        );
        hits
    }

    /// Products sold by one supplier, in catalog order.
    pub fn by_supplier(&self, supplier_id: &str) -> Vec<Arc<Product>> {
        self.products
            .iter()
            .filter(|p| p.supplier.id == supplier_id)
            .cloned()
            .collect()
    }

    /// Distinct categories, in order of first appearance.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for product in self.products {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }
}

#[cfg(test)]
mod tests {
    use crate::Catalog;
    use tradepost_core::query::{ProductQuery, ProductSort};
    use tradepost_core::Money;

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::load_embedded().unwrap();
        let product = catalog.products().get_by_id("prod-004").unwrap();
        assert_eq!(product.name, "Ceramic Garden Planters Set");

        assert!(catalog.products().get_by_id("prod-999").is_err());
    }

    #[test]
    fn test_search_by_tag() {
        let catalog = Catalog::load_embedded().unwrap();
        let query = ProductQuery {
            text: Some("waterproof".to_string()),
            ..Default::default()
        };
        let ids: Vec<String> = catalog
            .products()
            .search(&query)
            .iter()
            .map(|p| p.id.clone())
            .collect();
        assert_eq!(ids, vec!["prod-001", "prod-003"]);
    }

    #[test]
    fn test_search_price_low_to_high() {
        let catalog = Catalog::load_embedded().unwrap();
        let query = ProductQuery {
            price_max: Some(Money::from_cents(3000)),
            sort: ProductSort::PriceLowToHigh,
            ..Default::default()
        };
        let ids: Vec<String> = catalog
            .products()
            .search(&query)
            .iter()
            .map(|p| p.id.clone())
            .collect();
        // planters top out at 35.50
        assert_eq!(ids, vec!["prod-002", "prod-001", "prod-003"]);
    }

    #[test]
    fn test_by_supplier_and_categories() {
        let catalog = Catalog::load_embedded().unwrap();
        assert_eq!(catalog.products().by_supplier("sup-002").len(), 2);
        assert!(catalog.products().by_supplier("sup-404").is_empty());
        assert_eq!(
            catalog.products().categories(),
            vec![
                "Consumer Electronics",
                "LED Lighting",
                "Solar Products",
                "Home & Garden"
            ]
        );
    }
}
