//! # Supplier Repository
//!
//! The supplier directory: lookup, search, and the facet values the filter
//! sidebar offers.

use std::sync::Arc;

use tracing::debug;
use tradepost_core::query::SupplierQuery;
use tradepost_core::Supplier;

use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone, Copy)]
pub struct SupplierRepository<'a> {
    suppliers: &'a [Arc<Supplier>],
}

impl<'a> SupplierRepository<'a> {
    pub fn new(suppliers: &'a [Arc<Supplier>]) -> Self {
        SupplierRepository { suppliers }
    }

    pub fn get_by_id(&self, id: &str) -> CatalogResult<Arc<Supplier>> {
        self.suppliers
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found("Supplier", id))
    }

    pub fn all(&self) -> Vec<Arc<Supplier>> {
        self.suppliers.to_vec()
    }

    pub fn search(&self, query: &SupplierQuery) -> Vec<Arc<Supplier>> {
        let hits = query.apply(self.suppliers);
        debug!(
            text = ?query.text,
            country = ?query.country,
            sort = ?query.sort,
            hits = hits.len(),
            "Searching suppliers"
        );
        hits
    }

    /// Distinct countries, in order of first appearance.
    pub fn countries(&self) -> Vec<String> {
        distinct(self.suppliers.iter().map(|s| &s.location.country))
    }

    /// Distinct business types, in order of first appearance.
    pub fn business_types(&self) -> Vec<String> {
        distinct(self.suppliers.iter().map(|s| &s.business_type))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.contains(value) {
            out.push(value.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use crate::Catalog;
    use tradepost_core::query::{SupplierQuery, SupplierSort};

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::load_embedded().unwrap();
        let supplier = catalog.suppliers().get_by_id("sup-003").unwrap();
        assert_eq!(supplier.company_name, "Yiwu Global Trading Co.");
        assert!(catalog.suppliers().get_by_id("sup-404").is_err());
    }

    #[test]
    fn test_search_sorted_by_response_rate() {
        let catalog = Catalog::load_embedded().unwrap();
        let query = SupplierQuery {
            sort: SupplierSort::ResponseRate,
            ..Default::default()
        };
        let rates: Vec<u8> = catalog
            .suppliers()
            .search(&query)
            .iter()
            .map(|s| s.response_rate)
            .collect();
        assert_eq!(rates, vec![98, 95, 92]);
    }

    #[test]
    fn test_search_by_main_product() {
        let catalog = Catalog::load_embedded().unwrap();
        let query = SupplierQuery {
            text: Some("toys".to_string()),
            ..Default::default()
        };
        let hits = catalog.suppliers().search(&query);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "sup-003");
    }

    #[test]
    fn test_facets() {
        let catalog = Catalog::load_embedded().unwrap();
        assert_eq!(catalog.suppliers().countries(), vec!["China"]);
        assert_eq!(
            catalog.suppliers().business_types(),
            vec!["Manufacturer", "Trading Company"]
        );
    }
}
