//! # Supplier Commands
//!
//! Commands for the supplier directory and supplier profile pages.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;
use tradepost_catalog::Catalog;
use tradepost_core::query::SupplierQuery;
use tradepost_core::validation::validate_search_query;
use tradepost_core::Supplier;

use crate::commands::product::ProductCard;
use crate::error::ApiError;

/// A supplier profile page: the supplier and the products it lists.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierProfile {
    pub supplier: Arc<Supplier>,
    pub products: Vec<ProductCard>,
}

/// Filter values offered in the directory sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierFacets {
    pub countries: Vec<String>,
    pub business_types: Vec<String>,
}

/// Searches the supplier directory.
///
/// ## Errors
/// `VALIDATION_ERROR` if the search text is longer than 100 characters.
pub fn search_suppliers(
    catalog: &Catalog,
    query: SupplierQuery,
) -> Result<Vec<Arc<Supplier>>, ApiError> {
    let query = SupplierQuery {
        text: query
            .text
            .as_deref()
            .map(validate_search_query)
            .transpose()?,
        ..query
    };
    debug!(query = ?query, "search_suppliers command");
    Ok(catalog.suppliers().search(&query))
}

/// Gets a supplier with the products it sells.
pub fn get_supplier(catalog: &Catalog, id: &str) -> Result<SupplierProfile, ApiError> {
    debug!(id = %id, "get_supplier command");
    let supplier = catalog.suppliers().get_by_id(id)?;
    let products = get_supplier_products(catalog, id)?;
    Ok(SupplierProfile { supplier, products })
}

/// Lists the products a supplier sells, in catalog order.
///
/// ## Errors
/// `NOT_FOUND` if the supplier does not exist.
pub fn get_supplier_products(catalog: &Catalog, id: &str) -> Result<Vec<ProductCard>, ApiError> {
    debug!(id = %id, "get_supplier_products command");
    catalog.suppliers().get_by_id(id)?;
    Ok(catalog
        .products()
        .by_supplier(id)
        .iter()
        .map(|p| ProductCard::from(p.as_ref()))
        .collect())
}

/// Lists the filter values of the supplier directory.
pub fn get_supplier_facets(catalog: &Catalog) -> SupplierFacets {
    debug!("get_supplier_facets command");
    SupplierFacets {
        countries: catalog.suppliers().countries(),
        business_types: catalog.suppliers().business_types(),
    }
}
