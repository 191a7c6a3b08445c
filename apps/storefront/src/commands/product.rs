//! # Product Commands
//!
//! Commands for product search and retrieval.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Search Flow                                  │
//! │                                                                         │
//! │  Buyer types "waterproof", picks "Price: Low to High"                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  search_products({ text: "waterproof", sort: "price-low" })            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │  Validate text (trim, <= 100 chars)       │                         │
//! │  │  Filter: text / category / price window   │                         │
//! │  │  Stable sort                              │                         │
//! │  └───────────────────────────────────────────┘                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<ProductCard> for the product grid                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};
use tradepost_catalog::Catalog;
use tradepost_core::query::ProductQuery;
use tradepost_core::validation::validate_search_query;
use tradepost_core::{PriceRange, Product};

use crate::error::ApiError;

/// Default number of results per page
const DEFAULT_LIMIT: usize = 20;

/// Upper bound on a single page
const MAX_LIMIT: usize = 100;

/// What the product grid shows for one product.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub price: PriceRange,
    pub moq: i64,
    pub category: String,
    pub image: Option<String>,
    pub supplier_id: String,
    pub supplier_company: String,
    pub supplier_city: String,
    pub is_gold_supplier: bool,
    pub rating: f32,
    pub review_count: u32,
    pub is_verified: bool,
}

impl From<&Product> for ProductCard {
    fn from(p: &Product) -> Self {
        ProductCard {
            id: p.id.clone(),
            name: p.name.clone(),
            price: p.price.clone(),
            moq: p.moq,
            category: p.category.clone(),
            image: p.images.first().cloned(),
            supplier_id: p.supplier.id.clone(),
            supplier_company: p.supplier.company_name.clone(),
            supplier_city: p.supplier.location.city.clone(),
            is_gold_supplier: p.supplier.is_gold_supplier,
            rating: p.rating,
            review_count: p.review_count,
            is_verified: p.is_verified,
        }
    }
}

/// Searches the catalog.
///
/// ## Arguments
/// * `query` - Text, category, price window and sort order
/// * `limit` - Maximum results to return (default: 20, max: 100)
///
/// ## Errors
/// `VALIDATION_ERROR` if the search text is longer than 100 characters.
pub fn search_products(
    catalog: &Catalog,
    query: ProductQuery,
    limit: Option<usize>,
) -> Result<Vec<ProductCard>, ApiError> {
    let start = Instant::now();
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);

    let query = ProductQuery {
        text: query
            .text
            .as_deref()
            .map(validate_search_query)
            .transpose()?,
        ..query
    };
    debug!(query = ?query, limit = %limit, "search_products command");

    let cards: Vec<ProductCard> = catalog
        .products()
        .search(&query)
        .iter()
        .take(limit)
        .map(|p| ProductCard::from(p.as_ref()))
        .collect();

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = cards.len(),
        "search_products complete"
    );

    Ok(cards)
}

/// Gets a single product with its full supplier record.
///
/// ## When To Use
/// - Product detail page (specifications, gallery, supplier panel)
/// - Before submitting a quote request
pub fn get_product(catalog: &Catalog, id: &str) -> Result<Arc<Product>, ApiError> {
    debug!(id = %id, "get_product command");
    Ok(catalog.products().get_by_id(id)?)
}

/// Lists product categories for the filter sidebar.
pub fn list_categories(catalog: &Catalog) -> Vec<String> {
    debug!("list_categories command");
    catalog.products().categories()
}
