//! # Catalog Seed
//!
//! The mock marketplace data ships inside the binary as JSON and is turned
//! into shared domain records once, at startup.
//!
//! ## Seed Resolution
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    catalog.json ──► CatalogData                         │
//! │                                                                         │
//! │  suppliers[]  ───────────────► Vec<Arc<Supplier>>   (unique ids)        │
//! │                                      ▲                                  │
//! │  products[].supplierId ──────────────┘  resolve to the shared Arc       │
//! │                                                                         │
//! │  products[]   ───────────────► Vec<Arc<Product>>    (unique ids)        │
//! │  buyer        ───────────────► User                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use serde::Deserialize;
use tracing::info;
use tradepost_core::{PriceRange, Product, Supplier, User};

use crate::error::{CatalogError, CatalogResult};

/// The seed compiled into the crate.
pub const EMBEDDED_SEED: &str = include_str!("../data/catalog.json");

/// Top-level shape of the seed file.
#[derive(Debug, Deserialize)]
struct SeedFile {
    suppliers: Vec<Supplier>,
    products: Vec<ProductRow>,
    buyer: User,
}

/// A product as stored in the seed: the supplier is referenced by id.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductRow {
    id: String,
    name: String,
    description: String,
    price: PriceRange,
    moq: i64,
    category: String,
    images: Vec<String>,
    supplier_id: String,
    #[serde(default)]
    specifications: BTreeMap<String, String>,
    #[serde(default)]
    tags: Vec<String>,
    rating: f32,
    review_count: u32,
    is_verified: bool,
}

impl ProductRow {
    fn into_product(self, supplier: Arc<Supplier>) -> Product {
        Product {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            moq: self.moq,
            category: self.category,
            images: self.images,
            supplier,
            specifications: self.specifications,
            tags: self.tags,
            rating: self.rating,
            review_count: self.review_count,
            is_verified: self.is_verified,
        }
    }
}

/// Parsed and cross-checked seed contents.
#[derive(Debug, Clone)]
pub struct CatalogData {
    pub suppliers: Vec<Arc<Supplier>>,
    pub products: Vec<Arc<Product>>,
    pub buyer: User,
}

/// Parses a seed document.
///
/// ## Errors
/// - [`CatalogError::InvalidSeed`] if the JSON does not match the schema
/// - [`CatalogError::DuplicateId`] if two suppliers or two products share an id
/// - [`CatalogError::UnknownSupplier`] if a product references a missing supplier
pub fn parse(json: &str) -> CatalogResult<CatalogData> {
    let seed: SeedFile = serde_json::from_str(json)?;

    let mut by_id: HashMap<String, Arc<Supplier>> = HashMap::new();
    let mut suppliers = Vec::with_capacity(seed.suppliers.len());
    for supplier in seed.suppliers {
        if by_id.contains_key(&supplier.id) {
            return Err(CatalogError::DuplicateId {
                entity: "supplier".to_string(),
                id: supplier.id,
            });
        }
        let supplier = Arc::new(supplier);
        by_id.insert(supplier.id.clone(), Arc::clone(&supplier));
        suppliers.push(supplier);
    }

    let mut seen = HashSet::new();
    let mut products = Vec::with_capacity(seed.products.len());
    for row in seed.products {
        if !seen.insert(row.id.clone()) {
            return Err(CatalogError::DuplicateId {
                entity: "product".to_string(),
                id: row.id,
            });
        }
        let supplier = by_id
            .get(&row.supplier_id)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownSupplier {
                product_id: row.id.clone(),
                supplier_id: row.supplier_id.clone(),
            })?;
        products.push(Arc::new(row.into_product(supplier)));
    }

    info!(
        suppliers = suppliers.len(),
        products = products.len(),
        "Catalog seed loaded"
    );

    Ok(CatalogData {
        suppliers,
        products,
        buyer: seed.buyer,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_seed_parses() {
        let data = parse(EMBEDDED_SEED).unwrap();
        assert_eq!(data.suppliers.len(), 3);
        assert_eq!(data.products.len(), 4);
        assert_eq!(data.buyer.id, "user-001");
    }

    #[test]
    fn test_products_share_supplier_records() {
        let data = parse(EMBEDDED_SEED).unwrap();
        let led = &data.products[1];
        let solar = &data.products[2];

        assert_eq!(led.supplier.id, "sup-002");
        assert!(Arc::ptr_eq(&led.supplier, &solar.supplier));
        assert!(Arc::ptr_eq(&led.supplier, &data.suppliers[1]));
    }

    #[test]
    fn test_prices_are_cents() {
        let data = parse(EMBEDDED_SEED).unwrap();
        let earbuds = &data.products[0];
        assert_eq!(earbuds.price.min.cents(), 1250);
        assert_eq!(earbuds.price.max.cents(), 1890);
        assert_eq!(earbuds.moq, 100);
    }

    #[test]
    fn test_unknown_supplier_rejected() {
        let json = r#"{
            "suppliers": [],
            "products": [{
                "id": "prod-1", "name": "x", "description": "",
                "price": {"min": 1, "max": 2, "currency": "USD"},
                "moq": 1, "category": "c", "images": [], "supplierId": "sup-404",
                "rating": 1.0, "reviewCount": 0, "isVerified": false
            }],
            "buyer": {"id": "u", "name": "n", "email": "e", "company": "c",
                      "role": "buyer", "verified": false}
        }"#;

        assert!(matches!(
            parse(json),
            Err(CatalogError::UnknownSupplier { .. })
        ));
    }

    #[test]
    fn test_duplicate_supplier_rejected() {
        let data = parse(EMBEDDED_SEED).unwrap();
        let supplier = serde_json::to_value(&*data.suppliers[0]).unwrap();
        let json = serde_json::json!({
            "suppliers": [supplier.clone(), supplier],
            "products": [],
            "buyer": data.buyer,
        })
        .to_string();

        assert!(matches!(
            parse(&json),
            Err(CatalogError::DuplicateId { .. })
        ));
    }

    #[test]
    fn test_malformed_seed_rejected() {
        assert!(matches!(parse("{"), Err(CatalogError::InvalidSeed(_))));
    }
}
