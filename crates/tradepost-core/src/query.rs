//! # Catalog Queries
//!
//! Filtering and sorting for the product catalog and the supplier directory.
//! Pure functions over slices; the catalog crate decides where the data
//! comes from.
//!
//! ## Product Search Flow
//! ```text
//! all products ──► text match ──► category ──► price window ──► sort
//!                 (name, desc,   (exact or    (min >= lo &&    (stable)
//!                  any tag)       "all")        max <= hi)
//! ```

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, Supplier};

// =============================================================================
// Products
// =============================================================================

/// Sort order for the product grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum ProductSort {
    /// Catalog order.
    #[default]
    Relevance,
    /// Cheapest band floor first.
    #[serde(rename = "price-low")]
    PriceLowToHigh,
    /// Most expensive band ceiling first.
    #[serde(rename = "price-high")]
    PriceHighToLow,
    /// Best rated first.
    Rating,
    /// No listing dates in the mock catalog, so catalog order.
    Newest,
}

/// Product catalog filters. Every field is optional; the default matches
/// everything in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct ProductQuery {
    /// Case-insensitive substring of the name, description, or any tag.
    pub text: Option<String>,

    /// Exact category. `None` or `"all"` means any.
    pub category: Option<String>,

    /// Keep products whose band floor is at least this.
    pub price_min: Option<Money>,

    /// Keep products whose band ceiling is at most this.
    pub price_max: Option<Money>,

    pub sort: ProductSort,
}

impl ProductQuery {
    /// Whether a single product passes every filter.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(needle) = normalized(&self.text) {
            let hit = contains_ci(&product.name, &needle)
                || contains_ci(&product.description, &needle)
                || product.tags.iter().any(|t| contains_ci(t, &needle));
            if !hit {
                return false;
            }
        }

        if let Some(category) = self.category.as_deref() {
            if category != "all" && product.category != category {
                return false;
            }
        }

        if let Some(lo) = self.price_min {
            if product.price.min < lo {
                return false;
            }
        }

        if let Some(hi) = self.price_max {
            if product.price.max > hi {
                return false;
            }
        }

        true
    }

    /// Filters then sorts. The input order is the relevance order.
    pub fn apply(&self, products: &[Arc<Product>]) -> Vec<Arc<Product>> {
        let mut hits: Vec<Arc<Product>> = products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect();

        match self.sort {
            ProductSort::Relevance | ProductSort::Newest => {}
            ProductSort::PriceLowToHigh => hits.sort_by_key(|p| p.price.min),
            ProductSort::PriceHighToLow => hits.sort_by(|a, b| b.price.max.cmp(&a.price.max)),
            ProductSort::Rating => hits.sort_by(|a, b| desc_f32(a.rating, b.rating)),
        }

        hits
    }
}

// =============================================================================
// Suppliers
// =============================================================================

/// Sort order for the supplier directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum SupplierSort {
    /// Best rated first.
    #[default]
    Rating,
    /// Most responsive first.
    ResponseRate,
    /// Oldest company first.
    Established,
    /// Largest catalog first.
    Products,
}

/// Supplier directory filters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct SupplierQuery {
    /// Case-insensitive substring of the company name, contact name, or any
    /// main product line.
    pub text: Option<String>,

    /// Exact country. `None` or `"all"` means any.
    pub country: Option<String>,

    /// Exact business type. `None` or `"all"` means any.
    pub business_type: Option<String>,

    /// Keep suppliers rated at least this.
    pub min_rating: Option<f32>,

    pub sort: SupplierSort,
}

impl SupplierQuery {
    pub fn matches(&self, supplier: &Supplier) -> bool {
        if let Some(needle) = normalized(&self.text) {
            let hit = contains_ci(&supplier.company_name, &needle)
                || contains_ci(&supplier.name, &needle)
                || supplier.main_products.iter().any(|p| contains_ci(p, &needle));
            if !hit {
                return false;
            }
        }

        if !matches_choice(&self.country, &supplier.location.country) {
            return false;
        }

        if !matches_choice(&self.business_type, &supplier.business_type) {
            return false;
        }

        if let Some(min) = self.min_rating {
            if supplier.rating < min {
                return false;
            }
        }

        true
    }

    pub fn apply(&self, suppliers: &[Arc<Supplier>]) -> Vec<Arc<Supplier>> {
        let mut hits: Vec<Arc<Supplier>> = suppliers
            .iter()
            .filter(|s| self.matches(s))
            .cloned()
            .collect();

        match self.sort {
            SupplierSort::Rating => hits.sort_by(|a, b| desc_f32(a.rating, b.rating)),
            SupplierSort::ResponseRate => {
                hits.sort_by(|a, b| b.response_rate.cmp(&a.response_rate))
            }
            SupplierSort::Established => hits.sort_by_key(|s| s.established),
            SupplierSort::Products => {
                hits.sort_by(|a, b| b.stats.total_products.cmp(&a.stats.total_products))
            }
        }

        hits
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Lower-cased, trimmed search text, or `None` when blank.
fn normalized(text: &Option<String>) -> Option<String> {
    text.as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

fn matches_choice(choice: &Option<String>, value: &str) -> bool {
    match choice.as_deref() {
        None | Some("all") => true,
        Some(wanted) => wanted == value,
    }
}

fn desc_f32(a: f32, b: f32) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::test_support::{sample_product, sample_supplier};

    fn products() -> Vec<Arc<Product>> {
        let mut earbuds = sample_product("prod-001", 1250);
        earbuds.name = "Wireless Bluetooth Earbuds Pro".to_string();
        earbuds.price.max = Money::from_cents(1890);
        earbuds.tags = vec!["wireless".to_string(), "waterproof".to_string()];
        earbuds.rating = 4.7;

        let mut strip = sample_product("prod-002", 890);
        strip.name = "Smart LED Strip Lights RGB".to_string();
        strip.category = "LED Lighting".to_string();
        strip.price.max = Money::from_cents(1560);
        strip.rating = 4.5;

        let mut power = sample_product("prod-003", 1580);
        power.name = "Portable Solar Power Bank".to_string();
        power.category = "Solar Products".to_string();
        power.description = "Rugged and waterproof".to_string();
        power.price.max = Money::from_cents(2250);
        power.rating = 4.3;

        vec![Arc::new(earbuds), Arc::new(strip), Arc::new(power)]
    }

    fn ids<T: AsRef<str>>(items: impl IntoIterator<Item = T>) -> Vec<String> {
        items.into_iter().map(|s| s.as_ref().to_string()).collect()
    }

    #[test]
    fn test_default_query_keeps_catalog_order() {
        let hits = ProductQuery::default().apply(&products());
        assert_eq!(
            ids(hits.iter().map(|p| p.id.as_str())),
            vec!["prod-001", "prod-002", "prod-003"]
        );
    }

    #[test]
    fn test_text_matches_name_description_and_tags() {
        let query = ProductQuery {
            text: Some("  WATERPROOF ".to_string()),
            ..Default::default()
        };
        let hits = query.apply(&products());
        assert_eq!(
            ids(hits.iter().map(|p| p.id.as_str())),
            vec!["prod-001", "prod-003"]
        );

        let query = ProductQuery {
            text: Some("led strip".to_string()),
            ..Default::default()
        };
        assert_eq!(query.apply(&products()).len(), 1);
    }

    #[test]
    fn test_category_filter() {
        let query = ProductQuery {
            category: Some("Solar Products".to_string()),
            ..Default::default()
        };
        assert_eq!(query.apply(&products())[0].id, "prod-003");

        let query = ProductQuery {
            category: Some("all".to_string()),
            ..Default::default()
        };
        assert_eq!(query.apply(&products()).len(), 3);
    }

    #[test]
    fn test_price_window_uses_band_edges() {
        let query = ProductQuery {
            price_min: Some(Money::from_cents(1000)),
            price_max: Some(Money::from_cents(2000)),
            ..Default::default()
        };
        let hits = query.apply(&products());
        // 8.90 floor is too low, 22.50 ceiling too high
        assert_eq!(ids(hits.iter().map(|p| p.id.as_str())), vec!["prod-001"]);
    }

    #[test]
    fn test_product_sorts() {
        let sorted = |sort| {
            let query = ProductQuery {
                sort,
                ..Default::default()
            };
            ids(query.apply(&products()).iter().map(|p| p.id.as_str()))
        };

        assert_eq!(
            sorted(ProductSort::PriceLowToHigh),
            vec!["prod-002", "prod-001", "prod-003"]
        );
        assert_eq!(
            sorted(ProductSort::PriceHighToLow),
            vec!["prod-003", "prod-001", "prod-002"]
        );
        assert_eq!(
            sorted(ProductSort::Rating),
            vec!["prod-001", "prod-002", "prod-003"]
        );
        assert_eq!(
            sorted(ProductSort::Newest),
            vec!["prod-001", "prod-002", "prod-003"]
        );
    }

    #[test]
    fn test_sort_wire_names() {
        let sort: ProductSort = serde_json::from_str("\"price-low\"").unwrap();
        assert_eq!(sort, ProductSort::PriceLowToHigh);
        let sort: SupplierSort = serde_json::from_str("\"response-rate\"").unwrap();
        assert_eq!(sort, SupplierSort::ResponseRate);
    }

    fn suppliers() -> Vec<Arc<Supplier>> {
        let gz = sample_supplier("sup-001");

        let mut sz = sample_supplier("sup-002");
        sz.company_name = "Shenzhen Tech Innovation Ltd.".to_string();
        sz.name = "Li Ming".to_string();
        sz.business_type = "Trading Company".to_string();
        sz.main_products = vec!["LED Lighting".to_string()];
        sz.rating = 4.6;
        sz.response_rate = 95;
        sz.established = 2012;
        sz.stats.total_products = 89;

        let mut yw = sample_supplier("sup-003");
        yw.company_name = "Yiwu Global Trading Co.".to_string();
        yw.name = "Wang Fang".to_string();
        yw.business_type = "Trading Company".to_string();
        yw.main_products = vec!["Home & Garden".to_string()];
        yw.rating = 4.4;
        yw.response_rate = 99;
        yw.established = 2015;
        yw.stats.total_products = 234;

        vec![Arc::new(gz), Arc::new(sz), Arc::new(yw)]
    }

    #[test]
    fn test_supplier_filters() {
        let query = SupplierQuery {
            text: Some("lighting".to_string()),
            ..Default::default()
        };
        assert_eq!(query.apply(&suppliers())[0].id, "sup-002");

        let query = SupplierQuery {
            business_type: Some("Trading Company".to_string()),
            min_rating: Some(4.5),
            ..Default::default()
        };
        let hits = query.apply(&suppliers());
        assert_eq!(ids(hits.iter().map(|s| s.id.as_str())), vec!["sup-002"]);

        let query = SupplierQuery {
            country: Some("Germany".to_string()),
            ..Default::default()
        };
        assert!(query.apply(&suppliers()).is_empty());
    }

    #[test]
    fn test_supplier_sorts() {
        let sorted = |sort| {
            let query = SupplierQuery {
                sort,
                ..Default::default()
            };
            ids(query.apply(&suppliers()).iter().map(|s| s.id.as_str()))
        };

        assert_eq!(sorted(SupplierSort::Rating), vec!["sup-001", "sup-002", "sup-003"]);
        assert_eq!(
            sorted(SupplierSort::ResponseRate),
            vec!["sup-003", "sup-001", "sup-002"]
        );
        assert_eq!(
            sorted(SupplierSort::Established),
            vec!["sup-001", "sup-002", "sup-003"]
        );
        assert_eq!(sorted(SupplierSort::Products), vec!["sup-003", "sup-002", "sup-001"]);
    }
}
