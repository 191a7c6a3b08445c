//! # Domain Types
//!
//! Core domain types used throughout TradePost.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐ 1    * ┌─────────────────┐   ┌─────────────────┐  │
//! │  │    Supplier     │◄───────│     Product     │   │  QuoteRequest   │  │
//! │  │  ─────────────  │  Arc   │  ─────────────  │   │  ─────────────  │  │
//! │  │  id             │        │  id             │   │  product_id     │  │
//! │  │  company_name   │        │  price (range)  │   │  supplier_id    │  │
//! │  │  location       │        │  moq            │   │  quantity       │  │
//! │  │  stats          │        │  supplier       │   │  status         │  │
//! │  └─────────────────┘        └─────────────────┘   └─────────────────┘  │
//! │                                                                         │
//! │  Products are read-only to the cart; line items share them via Arc.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Price Range
// =============================================================================

/// Tiered wholesale price, quoted as a min/max band per unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceRange {
    /// Lowest unit price (largest volume tier).
    pub min: Money,

    /// Highest unit price (smallest volume tier).
    pub max: Money,

    /// ISO 4217 currency code.
    pub currency: String,
}

// =============================================================================
// Supplier
// =============================================================================

/// Where a supplier operates from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SupplierLocation {
    pub country: String,
    pub city: String,
    pub address: String,
}

/// How to reach a supplier outside the message center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SupplierContact {
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Trading statistics shown on the supplier profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SupplierStats {
    pub total_products: u32,
    pub total_orders: u32,
    /// Percentage of buyers who ordered more than once (0-100).
    pub repeat_buyer_rate: u8,
}

/// A company selling on the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Supplier {
    /// Unique identifier (e.g. `sup-001`).
    pub id: String,

    /// Contact person.
    pub name: String,

    pub company_name: String,
    pub logo: String,
    pub cover_image: String,
    pub location: SupplierLocation,

    /// Year the company was founded.
    pub established: u16,

    /// Head-count band, e.g. "201-500".
    pub employee_count: String,

    /// "Manufacturer", "Trading Company", ...
    pub business_type: String,

    pub main_products: Vec<String>,
    pub certifications: Vec<String>,
    pub rating: f32,
    pub review_count: u32,

    /// Percentage of inquiries answered (0-100).
    pub response_rate: u8,

    /// Typical first-response time, e.g. "< 2 hours".
    pub response_time: String,

    pub is_gold_supplier: bool,
    pub is_verified: bool,
    pub trade_assurance: bool,
    pub contact: SupplierContact,
    pub stats: SupplierStats,
}

// =============================================================================
// Product
// =============================================================================

/// A product listed in the catalog.
///
/// Supplied by the catalog and never mutated afterwards. The owning supplier
/// is shared, not copied, across all of its products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier (e.g. `prod-001`).
    pub id: String,

    /// Display name.
    pub name: String,

    pub description: String,

    /// Unit price band.
    pub price: PriceRange,

    /// Minimum Order Quantity. Advisory; the cart does not enforce it.
    pub moq: i64,

    pub category: String,
    pub images: Vec<String>,

    /// Owning supplier.
    #[ts(as = "Supplier")]
    pub supplier: Arc<Supplier>,

    /// Spec sheet, in display order of the keys.
    pub specifications: BTreeMap<String, String>,

    pub tags: Vec<String>,
    pub rating: f32,
    pub review_count: u32,
    pub is_verified: bool,
}

impl Product {
    /// The price the storefront locks in when the product is added to the
    /// cart: the bottom of the band.
    #[inline]
    pub fn default_selected_price(&self) -> Money {
        self.price.min
    }
}

// =============================================================================
// User
// =============================================================================

/// Which side of the marketplace a user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum UserRole {
    Buyer,
    Supplier,
}

/// A signed-in marketplace user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub company: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub verified: bool,
}

// =============================================================================
// Quote Requests
// =============================================================================

/// Where a quote request is in its negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuoteStatus {
    /// Sent, waiting for the supplier.
    Pending,
    /// Supplier has answered with a price.
    Quoted,
    /// Buyer and supplier are going back and forth.
    Negotiating,
    /// Deal struck.
    Accepted,
    /// Either side walked away.
    Rejected,
}

impl QuoteStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [QuoteStatus; 5] = [
        QuoteStatus::Pending,
        QuoteStatus::Quoted,
        QuoteStatus::Negotiating,
        QuoteStatus::Accepted,
        QuoteStatus::Rejected,
    ];

    /// Whether the request can move from `self` to `next`.
    pub fn can_transition_to(self, next: QuoteStatus) -> bool {
        use QuoteStatus::*;

        matches!(
            (self, next),
            (Pending, Quoted)
                | (Pending, Rejected)
                | (Quoted, Negotiating)
                | (Quoted, Accepted)
                | (Quoted, Rejected)
                | (Negotiating, Quoted)
                | (Negotiating, Accepted)
                | (Negotiating, Rejected)
        )
    }

    /// Accepted and Rejected are final.
    pub fn is_terminal(self) -> bool {
        matches!(self, QuoteStatus::Accepted | QuoteStatus::Rejected)
    }
}

/// A buyer's request for a supplier quotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuoteRequest {
    pub id: String,
    pub product_id: String,
    pub supplier_id: String,
    pub buyer_id: String,
    pub quantity: i64,

    /// Unit price the buyer hopes for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_price: Option<Money>,

    pub requirements: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub deadline: Option<NaiveDate>,

    pub status: QuoteStatus,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Fixtures
// =============================================================================

/// Small fixtures for tests and doc examples across the workspace.
#[doc(hidden)]
pub mod test_support {
    use super::*;

    pub fn sample_supplier(id: &str) -> Supplier {
        Supplier {
            id: id.to_string(),
            name: "Zhang Wei".to_string(),
            company_name: format!("Supplier {id} Co., Ltd."),
            logo: String::new(),
            cover_image: String::new(),
            location: SupplierLocation {
                country: "China".to_string(),
                city: "Guangzhou".to_string(),
                address: "Tianhe District".to_string(),
            },
            established: 2008,
            employee_count: "201-500".to_string(),
            business_type: "Manufacturer".to_string(),
            main_products: vec!["Consumer Electronics".to_string()],
            certifications: vec!["ISO 9001".to_string()],
            rating: 4.8,
            review_count: 100,
            response_rate: 98,
            response_time: "< 2 hours".to_string(),
            is_gold_supplier: true,
            is_verified: true,
            trade_assurance: true,
            contact: SupplierContact {
                email: "sales@example.com".to_string(),
                phone: "+86 20 0000 0000".to_string(),
                whatsapp: None,
                website: None,
            },
            stats: SupplierStats {
                total_products: 10,
                total_orders: 100,
                repeat_buyer_rate: 80,
            },
        }
    }

    pub fn sample_product(id: &str, min_price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {id}"),
            description: String::new(),
            price: PriceRange {
                min: Money::from_cents(min_price_cents),
                max: Money::from_cents(min_price_cents * 2),
                currency: "USD".to_string(),
            },
            moq: 10,
            category: "Consumer Electronics".to_string(),
            images: Vec::new(),
            supplier: Arc::new(sample_supplier("sup-001")),
            specifications: BTreeMap::new(),
            tags: Vec::new(),
            rating: 4.5,
            review_count: 10,
            is_verified: true,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
