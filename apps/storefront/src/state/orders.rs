//! # Order Book
//!
//! The buyer's purchase orders, seeded from mock data.
//!
//! ## Order Status
//! ```text
//! Pending ──► Confirmed ──► Paid ──► Shipped ──► Delivered ──► Completed
//!    │            │
//!    └────────────┴──► Cancelled
//! ```
//!
//! Orders are read-only in the storefront: the book lists, filters, and
//! counts them. Seed totals are checked on load so every order's
//! `totalAmount` equals the sum of its line totals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};
use tradepost_core::Money;

/// The seeded orders compiled into the crate.
pub const EMBEDDED_ORDERS: &str = include_str!("../../data/orders.json");

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Invalid order seed: {0}")]
    InvalidSeed(#[from] serde_json::Error),

    #[error("Order {order_id} totals do not add up")]
    TotalMismatch { order_id: String },
}

pub type OrderResult<T> = Result<T, OrderError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Paid,
    Shipped,
    Delivered,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Every status, in fulfilment order.
    pub const ALL: [OrderStatus; 7] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Paid,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Refunded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub total_price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifications: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub supplier_id: String,
    pub supplier_name: String,
    pub supplier_company: String,
    pub items: Vec<OrderItem>,
    pub total_amount: Money,
    pub currency: String,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub shipping_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Order {
    /// Case-insensitive match on order number, supplier, product names, or
    /// tracking number.
    fn matches(&self, needle: &str) -> bool {
        let contains = |field: &str| field.to_lowercase().contains(needle);

        contains(self.order_number.as_str())
            || contains(self.supplier_name.as_str())
            || contains(self.supplier_company.as_str())
            || self.items.iter().any(|item| contains(item.product_name.as_str()))
            || self.tracking_number.as_deref().map_or(false, contains)
    }

    fn totals_add_up(&self) -> bool {
        let lines_ok = self
            .items
            .iter()
            .all(|item| item.unit_price.multiply_quantity(item.quantity) == item.total_price);
        let total: Money = self.items.iter().map(|item| item.total_price).sum();
        lines_ok && total == self.total_amount
    }
}

/// Count of orders in one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCount {
    pub status: OrderStatus,
    pub count: usize,
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    orders: Vec<Order>,
}

#[derive(Debug, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    /// Loads the embedded orders.
    pub fn seeded() -> OrderResult<Self> {
        Self::from_json(EMBEDDED_ORDERS)
    }

    /// Loads orders from a seed document.
    ///
    /// ## Errors
    /// - [`OrderError::InvalidSeed`] if the document does not parse
    /// - [`OrderError::TotalMismatch`] if line or order totals are inconsistent
    pub fn from_json(json: &str) -> OrderResult<Self> {
        let seed: SeedFile = serde_json::from_str(json)?;

        if let Some(order) = seed.orders.iter().find(|o| !o.totals_add_up()) {
            return Err(OrderError::TotalMismatch {
                order_id: order.id.clone(),
            });
        }

        info!(orders = seed.orders.len(), "Orders loaded");
        Ok(OrderBook {
            orders: seed.orders,
        })
    }

    /// Orders, newest first, optionally limited to one status and a search
    /// text. A blank search matches everything.
    pub fn list(&self, status: Option<OrderStatus>, search: Option<&str>) -> Vec<Order> {
        let needle = search
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        let mut list: Vec<Order> = self
            .orders
            .iter()
            .filter(|o| status.map_or(true, |s| o.status == s))
            .filter(|o| needle.as_deref().map_or(true, |n| o.matches(n)))
            .cloned()
            .collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        debug!(status = ?status, matched = list.len(), "Orders listed");
        list
    }

    pub fn get(&self, order_id: &str) -> OrderResult<&Order> {
        self.orders
            .iter()
            .find(|o| o.id == order_id)
            .ok_or_else(|| OrderError::OrderNotFound(order_id.to_string()))
    }

    /// One entry per status, in fulfilment order, zeros included.
    pub fn counts_by_status(&self) -> Vec<OrderCount> {
        OrderStatus::ALL
            .iter()
            .map(|&status| OrderCount {
                status,
                count: self.orders.iter().filter(|o| o.status == status).count(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_loads() {
        let book = OrderBook::seeded().unwrap();
        assert_eq!(book.len(), 3);

        let order = book.get("order-002").unwrap();
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.total_amount, Money::from_cents(272_800));
        assert_eq!(order.payment_status, PaymentStatus::Pending);
        assert!(order.tracking_number.is_none());
    }

    #[test]
    fn test_list_newest_first() {
        let book = OrderBook::seeded().unwrap();
        let numbers: Vec<String> = book
            .list(None, None)
            .into_iter()
            .map(|o| o.order_number)
            .collect();
        assert_eq!(numbers, vec!["ORD-2024-002", "ORD-2024-001", "ORD-2024-003"]);
    }

    #[test]
    fn test_filter_by_status_and_search() {
        let book = OrderBook::seeded().unwrap();

        let shipped = book.list(Some(OrderStatus::Shipped), None);
        assert_eq!(shipped.len(), 1);
        assert_eq!(shipped[0].id, "order-001");

        // product name, case-insensitive
        let solar = book.list(None, Some("  SOLAR "));
        assert_eq!(solar.len(), 1);
        assert_eq!(solar[0].id, "order-002");

        assert_eq!(book.list(None, Some("trk1234")).len(), 1);
        assert!(book.list(Some(OrderStatus::Completed), Some("earbuds")).is_empty());
        assert_eq!(book.list(None, Some("   ")).len(), 3);
    }

    #[test]
    fn test_counts_by_status() {
        let book = OrderBook::seeded().unwrap();
        let counts = book.counts_by_status();

        assert_eq!(counts.len(), OrderStatus::ALL.len());
        assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), 3);
        assert_eq!(counts[1], OrderCount { status: OrderStatus::Confirmed, count: 1 });
        assert_eq!(counts[0], OrderCount { status: OrderStatus::Pending, count: 0 });
    }

    #[test]
    fn test_unknown_order() {
        let book = OrderBook::seeded().unwrap();
        assert!(matches!(book.get("order-999"), Err(OrderError::OrderNotFound(_))));
    }

    #[test]
    fn test_seed_totals_checked() {
        let json = r#"{"orders": [{
            "id": "order-x", "orderNumber": "ORD-X", "supplierId": "sup-001",
            "supplierName": "Zhang Wei", "supplierCompany": "GZ",
            "items": [{"id": "item-x", "productId": "prod-001", "productName": "Earbuds",
                       "quantity": 2, "unitPrice": 100, "totalPrice": 200}],
            "totalAmount": 250, "currency": "USD", "status": "pending",
            "paymentStatus": "pending", "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z", "shippingAddress": "Somewhere"
        }]}"#;

        assert!(matches!(
            OrderBook::from_json(json),
            Err(OrderError::TotalMismatch { order_id }) if order_id == "order-x"
        ));
        assert!(matches!(
            OrderBook::from_json("{"),
            Err(OrderError::InvalidSeed(_))
        ));
    }
}
