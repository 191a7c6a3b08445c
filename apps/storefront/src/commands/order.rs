//! # Order Commands
//!
//! The buyer's order management view: status tabs, search, and the
//! statistic cards above the order table.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Total 3 │ Pending 0 │ Shipped 1 │ Completed 1   ◄── get_order_counts    │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  [All] [Pending] [Confirmed] [Shipped] [Completed]  ◄── status filter   │
//! │  ORD-2024-002  Li Ming     2 items  $2728.00  confirmed  pending        │
//! │  ORD-2024-001  Zhang Wei   1 item   $6250.00  shipped    paid           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;
use tradepost_core::validation::validate_search_query;

use crate::error::ApiError;
use crate::state::{Order, OrderBook, OrderCount, OrderStatus};

/// Statistic cards for the order view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCounts {
    pub total: usize,

    /// One entry per status, in fulfilment order
    pub by_status: Vec<OrderCount>,
}

/// Lists orders, newest first.
///
/// ## Arguments
/// * `status` - The selected tab; `None` is "All Orders"
/// * `search` - Matches order number, supplier, product names, or tracking number
///
/// ## Errors
/// Returns `VALIDATION_ERROR` if the search text is too long.
pub fn list_orders(
    orders: &OrderBook,
    status: Option<OrderStatus>,
    search: Option<&str>,
) -> Result<Vec<Order>, ApiError> {
    debug!(status = ?status, search = ?search, "list_orders command");
    let search = search.map(validate_search_query).transpose()?;
    Ok(orders.list(status, search.as_deref()))
}

pub fn get_order(orders: &OrderBook, order_id: &str) -> Result<Order, ApiError> {
    debug!(order_id = %order_id, "get_order command");
    Ok(orders.get(order_id)?.clone())
}

pub fn get_order_counts(orders: &OrderBook) -> OrderCounts {
    debug!("get_order_counts command");
    OrderCounts {
        total: orders.len(),
        by_status: orders.counts_by_status(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_list_orders_by_tab() {
        let orders = OrderBook::seeded().unwrap();

        assert_eq!(list_orders(&orders, None, None).unwrap().len(), 3);

        let confirmed = list_orders(&orders, Some(OrderStatus::Confirmed), None).unwrap();
        assert_eq!(confirmed.len(), 1);
        assert_eq!(confirmed[0].order_number, "ORD-2024-002");

        assert!(list_orders(&orders, Some(OrderStatus::Pending), None)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_list_orders_search() {
        let orders = OrderBook::seeded().unwrap();

        let hits = list_orders(&orders, None, Some("yiwu")).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "order-003");

        let too_long = "x".repeat(300);
        let err = list_orders(&orders, None, Some(&too_long)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_get_order() {
        let orders = OrderBook::seeded().unwrap();

        let order = get_order(&orders, "order-001").unwrap();
        assert_eq!(order.tracking_number.as_deref(), Some("TRK123456789"));

        let err = get_order(&orders, "order-404").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_order_counts() {
        let counts = get_order_counts(&OrderBook::seeded().unwrap());
        assert_eq!(counts.total, 3);

        let count_of = |status| {
            counts
                .by_status
                .iter()
                .find(|c| c.status == status)
                .map(|c| c.count)
        };
        assert_eq!(count_of(OrderStatus::Pending), Some(0));
        assert_eq!(count_of(OrderStatus::Shipped), Some(1));
        assert_eq!(count_of(OrderStatus::Completed), Some(1));
        assert_eq!(count_of(OrderStatus::Cancelled), Some(0));

        let json = serde_json::to_value(&counts).unwrap();
        assert_eq!(json["byStatus"][3]["status"], "shipped");
    }
}
