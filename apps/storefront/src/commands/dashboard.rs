//! # Dashboard Commands
//!
//! The buyer dashboard: one summary across cart, quotes, orders, and inbox.

use serde::Serialize;
use tracing::debug;
use tradepost_core::CartStore;

use crate::commands::cart::CartTotals;
use crate::state::{
    ConfigState, MessageCenter, OrderBook, OrderCount, QuoteBook, StatusCount,
};

/// Everything the dashboard header cards show.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub cart: CartTotals,

    /// Cart total formatted with the configured currency
    pub cart_total_display: String,

    /// One entry per quote status, in lifecycle order
    pub quotes_by_status: Vec<StatusCount>,

    /// Quotes not yet accepted or rejected
    pub open_quotes: usize,

    pub total_orders: usize,

    /// One entry per order status, in fulfilment order
    pub orders_by_status: Vec<OrderCount>,

    pub conversations: usize,
    pub unread_messages: usize,
}

pub fn get_dashboard(
    cart: &CartStore,
    quotes: &QuoteBook,
    orders: &OrderBook,
    messages: &MessageCenter,
    config: &ConfigState,
) -> DashboardSummary {
    debug!("get_dashboard command");
    let totals = CartTotals::from(&*cart.state());

    DashboardSummary {
        cart_total_display: config.format_currency(totals.total_price.cents()),
        cart: totals,
        quotes_by_status: quotes.counts_by_status(),
        open_quotes: quotes.open_count(),
        total_orders: orders.len(),
        orders_by_status: orders.counts_by_status(),
        conversations: messages.conversation_count(),
        unread_messages: messages.unread_count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::add_to_cart;
    use crate::state::AutoReply;
    use tradepost_catalog::Catalog;

    #[test]
    fn test_dashboard_summary() {
        let catalog = Catalog::load_embedded().unwrap();
        let config = ConfigState::default();
        let mut cart = CartStore::new();
        let quotes = QuoteBook::new();
        let orders = OrderBook::seeded().unwrap();
        let messages = MessageCenter::seeded(AutoReply::from_config(&config)).unwrap();

        add_to_cart(&catalog, &mut cart, "prod-004", None).unwrap();
        let summary = get_dashboard(&cart, &quotes, &orders, &messages, &config);

        assert_eq!(summary.cart.total_items, 20);
        assert_eq!(summary.cart_total_display, "$518.00");
        assert_eq!(summary.quotes_by_status.len(), 5);
        assert!(summary.quotes_by_status.iter().all(|c| c.count == 0));
        assert_eq!(summary.open_quotes, 0);
        assert_eq!(summary.total_orders, 3);
        assert_eq!(summary.orders_by_status.len(), 7);
        assert_eq!(
            summary.orders_by_status.iter().map(|c| c.count).sum::<usize>(),
            3
        );
        assert_eq!(summary.conversations, 2);
        assert_eq!(summary.unread_messages, 3);
    }
}
