//! # TradePost Storefront Entry Point
//!
//! Runs a scripted buyer session against the embedded marketplace data and
//! logs each command's response.
//!
//! ## Session Script
//! 1. Initialize tracing (logging)
//! 2. Load configuration from `TRADEPOST_*` environment variables
//! 3. Search the catalog, fill the cart, check MOQs
//! 4. Submit a quote request and list shipped orders
//! 5. Message a supplier and wait for the auto-reply
//! 6. Print the dashboard

use tracing::{error, info, warn};
use tradepost_core::query::{ProductQuery, ProductSort};
use tradepost_core::Money;
use tradepost_storefront::commands::{cart, dashboard, messaging, order, product, quote};
use tradepost_storefront::error::ApiError;
use tradepost_storefront::state::{ConfigState, OrderStatus};
use tradepost_storefront::{init_tracing, Storefront};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    let mut app = match Storefront::new(ConfigState::from_env()) {
        Ok(app) => app,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run_session(&mut app).await {
        error!(code = ?e.code, "{}", e.message);
        std::process::exit(1);
    }
}

async fn run_session(app: &mut Storefront) -> Result<(), ApiError> {
    let query = ProductQuery {
        text: Some("waterproof".to_string()),
        sort: ProductSort::PriceLowToHigh,
        ..Default::default()
    };
    for card in product::search_products(&app.catalog, query, None)? {
        info!(
            id = %card.id,
            name = %card.name,
            from = %card.price.min,
            moq = card.moq,
            "Search hit"
        );
    }

    app.cart.subscribe(|state| {
        info!(lines = state.line_count(), total = %state.total_price(), "Cart changed");
    });

    cart::add_to_cart(&app.catalog, &mut app.cart, "prod-001", None)?;
    cart::add_to_cart(&app.catalog, &mut app.cart, "prod-003", Some(10))?;
    cart::close_cart(&mut app.cart);

    for warning in cart::check_moq(&app.cart) {
        warn!(
            product = %warning.product_name,
            quantity = warning.quantity,
            moq = warning.moq,
            "Below minimum order quantity"
        );
    }

    let request = quote::submit_quote_request(
        &app.catalog,
        &mut app.quotes,
        app.catalog.buyer(),
        quote::QuoteRequestForm {
            product_id: "prod-001".to_string(),
            quantity: 500,
            target_price: Some(Money::from_cents(1150)),
            requirements: "Custom logo printing on the charging case".to_string(),
            deadline: None,
        },
    )?;
    info!(request_id = %request.id, "Quote requested");

    for shipped in order::list_orders(&app.orders, Some(OrderStatus::Shipped), None)? {
        info!(
            order = %shipped.order_number,
            supplier = %shipped.supplier_company,
            tracking = ?shipped.tracking_number,
            "Order in transit"
        );
    }

    let buyer = app.catalog.buyer();
    messaging::send_message(
        &mut app.messages,
        buyer,
        "conv-001",
        "Could you also quote 1000 units?",
    )?;
    if let Some(reply) = app.messages.next_reply().await {
        info!(from = %reply.sender_name, content = %reply.content, "Supplier replied");
    }

    let summary = dashboard::get_dashboard(
        &app.cart,
        &app.quotes,
        &app.orders,
        &app.messages,
        &app.config,
    );
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => return Err(ApiError::internal(e.to_string())),
    }

    Ok(())
}
