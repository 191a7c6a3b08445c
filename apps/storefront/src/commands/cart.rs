//! # Cart Commands
//!
//! Commands for cart manipulation. Every command goes through the session's
//! [`CartStore`], so subscribed views see each change.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Sidebar  │────►│  Quote / │       │
//! │  │  Cart    │     │          │     │  Open    │     │  Contact │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_to_cart       toggle_cart                        │
//! │                   update_item       check_moq                          │
//! │                   remove_item                                           │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart commands never fail on quantities: zero or negative updates remove
//! the line, and unknown product ids are ignored.

use serde::{Deserialize, Serialize};
use tracing::debug;
use tradepost_catalog::Catalog;
use tradepost_core::{CartLineItem, CartState, CartStore, Money};

use crate::error::ApiError;

/// Cart totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Number of distinct products
    pub line_count: usize,

    /// Sum of quantities
    pub total_items: i64,

    /// Sum of selected price × quantity
    pub total_price: Money,
}

impl From<&CartState> for CartTotals {
    fn from(state: &CartState) -> Self {
        CartTotals {
            line_count: state.line_count(),
            total_items: state.total_items(),
            total_price: state.total_price(),
        }
    }
}

/// Cart response including items, sidebar visibility, and totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLineItem>,
    pub is_open: bool,
    pub totals: CartTotals,
}

impl From<&CartState> for CartResponse {
    fn from(state: &CartState) -> Self {
        CartResponse {
            items: state.items.clone(),
            is_open: state.is_open,
            totals: CartTotals::from(state),
        }
    }
}

impl From<&CartStore> for CartResponse {
    fn from(cart: &CartStore) -> Self {
        CartResponse::from(&*cart.state())
    }
}

/// A cart line under its supplier's minimum order quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoqWarning {
    pub product_id: String,
    pub product_name: String,
    pub quantity: i64,
    pub moq: i64,
}

/// Gets the current cart contents.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart Sidebar                                                           │
/// │                                                                         │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  CART                                            2 products    │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  Wireless Bluetooth Earbuds Pro  x100 @ $12.50    $1250.00     │    │
/// │  │  Smart LED Strip Lights RGB      x50  @ $8.90      $445.00     │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  TOTAL (150 items)                                $1695.00     │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// │                                                                         │
/// │  get_cart() → { items: [...], isOpen: true, totals: {...} }             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(cart: &CartStore) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(cart)
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - Quantity defaults to the product's MOQ
/// - The selected price is the bottom of the product's price band
/// - If the product is already in the cart, the quantity is added to the
///   existing line and the original price is kept
/// - The sidebar opens so the buyer sees the new line; listeners are
///   notified once for the add and once for the open
///
/// ## Errors
/// Returns `NOT_FOUND` if the product id is not in the catalog.
pub fn add_to_cart(
    catalog: &Catalog,
    cart: &mut CartStore,
    product_id: &str,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let product = catalog.products().get_by_id(product_id)?;
    let quantity = quantity.unwrap_or(product.moq);
    debug!(product_id = %product_id, quantity = %quantity, "add_to_cart command");

    let price = product.default_selected_price();
    cart.add_item(product, quantity, price);
    cart.open_cart();
    Ok(CartResponse::from(&*cart))
}

/// Sets the quantity of an item in the cart.
///
/// ## Behavior
/// - Quantity 0 or less: removes the item
/// - Product not in cart: nothing changes
pub fn update_cart_item(cart: &mut CartStore, product_id: &str, quantity: i64) -> CartResponse {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");
    cart.update_quantity(product_id, quantity);
    CartResponse::from(&*cart)
}

/// Removes an item from the cart.
pub fn remove_from_cart(cart: &mut CartStore, product_id: &str) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");
    cart.remove_item(product_id);
    CartResponse::from(&*cart)
}

/// Clears all items from the cart. Sidebar visibility is kept.
pub fn clear_cart(cart: &mut CartStore) -> CartResponse {
    debug!("clear_cart command");
    cart.clear_cart();
    CartResponse::from(&*cart)
}

pub fn open_cart(cart: &mut CartStore) -> CartResponse {
    debug!("open_cart command");
    cart.open_cart();
    CartResponse::from(&*cart)
}

pub fn close_cart(cart: &mut CartStore) -> CartResponse {
    debug!("close_cart command");
    cart.close_cart();
    CartResponse::from(&*cart)
}

pub fn toggle_cart(cart: &mut CartStore) -> CartResponse {
    debug!("toggle_cart command");
    cart.toggle_cart();
    CartResponse::from(&*cart)
}

/// Dispatches a raw action as the web frontend emits it, e.g.
/// `{"type": "UPDATE_QUANTITY", "payload": {"productId": "prod-001", "quantity": 3}}`.
///
/// ## Errors
/// Returns `VALIDATION_ERROR` if the action does not parse. The cart is
/// left untouched and no listener runs, as with
/// [`CartStore::dispatch_json`]; only the command reports the rejection.
pub fn dispatch_cart_action(cart: &mut CartStore, action: &str) -> Result<CartResponse, ApiError> {
    debug!("dispatch_cart_action command");
    if !cart.dispatch_json(action) {
        return Err(ApiError::validation("Malformed cart action"));
    }
    Ok(CartResponse::from(&*cart))
}

/// Lists cart lines below their minimum order quantity.
///
/// Advisory: the cart accepts any positive quantity, the checkout view uses
/// this to warn the buyer.
pub fn check_moq(cart: &CartStore) -> Vec<MoqWarning> {
    debug!("check_moq command");
    cart.state()
        .below_moq()
        .map(|line| MoqWarning {
            product_id: line.product.id.clone(),
            product_name: line.product.name.clone(),
            quantity: line.quantity,
            moq: line.product.moq,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn setup() -> (Catalog, CartStore) {
        (Catalog::load_embedded().unwrap(), CartStore::new())
    }

    #[test]
    fn test_add_defaults_to_moq_and_min_price() {
        let (catalog, mut cart) = setup();
        let response = add_to_cart(&catalog, &mut cart, "prod-001", None).unwrap();

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].quantity, 100);
        assert_eq!(response.items[0].selected_price, Money::from_cents(1250));
        assert_eq!(response.totals.total_price, Money::from_cents(125_000));
        assert!(response.is_open);
    }

    #[test]
    fn test_add_opens_closed_sidebar() {
        let (catalog, mut cart) = setup();
        let opened = Rc::new(RefCell::new(Vec::new()));
        let seen = Rc::clone(&opened);
        cart.subscribe(move |state| seen.borrow_mut().push(state.is_open));

        close_cart(&mut cart);
        let response = add_to_cart(&catalog, &mut cart, "prod-003", Some(30)).unwrap();

        assert!(response.is_open);
        assert_eq!(*opened.borrow(), vec![false, false, true]);
    }

    #[test]
    fn test_add_unknown_product() {
        let (catalog, mut cart) = setup();
        let err = add_to_cart(&catalog, &mut cart, "prod-999", Some(1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(cart.state().is_empty());
    }

    #[test]
    fn test_merge_keeps_first_price() {
        let (catalog, mut cart) = setup();
        add_to_cart(&catalog, &mut cart, "prod-002", Some(50)).unwrap();
        let response = add_to_cart(&catalog, &mut cart, "prod-002", Some(25)).unwrap();

        assert_eq!(response.totals.line_count, 1);
        assert_eq!(response.totals.total_items, 75);
        assert_eq!(response.totals.total_price, Money::from_cents(890 * 75));
    }

    #[test]
    fn test_update_to_zero_removes() {
        let (catalog, mut cart) = setup();
        add_to_cart(&catalog, &mut cart, "prod-003", None).unwrap();

        let response = update_cart_item(&mut cart, "prod-003", 0);
        assert!(response.items.is_empty());
        assert_eq!(response.totals.total_price, Money::zero());
    }

    #[test]
    fn test_remove_and_clear() {
        let (catalog, mut cart) = setup();
        add_to_cart(&catalog, &mut cart, "prod-001", None).unwrap();
        add_to_cart(&catalog, &mut cart, "prod-004", None).unwrap();

        let response = remove_from_cart(&mut cart, "prod-001");
        assert_eq!(response.items[0].product.id, "prod-004");

        // absent id is a no-op
        let response = remove_from_cart(&mut cart, "prod-001");
        assert_eq!(response.totals.line_count, 1);

        let response = clear_cart(&mut cart);
        assert!(response.items.is_empty());
        assert!(response.is_open);
    }

    #[test]
    fn test_sidebar_commands() {
        let (_, mut cart) = setup();
        assert!(toggle_cart(&mut cart).is_open);
        assert!(!toggle_cart(&mut cart).is_open);
        assert!(open_cart(&mut cart).is_open);
        assert!(open_cart(&mut cart).is_open);
        assert!(!close_cart(&mut cart).is_open);
    }

    #[test]
    fn test_dispatch_cart_action() {
        let (catalog, mut cart) = setup();
        add_to_cart(&catalog, &mut cart, "prod-001", None).unwrap();

        let calls = Rc::new(RefCell::new(0));
        let seen = Rc::clone(&calls);
        cart.subscribe(move |_| *seen.borrow_mut() += 1);

        let response = dispatch_cart_action(
            &mut cart,
            r#"{"type":"UPDATE_QUANTITY","payload":{"productId":"prod-001","quantity":3}}"#,
        )
        .unwrap();
        assert_eq!(response.totals.total_items, 3);
        assert_eq!(*calls.borrow(), 1);

        let err = dispatch_cart_action(&mut cart, r#"{"type":"EXPLODE"}"#).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(*calls.borrow(), 1);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_check_moq() {
        let (catalog, mut cart) = setup();
        add_to_cart(&catalog, &mut cart, "prod-001", Some(40)).unwrap();
        add_to_cart(&catalog, &mut cart, "prod-002", None).unwrap();

        let warnings = check_moq(&cart);
        assert_eq!(
            warnings,
            vec![MoqWarning {
                product_id: "prod-001".to_string(),
                product_name: "Wireless Bluetooth Earbuds Pro".to_string(),
                quantity: 40,
                moq: 100,
            }]
        );
    }

    #[test]
    fn test_response_serialization() {
        let (catalog, mut cart) = setup();
        let response = add_to_cart(&catalog, &mut cart, "prod-002", None).unwrap();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["isOpen"], false);
        assert_eq!(json["totals"]["lineCount"], 1);
        assert_eq!(json["totals"]["totalPrice"], 44_500);
        assert_eq!(json["items"][0]["selectedPrice"], 890);
        assert_eq!(json["items"][0]["product"]["supplier"]["id"], "sup-002");
    }
}
