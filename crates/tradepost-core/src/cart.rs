//! # Cart State
//!
//! The cart's data, the actions that change it, and the reducer that applies
//! them.
//!
//! ## Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    reduce(&CartState, CartAction) -> CartState          │
//! │                                                                         │
//! │  Action             Items                          is_open              │
//! │  ──────             ─────                          ───────              │
//! │  ADD_ITEM           merge into existing line,      unchanged            │
//! │                     or append a new one                                 │
//! │  REMOVE_ITEM        drop matching line (or no-op)  unchanged            │
//! │  UPDATE_QUANTITY    qty <= 0: as REMOVE_ITEM       unchanged            │
//! │                     else replace qty (or no-op)                         │
//! │  CLEAR_CART         empty                          unchanged            │
//! │  OPEN_CART          unchanged                      true                 │
//! │  CLOSE_CART         unchanged                      false                │
//! │  TOGGLE_CART        unchanged                      !is_open             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line item per product id, in insertion order
//! - Every stored quantity is >= 1
//! - A line's selected price never changes after insertion
//!
//! The reducer never mutates its input. Each call builds a fresh `CartState`,
//! so snapshots handed to readers stay valid forever.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Line Item
// =============================================================================

/// One row in the cart: a product, how many, and the price locked in when it
/// was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLineItem {
    /// Shared with the catalog, never copied.
    #[ts(as = "Product")]
    pub product: Arc<Product>,

    /// Always >= 1 while the line exists.
    pub quantity: i64,

    /// Unit price locked in at add time.
    pub selected_price: Money,
}

impl CartLineItem {
    /// Product id this line is keyed by.
    #[inline]
    pub fn product_id(&self) -> &str {
        &self.product.id
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.selected_price.multiply_quantity(self.quantity)
    }

    /// True when the line is under the supplier's minimum order quantity.
    ///
    /// Advisory only: the reducer does not look at this.
    #[inline]
    pub fn is_below_moq(&self) -> bool {
        self.quantity < self.product.moq
    }
}

// =============================================================================
// Cart State
// =============================================================================

/// Everything the cart UI renders: the line items and whether the sidebar is
/// open.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartState {
    /// Insertion order is display order.
    pub items: Vec<CartLineItem>,

    /// Sidebar visibility. Starts closed.
    pub is_open: bool,
}

impl CartState {
    /// An empty, closed cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the line for a product.
    pub fn item(&self, product_id: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|i| i.product_id() == product_id)
    }

    /// Sum of quantities across all lines (not the number of lines).
    pub fn total_items(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Sum of `selected_price × quantity` across all lines.
    ///
    /// Single currency: no conversion is attempted.
    pub fn total_price(&self) -> Money {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Number of distinct products in the cart.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Lines currently under their product's MOQ, in display order.
    pub fn below_moq(&self) -> impl Iterator<Item = &CartLineItem> {
        self.items.iter().filter(|i| i.is_below_moq())
    }
}

// =============================================================================
// Actions
// =============================================================================

/// A requested cart transition.
///
/// ## Wire Format
/// Adjacently tagged, the way the web frontend emits actions:
/// ```json
/// { "type": "ADD_ITEM", "payload": { "product": {...}, "quantity": 100, "selectedPrice": 1250 } }
/// { "type": "REMOVE_ITEM", "payload": "prod-001" }
/// { "type": "UPDATE_QUANTITY", "payload": { "productId": "prod-001", "quantity": 3 } }
/// { "type": "TOGGLE_CART" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum CartAction {
    AddItem {
        #[ts(as = "Product")]
        product: Arc<Product>,
        quantity: i64,
        #[serde(rename = "selectedPrice")]
        selected_price: Money,
    },
    RemoveItem(String),
    UpdateQuantity {
        #[serde(rename = "productId")]
        product_id: String,
        quantity: i64,
    },
    ClearCart,
    ToggleCart,
    OpenCart,
    CloseCart,
}

impl CartAction {
    /// Wire name of the action, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CartAction::AddItem { .. } => "ADD_ITEM",
            CartAction::RemoveItem(_) => "REMOVE_ITEM",
            CartAction::UpdateQuantity { .. } => "UPDATE_QUANTITY",
            CartAction::ClearCart => "CLEAR_CART",
            CartAction::ToggleCart => "TOGGLE_CART",
            CartAction::OpenCart => "OPEN_CART",
            CartAction::CloseCart => "CLOSE_CART",
        }
    }
}

// =============================================================================
// Reducer
// =============================================================================

/// Applies `action` to `state`, returning the next state.
///
/// Total over all inputs:
/// - removing or updating an absent product is a no-op
/// - any quantity that ends up <= 0 removes the line
/// - adding a fresh product with quantity <= 0 is a no-op
/// - a negative selected price is stored as zero
pub fn reduce(state: &CartState, action: CartAction) -> CartState {
    match action {
        CartAction::AddItem {
            product,
            quantity,
            selected_price,
        } => CartState {
            items: add_item(&state.items, product, quantity, selected_price),
            is_open: state.is_open,
        },
        CartAction::RemoveItem(product_id) => CartState {
            items: remove_item(&state.items, &product_id),
            is_open: state.is_open,
        },
        CartAction::UpdateQuantity {
            product_id,
            quantity,
        } => CartState {
            items: update_quantity(&state.items, &product_id, quantity),
            is_open: state.is_open,
        },
        CartAction::ClearCart => CartState {
            items: Vec::new(),
            is_open: state.is_open,
        },
        CartAction::OpenCart => with_visibility(state, true),
        CartAction::CloseCart => with_visibility(state, false),
        CartAction::ToggleCart => with_visibility(state, !state.is_open),
    }
}

fn add_item(
    items: &[CartLineItem],
    product: Arc<Product>,
    quantity: i64,
    selected_price: Money,
) -> Vec<CartLineItem> {
    if items.iter().any(|i| i.product_id() == product.id) {
        // Merge path: quantity only, the original price stays.
        return items
            .iter()
            .filter_map(|item| {
                if item.product_id() != product.id {
                    return Some(item.clone());
                }
                let merged = item.quantity.saturating_add(quantity);
                (merged > 0).then(|| CartLineItem {
                    quantity: merged,
                    ..item.clone()
                })
            })
            .collect();
    }

    let mut next = items.to_vec();
    if quantity > 0 {
        next.push(CartLineItem {
            product,
            quantity,
            selected_price: selected_price.non_negative(),
        });
    }
    next
}

fn remove_item(items: &[CartLineItem], product_id: &str) -> Vec<CartLineItem> {
    items
        .iter()
        .filter(|i| i.product_id() != product_id)
        .cloned()
        .collect()
}

fn update_quantity(items: &[CartLineItem], product_id: &str, quantity: i64) -> Vec<CartLineItem> {
    if quantity <= 0 {
        return remove_item(items, product_id);
    }

    items
        .iter()
        .map(|item| {
            if item.product_id() == product_id {
                CartLineItem {
                    quantity,
                    ..item.clone()
                }
            } else {
                item.clone()
            }
        })
        .collect()
}

fn with_visibility(state: &CartState, is_open: bool) -> CartState {
    CartState {
        items: state.items.clone(),
        is_open,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
