//! # Cart Store
//!
//! Owns the session's [`CartState`] and is the only way to change it.
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CartStore                                            │
//! │                                                                         │
//! │  add_item() ─┐                                                          │
//! │  remove_item()├──► dispatch(action)                                     │
//! │  toggle_cart()┘        │                                                │
//! │                        ▼                                                │
//! │               next = reduce(&current, action)                           │
//! │                        │                                                │
//! │                        ▼                                                │
//! │               current = Arc::new(next)    (old snapshots stay valid)    │
//! │                        │                                                │
//! │                        ▼                                                │
//! │               every listener(&current), in subscription order           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! The store is created once at startup and handed to consumers by
//! reference. Mutation needs `&mut CartStore`, so there is exactly one writer
//! at a time and no lock. Readers get an `Arc<CartState>` snapshot that later
//! dispatches cannot change.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::cart::{reduce, CartAction, CartLineItem, CartState};
use crate::money::Money;
use crate::types::Product;

/// Callback invoked after every dispatch with the new state.
pub type Listener = Box<dyn FnMut(&CartState)>;

/// Handle returned by [`CartStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// The session-wide cart.
pub struct CartStore {
    state: Arc<CartState>,
    listeners: Vec<(Subscription, Listener)>,
    next_subscription: u64,
}

impl CartStore {
    /// Creates an empty, closed cart with no listeners.
    pub fn new() -> Self {
        CartStore {
            state: Arc::new(CartState::new()),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> Arc<CartState> {
        Arc::clone(&self.state)
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.state.items
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Applies an action and notifies every listener.
    ///
    /// Listeners run even when the action turned out to be a no-op.
    pub fn dispatch(&mut self, action: CartAction) {
        let kind = action.kind();
        let next = reduce(&self.state, action);
        self.state = Arc::new(next);

        debug!(
            action = kind,
            lines = self.state.line_count(),
            total_items = self.state.total_items(),
            is_open = self.state.is_open,
            "cart dispatch"
        );

        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }

    /// Parses an action as the frontend sends it and dispatches it.
    ///
    /// A payload that does not parse is dropped: the state is left as is,
    /// nobody is notified, and `false` is returned.
    pub fn dispatch_json(&mut self, raw: &str) -> bool {
        match serde_json::from_str::<CartAction>(raw) {
            Ok(action) => {
                self.dispatch(action);
                true
            }
            Err(err) => {
                warn!(error = %err, "ignoring malformed cart action");
                false
            }
        }
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Registers a listener. It is called after every later dispatch.
    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&CartState) + 'static,
    {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((subscription, Box::new(listener)));
        subscription
    }

    /// Removes a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(s, _)| *s != subscription);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Adds `quantity` of `product` at `selected_price`, merging into an
    /// existing line if the product is already in the cart.
    pub fn add_item(&mut self, product: Arc<Product>, quantity: i64, selected_price: Money) {
        self.dispatch(CartAction::AddItem {
            product,
            quantity,
            selected_price,
        });
    }

    pub fn remove_item(&mut self, product_id: impl Into<String>) {
        self.dispatch(CartAction::RemoveItem(product_id.into()));
    }

    /// Sets a line's quantity. Zero or negative removes the line.
    pub fn update_quantity(&mut self, product_id: impl Into<String>, quantity: i64) {
        self.dispatch(CartAction::UpdateQuantity {
            product_id: product_id.into(),
            quantity,
        });
    }

    pub fn clear_cart(&mut self) {
        self.dispatch(CartAction::ClearCart);
    }

    pub fn open_cart(&mut self) {
        self.dispatch(CartAction::OpenCart);
    }

    pub fn close_cart(&mut self) {
        self.dispatch(CartAction::CloseCart);
    }

    pub fn toggle_cart(&mut self) {
        self.dispatch(CartAction::ToggleCart);
    }

    // =========================================================================
    // Derived
    // =========================================================================

    /// Sum of quantities, not the number of lines.
    pub fn total_items(&self) -> i64 {
        self.state.total_items()
    }

    pub fn total_price(&self) -> Money {
        self.state.total_price()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
