//! # TradePost Storefront Library
//!
//! Application layer for the TradePost B2B sourcing storefront: session
//! state plus the commands the frontend calls.
//!
//! ## Module Organization
//! ```text
//! tradepost_storefront/
//! ├── lib.rs          ◄─── You are here (session setup & logging)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── Configuration state
//! │   ├── messaging.rs◄─── Conversations and the supplier auto-reply
//! │   ├── orders.rs   ◄─── Seeded purchase orders
//! │   └── quotes.rs   ◄─── Quote request book
//! ├── commands/       ◄─── cart, product, supplier, quote, order,
//! │                        messaging, dashboard, config
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Session State
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront                                           │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │   Catalog    │ │  CartStore   │ │  QuoteBook   │ │MessageCenter │   │
//! │  │  (shared,    │ │  (one per    │ │              │ │              │   │
//! │  │  read-only)  │ │   session)   │ │              │ │              │   │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘   │
//! │                                                                         │
//! │  Commands borrow the fields they need:                                 │
//! │  commands::cart::add_to_cart(&app.catalog, &mut app.cart, id, None)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tradepost_catalog::{Catalog, CatalogError};
use tradepost_core::{CartStore, User};

use state::{
    AutoReply, ConfigState, MessageCenter, MessagingError, OrderBook, OrderError, QuoteBook,
};

/// Why the storefront could not start.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to load catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Failed to load conversations: {0}")]
    Messaging(#[from] MessagingError),

    #[error("Failed to load orders: {0}")]
    Orders(#[from] OrderError),

    #[error("Configured buyer {configured} does not match catalog buyer {seeded}")]
    UnknownBuyer { configured: String, seeded: String },
}

/// One buyer session.
pub struct Storefront {
    pub catalog: Catalog,
    pub cart: CartStore,
    pub quotes: QuoteBook,
    pub orders: OrderBook,
    pub messages: MessageCenter,
    pub config: ConfigState,
}

impl Storefront {
    /// Builds a session from the embedded seed data.
    ///
    /// ## Startup Sequence
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────────┐
    /// │  1. Load catalog seed ──► suppliers, products, buyer                    │
    /// │  2. Check configured buyer against the seed                             │
    /// │  3. Empty, closed cart                                                  │
    /// │  4. Empty quote book                                                    │
    /// │  5. Seeded orders                                                       │
    /// │  6. Seeded conversations with the configured auto-reply                 │
    /// └─────────────────────────────────────────────────────────────────────────┘
    /// ```
    pub fn new(config: ConfigState) -> Result<Self, StartupError> {
        let catalog = Catalog::load_embedded()?;

        if catalog.buyer().id != config.buyer_id {
            return Err(StartupError::UnknownBuyer {
                configured: config.buyer_id.clone(),
                seeded: catalog.buyer().id.clone(),
            });
        }

        let orders = OrderBook::seeded()?;
        let messages = MessageCenter::seeded(AutoReply::from_config(&config))?;

        info!(
            marketplace = %config.marketplace_name,
            products = catalog.product_count(),
            suppliers = catalog.supplier_count(),
            orders = orders.len(),
            "Storefront ready"
        );

        Ok(Storefront {
            catalog,
            cart: CartStore::new(),
            quotes: QuoteBook::new(),
            orders,
            messages,
            config,
        })
    }

    /// The signed-in buyer.
    pub fn buyer(&self) -> &User {
        self.catalog.buyer()
    }
}

impl std::fmt::Debug for Storefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("marketplace", &self.config.marketplace_name)
            .field("cart", &self.cart)
            .field("quotes", &self.quotes.len())
            .field("orders", &self.orders.len())
            .field("messages", &self.messages)
            .finish()
    }
}

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_LOG_FILTER: &str = "info,tradepost=debug";

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tradepost=trace` - Show trace for tradepost crates only
/// - Default: INFO, DEBUG for tradepost crates
pub fn init_tracing() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .init();
}

fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
