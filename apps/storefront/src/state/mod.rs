//! # State Module
//!
//! Session state for the storefront.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐  ┌────────────┐  │
//! │  │  CartStore   │  │  QuoteBook   │  │MessageCenter │  │ConfigState │  │
//! │  │ (core crate) │  │              │  │              │  │            │  │
//! │  │  snapshots + │  │  requests +  │  │ conversations│  │ currency   │  │
//! │  │  listeners   │  │  lifecycle   │  │ + auto-reply │  │ auto-reply │  │
//! │  └──────────────┘  └──────────────┘  └──────────────┘  └────────────┘  │
//! │                                                                         │
//! │  ┌──────────────┐                                                       │
//! │  │  OrderBook   │  seeded purchase orders, read-only                    │
//! │  └──────────────┘                                                       │
//! │                                                                         │
//! │  Each command borrows only the state it needs. The catalog is shared   │
//! │  and read-only.                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod messaging;
mod orders;
mod quotes;

pub use config::ConfigState;
pub use messaging::{
    AutoReply, Conversation, ConversationStatus, ConversationSummary, Message, MessageCenter,
    MessageType, MessagingError, MessagingResult, SenderType, EMBEDDED_CONVERSATIONS,
};
pub use orders::{
    Order, OrderBook, OrderCount, OrderError, OrderItem, OrderResult, OrderStatus, PaymentStatus,
    EMBEDDED_ORDERS,
};
pub use quotes::{QuoteBook, StatusCount};
