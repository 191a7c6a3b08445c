//! # Configuration State
//!
//! Stores storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TRADEPOST_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Marketplace name (shown in the header)
    pub marketplace_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Delay before a supplier auto-reply arrives, in milliseconds
    pub auto_reply_delay_ms: u64,

    /// Text of the supplier auto-reply
    pub auto_reply_text: String,

    /// The signed-in buyer
    pub buyer_id: String,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Marketplace: "TradePost"
    /// - Currency: USD ($)
    /// - Auto-reply: after 2 seconds
    /// - Buyer: user-001 (the seeded buyer)
    fn default() -> Self {
        ConfigState {
            marketplace_name: "TradePost".to_string(),
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            auto_reply_delay_ms: 2000,
            auto_reply_text: "Thank you for your message. I will get back to you shortly with \
                              detailed information."
                .to_string(),
            buyer_id: "user-001".to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TRADEPOST_MARKETPLACE_NAME`: Override marketplace name
    /// - `TRADEPOST_CURRENCY`: Override currency code (symbol follows for known codes)
    /// - `TRADEPOST_AUTO_REPLY_MS`: Override auto-reply delay (e.g., "500")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(name) = lookup("TRADEPOST_MARKETPLACE_NAME") {
            config.marketplace_name = name;
        }

        if let Some(code) = lookup("TRADEPOST_CURRENCY") {
            let code = code.trim().to_uppercase();
            config.currency_symbol = currency_symbol(&code).to_string();
            config.currency_code = code;
        }

        if let Some(raw) = lookup("TRADEPOST_AUTO_REPLY_MS") {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.auto_reply_delay_ms = ms,
                Err(e) => warn!(value = %raw, error = %e, "Ignoring TRADEPOST_AUTO_REPLY_MS"),
            }
        }

        config
    }

    /// The auto-reply delay as a [`Duration`].
    pub fn auto_reply_delay(&self) -> Duration {
        Duration::from_millis(self.auto_reply_delay_ms)
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use tradepost_storefront::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1250), "$12.50");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

fn currency_symbol(code: &str) -> &str {
    match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "CNY" => "¥",
        other => other,
    }
}
