//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SHOPCART_*`, then `RUST_LOG` for logging)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use shopcart_core::Money;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shown in the welcome line)
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places shown for amounts
    pub currency_decimals: u32,

    /// How placed orders are printed
    pub receipt_format: ReceiptFormat,

    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

/// How a placed order is rendered.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptFormat {
    /// Human-readable lines
    #[default]
    Text,

    /// Pretty-printed JSON of the receipt
    Json,
}

impl ReceiptFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(ReceiptFormat::Text),
            "json" => Some(ReceiptFormat::Json),
            _ => None,
        }
    }
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "the Shopping Cart"
    /// - Currency: $ with 2 decimals
    /// - Receipts: text
    /// - Logging: warnings only
    fn default() -> Self {
        ConfigState {
            store_name: "the Shopping Cart".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            receipt_format: ReceiptFormat::Text,
            log_filter: "warn".to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SHOPCART_STORE_NAME`: Override store name
    /// - `SHOPCART_CURRENCY_SYMBOL`: Override currency symbol
    /// - `SHOPCART_RECEIPT_FORMAT`: `text` or `json`
    /// - `SHOPCART_LOG` / `RUST_LOG`: log filter
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](ConfigState::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("SHOPCART_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("SHOPCART_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(format) = lookup("SHOPCART_RECEIPT_FORMAT").as_deref().and_then(ReceiptFormat::parse) {
            config.receipt_format = format;
        }

        if let Some(filter) = lookup("SHOPCART_LOG").or_else(|| lookup("RUST_LOG")) {
            config.log_filter = filter;
        }

        config
    }

    /// Formats an amount with the configured symbol.
    ///
    /// Rounds here and nowhere else.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_cli::ConfigState;
    /// use shopcart_core::Money;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(94250)), "$942.50");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let rounded = amount.rounded(self.currency_decimals).amount();

        format!(
            "{}{}{:.prec$}",
            if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" },
            self.currency_symbol,
            rounded.abs(),
            prec = self.currency_decimals as usize
        )
    }
}
