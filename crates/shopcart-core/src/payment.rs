//! # Payment Methods
//!
//! Stub settlement: no money moves. Paying produces a [`Settlement`] record
//! and a log event, and always succeeds.
//!
//! ## Settlement Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Order::total_price() = $942.50                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PaymentMethod::CreditCard { card_number: "4111 1111 1111 1111" }      │
//! │       │                                                                 │
//! │       ▼  pay($942.50)                                                   │
//! │  Settlement { kind: CreditCard, identifier: "1111", amount: $942.50 }  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  "Paid $942.50 using credit card ending in 1111"                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;
use uuid::Uuid;

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::PaymentKind;
use crate::validation::{validate_card_number, validate_email};

/// Digits of a card number kept in settlement records.
const CARD_DIGITS_SHOWN: usize = 4;

// =============================================================================
// Payment Method
// =============================================================================

/// How the shopper pays. Stateless apart from its identifying field.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard { card_number: String },
    PayPal { email: String },
}

impl PaymentMethod {
    /// Card payment. Separators are stripped, only digits are kept.
    pub fn credit_card(card_number: impl Into<String>) -> CoreResult<Self> {
        let card_number = card_number.into();
        validate_card_number(&card_number)?;

        Ok(PaymentMethod::CreditCard {
            card_number: card_number.chars().filter(char::is_ascii_digit).collect(),
        })
    }

    /// PayPal payment.
    pub fn paypal(email: impl Into<String>) -> CoreResult<Self> {
        let email = email.into();
        validate_email(&email)?;

        Ok(PaymentMethod::PayPal {
            email: email.trim().to_string(),
        })
    }

    pub fn kind(&self) -> PaymentKind {
        match self {
            PaymentMethod::CreditCard { .. } => PaymentKind::CreditCard,
            PaymentMethod::PayPal { .. } => PaymentKind::PayPal,
        }
    }

    /// What a settlement shows to identify the account: the last four card
    /// digits, or the PayPal email.
    pub fn identifier(&self) -> String {
        match self {
            PaymentMethod::CreditCard { card_number } => {
                let skip = card_number.len().saturating_sub(CARD_DIGITS_SHOWN);
                card_number[skip..].to_string()
            }
            PaymentMethod::PayPal { email } => email.clone(),
        }
    }

    /// Settles `amount`.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::{Money, PaymentMethod};
    ///
    /// let settlement = PaymentMethod::paypal("alice@example.com")
    ///     .unwrap()
    ///     .pay(Money::from_cents(4250));
    /// assert_eq!(
    ///     settlement.to_string(),
    ///     "Paid $42.50 using PayPal account alice@example.com"
    /// );
    /// ```
    pub fn pay(&self, amount: Money) -> Settlement {
        let settlement = Settlement {
            id: Uuid::new_v4().to_string(),
            kind: self.kind(),
            identifier: self.identifier(),
            amount,
            settled_at: Utc::now(),
        };

        info!(
            settlement_id = %settlement.id,
            method = %settlement.kind,
            account = %settlement.identifier,
            amount = %settlement.amount,
            "Payment settled"
        );

        settlement
    }

    /// Alias of [`pay`](PaymentMethod::pay).
    pub fn settle(&self, amount: Money) -> Settlement {
        self.pay(amount)
    }
}

/// Debug output shows the masked identifier only.
impl fmt::Debug for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::CreditCard { .. } => f
                .debug_struct("CreditCard")
                .field("card_number", &format!("****{}", self.identifier()))
                .finish(),
            PaymentMethod::PayPal { email } => {
                f.debug_struct("PayPal").field("email", email).finish()
            }
        }
    }
}

// =============================================================================
// Settlement
// =============================================================================

/// Record of one simulated payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    pub id: String,
    pub kind: PaymentKind,
    pub identifier: String,
    pub amount: Money,
    pub settled_at: DateTime<Utc>,
}

impl Settlement {
    /// One-line summary with `amount` rendered by the caller.
    ///
    /// `Display` uses this with the plain `$` rendering of [`Money`].
    pub fn summary(&self, amount: impl fmt::Display) -> String {
        match self.kind {
            PaymentKind::CreditCard => format!(
                "Paid {} using credit card ending in {}",
                amount, self.identifier
            ),
            PaymentKind::PayPal => {
                format!("Paid {} using PayPal account {}", amount, self.identifier)
            }
        }
    }
}

impl fmt::Display for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary(self.amount))
    }
}
