//! # Domain Types
//!
//! Small value types shared by the product and payment modules.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  DiscountRate   │   │ ProductCategory │   │   PaymentKind   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │◄──│  Electronics 10%│   │  CreditCard     │       │
//! │  │  1000 = 10%     │   │  Clothing    15%│   │  PayPal         │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The category → rate mapping lives in exactly one place:
//! [`ProductCategory::discount_rate`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1500 bps = 15% (the clothing discount)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as an exact fraction (1000 bps → 0.1000).
    #[inline]
    pub fn as_fraction(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 4)
    }
}

// =============================================================================
// Product Category
// =============================================================================

/// The category a product belongs to. Each category carries one discount rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    /// 10% off the listed price.
    Electronics,
    /// 15% off the listed price.
    Clothing,
}

impl ProductCategory {
    /// Discount rate lookup table, keyed by category.
    pub const fn discount_rate(&self) -> DiscountRate {
        match self {
            ProductCategory::Electronics => DiscountRate::from_bps(1000),
            ProductCategory::Clothing => DiscountRate::from_bps(1500),
        }
    }

    /// Maps a 1-based menu selection to a category.
    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(ProductCategory::Electronics),
            2 => Some(ProductCategory::Clothing),
            _ => None,
        }
    }

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            ProductCategory::Electronics => "Electronics",
            ProductCategory::Clothing => "Clothing",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Payment Kind
// =============================================================================

/// Tag of a payment method, without its identifying field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    /// Card payment, identified by card number.
    CreditCard,
    /// PayPal payment, identified by account email.
    PayPal,
}

impl PaymentKind {
    /// Maps a 1-based menu selection to a payment kind.
    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(PaymentKind::CreditCard),
            2 => Some(PaymentKind::PayPal),
            _ => None,
        }
    }

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            PaymentKind::CreditCard => "Credit Card",
            PaymentKind::PayPal => "PayPal",
        }
    }
}

impl fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
