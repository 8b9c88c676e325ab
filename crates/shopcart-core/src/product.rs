//! # Products and Discounts
//!
//! A [`Product`] is a named, priced item tagged with a [`ProductKind`].
//! The kind selects the discount rule; the rule itself is one shared
//! implementation of the [`Discount`] trait.
//!
//! ## Discount Flow
//! ```text
//! Product { price: $50.00, kind: Clothing { size: 16 } }
//!      │
//!      ▼
//! category() ──► Clothing ──► discount_rate() = 1500 bps
//!      │
//!      ▼
//! calculate_discount() = $50.00 × 0.15 = $7.50
//!      │
//!      ▼
//! apply_discount($50.00) = $50.00 − $7.50 = $42.50
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::ProductCategory;
use crate::validation::{validate_price, validate_product_name, validate_size};

// =============================================================================
// Discount Rule
// =============================================================================

/// Something that knows its own discount.
///
/// Implementors supply [`calculate_discount`](Discount::calculate_discount);
/// [`apply_discount`](Discount::apply_discount) is derived from it and is the
/// same for every implementor.
pub trait Discount {
    /// The amount deducted from the listed price.
    fn calculate_discount(&self) -> Money;

    /// `price` minus [`calculate_discount`](Discount::calculate_discount).
    fn apply_discount(&self, price: Money) -> Money {
        price - self.calculate_discount()
    }
}

// =============================================================================
// Product Kind
// =============================================================================

/// Category-specific data of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum ProductKind {
    Electronics { warranty_years: u32 },
    Clothing { size: u32 },
}

impl ProductKind {
    /// The category tag, used for the discount lookup.
    pub const fn category(&self) -> ProductCategory {
        match self {
            ProductKind::Electronics { .. } => ProductCategory::Electronics,
            ProductKind::Clothing { .. } => ProductCategory::Clothing,
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A purchasable item. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price: Money,
    kind: ProductKind,
}

impl Product {
    /// Builds an electronics product.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::{Discount, Money, Product};
    ///
    /// let laptop = Product::electronics("Laptop", Money::from_cents(100_000), 2).unwrap();
    /// assert_eq!(laptop.calculate_discount(), Money::from_cents(10_000));
    /// assert_eq!(laptop.apply_discount(laptop.price()), Money::from_cents(90_000));
    /// ```
    pub fn electronics(name: impl Into<String>, price: Money, warranty_years: u32) -> CoreResult<Self> {
        Self::build(name.into(), price, ProductKind::Electronics { warranty_years })
    }

    /// Builds a clothing product. `size` must be positive.
    pub fn clothing(name: impl Into<String>, price: Money, size: u32) -> CoreResult<Self> {
        validate_size(size)?;
        Self::build(name.into(), price, ProductKind::Clothing { size })
    }

    fn build(name: String, price: Money, kind: ProductKind) -> CoreResult<Self> {
        validate_product_name(&name)?;
        validate_price(price)?;

        Ok(Product {
            name: name.trim().to_string(),
            price,
            kind,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Listed price, before discount.
    pub fn price(&self) -> Money {
        self.price
    }

    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    pub fn category(&self) -> ProductCategory {
        self.kind.category()
    }

    /// Warranty in years, for electronics.
    pub fn warranty_years(&self) -> Option<u32> {
        match self.kind {
            ProductKind::Electronics { warranty_years } => Some(warranty_years),
            ProductKind::Clothing { .. } => None,
        }
    }

    /// Size, for clothing.
    pub fn size(&self) -> Option<u32> {
        match self.kind {
            ProductKind::Clothing { size } => Some(size),
            ProductKind::Electronics { .. } => None,
        }
    }

    /// Listed price with the category discount applied.
    pub fn discounted_price(&self) -> Money {
        self.apply_discount(self.price)
    }
}

impl Discount for Product {
    fn calculate_discount(&self) -> Money {
        self.price.percentage(self.category().discount_rate())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
