//! # Cart
//!
//! An ordered, append-only list of products owned by the session.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Menu Action              Core Call                  State Change       │
//! │  ───────────              ─────────                  ────────────       │
//! │                                                                         │
//! │  1. Add Product ────────► add_product() ───────────► items.push(p)      │
//! │                                                                         │
//! │  2. View Cart ──────────► show_cart() ─────────────► (read only)        │
//! │                                                                         │
//! │  3. Place Order ────────► calculate_total_price() ─► (read only)        │
//! │                                                                         │
//! │  There is no remove or clear: the cart lives for the whole session.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::product::{Discount, Product};
use crate::validation::validate_cart_size;
use crate::MAX_CART_ITEMS;

/// One row of the cart view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub name: String,
    pub price: Money,
    pub discounted_price: Money,
}

impl From<&Product> for CartLine {
    fn from(product: &Product) -> Self {
        CartLine {
            name: product.name().to_string(),
            price: product.price(),
            discounted_price: product.apply_discount(product.price()),
        }
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Insertion order is preserved and is the display order
/// - Items are never removed
/// - Maximum items: [`MAX_CART_ITEMS`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Appends a product and returns a reference to the stored copy.
    ///
    /// Emits a "<name> added to cart" event.
    pub fn add_product(&mut self, product: Product) -> CoreResult<&Product> {
        validate_cart_size(self.items.len()).map_err(|_| CoreError::CartTooLarge {
            max: MAX_CART_ITEMS,
        })?;

        info!(
            name = %product.name(),
            category = %product.category(),
            price = %product.price(),
            items = self.items.len() + 1,
            "{} added to cart",
            product.name()
        );

        self.items.push(product);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Lists `(name, price, discounted price)` for every item, in insertion
    /// order. Viewing does not change the cart, so this can be called again.
    pub fn show_cart(&self) -> impl Iterator<Item = CartLine> + '_ {
        self.items.iter().map(CartLine::from)
    }

    /// Sum of discounted prices. Zero for an empty cart.
    pub fn calculate_total_price(&self) -> Money {
        self.items
            .iter()
            .map(|p| p.apply_discount(p.price()))
            .sum()
    }

    /// Sum of listed prices, before discounts.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(Product::price).sum()
    }

    /// Sum of all discounts.
    pub fn total_discount(&self) -> Money {
        self.items.iter().map(Discount::calculate_discount).sum()
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cart totals summary for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub subtotal: Money,
    pub discount: Money,
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.len(),
            subtotal: cart.subtotal(),
            discount: cart.total_discount(),
            total: cart.calculate_total_price(),
        }
    }
}
