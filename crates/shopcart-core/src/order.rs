//! # Order
//!
//! An order ties a cart to a user at the moment the shopper checks out.
//!
//! ## Reference Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Order<'a>                                                              │
//! │  ├── cart: &'a Cart   ◄── borrowed, never copied                        │
//! │  └── user: &'a User                                                     │
//! │                                                                         │
//! │  total_price()  ──► cart.calculate_total_price()   (every call)         │
//! │  place_order()  ──► OrderReceipt { lines, total, ... }                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An order stores no status. Placing the same cart twice yields two
//! receipts, each derived from the cart as it is at that moment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::cart::{Cart, CartLine};
use crate::money::Money;
use crate::user::User;

/// A checkout of `cart` by `user`.
#[derive(Debug, Clone, Copy)]
pub struct Order<'a> {
    cart: &'a Cart,
    user: &'a User,
}

impl<'a> Order<'a> {
    pub fn new(cart: &'a Cart, user: &'a User) -> Self {
        Order { cart, user }
    }

    /// The amount owed, recomputed from the cart on every call.
    pub fn total_price(&self) -> Money {
        self.cart.calculate_total_price()
    }

    /// Places the order and returns what the driver should show:
    /// who ordered, every cart line, and the total.
    pub fn place_order(&self) -> OrderReceipt {
        let receipt = OrderReceipt {
            order_id: Uuid::new_v4().to_string(),
            username: self.user.username().to_string(),
            lines: self.cart.show_cart().collect(),
            total: self.total_price(),
            placed_at: Utc::now(),
        };

        info!(
            order_id = %receipt.order_id,
            username = %receipt.username,
            items = receipt.lines.len(),
            total = %receipt.total,
            "{} placed an order",
            receipt.username
        );

        receipt
    }
}

/// Result of [`Order::place_order`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub order_id: String,
    pub username: String,
    pub lines: Vec<CartLine>,
    pub total: Money,
    pub placed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Product;

    fn alice() -> User {
        User::new("alice", "secret").unwrap()
    }

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_product(Product::electronics("Laptop", Money::from_cents(100_000), 2).unwrap())
            .unwrap();
        cart.add_product(Product::clothing("Shirt", Money::from_cents(5_000), 16).unwrap())
            .unwrap();
        cart
    }

    #[test]
    fn test_order_total_matches_cart() {
        let user = alice();
        let cart = sample_cart();
        let order = Order::new(&cart, &user);

        assert_eq!(order.total_price(), cart.calculate_total_price());
        assert_eq!(order.total_price(), Money::from_cents(94_250));
    }

    #[test]
    fn test_order_on_empty_cart() {
        let user = alice();
        let cart = Cart::new();
        let receipt = Order::new(&cart, &user).place_order();

        assert!(receipt.lines.is_empty());
        assert!(receipt.total.is_zero());
    }

    #[test]
    fn test_place_order_receipt() {
        let user = alice();
        let cart = sample_cart();
        let receipt = Order::new(&cart, &user).place_order();

        assert_eq!(receipt.username, "alice");
        assert_eq!(receipt.lines.len(), 2);
        assert_eq!(receipt.lines[0].name, "Laptop");
        assert_eq!(receipt.lines[1].discounted_price, Money::from_cents(4_250));
        assert_eq!(receipt.total, Money::from_cents(94_250));
    }

    #[test]
    fn test_later_orders_see_items_added_since() {
        let user = alice();
        let mut cart = sample_cart();

        let first = Order::new(&cart, &user).place_order();

        cart.add_product(Product::clothing("Hat", Money::from_cents(2_000), 7).unwrap())
            .unwrap();
        let second = Order::new(&cart, &user).place_order();

        assert_eq!(first.total, Money::from_cents(94_250));
        assert_eq!(second.total, Money::from_cents(95_950));
        assert_ne!(first.order_id, second.order_id);
    }

    #[test]
    fn test_placing_twice_rederives_total() {
        let user = alice();
        let cart = sample_cart();
        let order = Order::new(&cart, &user);

        let a = order.place_order();
        let b = order.place_order();
        assert_eq!(a.total, b.total);
        assert_eq!(a.lines, b.lines);
    }

    #[test]
    fn test_receipt_serializes_amounts_as_strings() {
        let user = alice();
        let cart = sample_cart();
        let receipt = Order::new(&cart, &user).place_order();

        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["username"], "alice");
        assert_eq!(json["lines"][1]["name"], "Shirt");
        assert!(json["total"].is_string());
    }
}
