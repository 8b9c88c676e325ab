//! # shopcart-core: Pure Business Logic for ShopCart
//!
//! This crate is the **heart** of ShopCart. It contains the domain model of
//! the shopping-cart simulator as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ShopCart Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli (text menu)                         │   │
//! │  │    Login ──► Add Product ──► View Cart ──► Place Order ──► Pay  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain function calls                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ shopcart-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │ product │ │  cart   │ │  user   │ │  order  │ │ payment │  │   │
//! │  │   │Discount │ │CartLine │ │AuthPol. │ │ Receipt │ │Settlemt.│  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with exact decimal arithmetic (no floating point!)
//! - [`types`] - Discount rates, product categories, payment kinds
//! - [`product`] - Products and the [`Discount`] rule
//! - [`cart`] - Ordered cart with discounted totals
//! - [`user`] - Session user and pluggable [`AuthPolicy`]
//! - [`order`] - Orders over a borrowed cart
//! - [`payment`] - Stub payment methods and settlement records
//! - [`validation`] - Input validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shopcart_core::{Cart, Money, Order, PaymentMethod, Product, User};
//!
//! let user = User::new("alice", "secret").unwrap();
//! let mut cart = Cart::new();
//! cart.add_product(Product::electronics("Laptop", Money::from_cents(100_000), 2).unwrap())
//!     .unwrap();
//! cart.add_product(Product::clothing("Shirt", Money::from_cents(5_000), 16).unwrap())
//!     .unwrap();
//!
//! let order = Order::new(&cart, &user);
//! assert_eq!(order.total_price(), Money::from_cents(94_250));
//!
//! let settlement = PaymentMethod::credit_card("4111").unwrap().pay(order.total_price());
//! assert_eq!(settlement.to_string(), "Paid $942.50 using credit card ending in 4111");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod order;
pub mod payment;
pub mod product;
pub mod types;
pub mod user;
pub mod validation;

use rust_decimal::Decimal;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shopcart_core::Money` instead of
// `use shopcart_core::money::Money`

pub use cart::{Cart, CartLine, CartTotals};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{Order, OrderReceipt};
pub use payment::{PaymentMethod, Settlement};
pub use product::{Discount, Product, ProductKind};
pub use types::*;
pub use user::{AuthPolicy, PlaintextEquality, User};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of items a single cart will hold.
///
/// ## Business Reason
/// The cart only ever grows during a session. This keeps a runaway script
/// from growing it without bound.
pub const MAX_CART_ITEMS: usize = 1000;

/// Highest price a product may be listed at: $1,000,000,000,000.
///
/// A full cart at this price sums to 10^15, far inside `Decimal`'s range,
/// so totals and discounts cannot overflow.
pub const MAX_PRICE: Money = Money::new(Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0));

/// Maximum length of a product name, in characters.
pub const MAX_NAME_LENGTH: usize = 200;
