//! # Commands
//!
//! Everything the menu can do to a session, as plain functions.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── cart.rs     ◄─── add_to_cart, get_cart
//! └── order.rs    ◄─── place_order, pay_order
//! ```
//!
//! Commands never read input or print. The shell gathers arguments, calls a
//! command, and renders whatever it returns.

pub mod cart;
pub mod order;

pub use cart::{add_to_cart, get_cart, CartResponse, ProductDetails};
pub use order::{pay_order, place_order};
