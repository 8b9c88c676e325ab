//! # Cart Commands
//!
//! ## Cart Lifecycle
//! ```text
//! ┌──────────┐  add_to_cart   ┌──────────┐  place_order   ┌──────────┐
//! │  Empty   │───────────────►│ In Cart  │───────────────►│ Receipt  │
//! │  Cart    │                │          │◄───────────────│ + Paid   │
//! └──────────┘                └──────────┘  (cart kept)   └──────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CliError;
use crate::state::Session;
use shopcart_core::{Cart, CartLine, CartTotals, Money, Product, ProductCategory};

/// The category-specific field the shell asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductDetails {
    WarrantyYears(u32),
    Size(u32),
}

impl ProductDetails {
    pub fn category(&self) -> ProductCategory {
        match self {
            ProductDetails::WarrantyYears(_) => ProductCategory::Electronics,
            ProductDetails::Size(_) => ProductCategory::Clothing,
        }
    }
}

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            lines: cart.show_cart().collect(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Builds a product and appends it to the session cart.
///
/// ## Returns
/// The row the new item shows as in the cart view.
pub fn add_to_cart(
    session: &mut Session,
    name: &str,
    price: Money,
    details: ProductDetails,
) -> Result<CartLine, CliError> {
    debug!(name = %name, price = %price, category = %details.category(), "add_to_cart command");

    let product = match details {
        ProductDetails::WarrantyYears(years) => Product::electronics(name, price, years)?,
        ProductDetails::Size(size) => Product::clothing(name, price, size)?,
    };

    let added = session.cart_mut().add_product(product)?;
    Ok(CartLine::from(added))
}

/// Gets the current cart contents.
pub fn get_cart(session: &Session) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(session.cart())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::start("alice", "secret").unwrap()
    }

    #[test]
    fn test_add_electronics() {
        let mut session = session();
        let line = add_to_cart(
            &mut session,
            "Laptop",
            Money::from_cents(100_000),
            ProductDetails::WarrantyYears(2),
        )
        .unwrap();

        assert_eq!(line.name, "Laptop");
        assert_eq!(line.discounted_price, Money::from_cents(90_000));
        assert_eq!(session.cart().items()[0].warranty_years(), Some(2));
    }

    #[test]
    fn test_add_clothing() {
        let mut session = session();
        add_to_cart(&mut session, "Shirt", Money::from_cents(5_000), ProductDetails::Size(16)).unwrap();

        assert_eq!(session.cart().items()[0].size(), Some(16));
    }

    #[test]
    fn test_invalid_product_leaves_cart_untouched() {
        let mut session = session();
        let err = add_to_cart(
            &mut session,
            "Laptop",
            Money::from_cents(-100),
            ProductDetails::WarrantyYears(2),
        )
        .unwrap_err();

        assert!(err.is_recoverable());
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_get_cart() {
        let mut session = session();
        add_to_cart(&mut session, "Laptop", Money::from_cents(100_000), ProductDetails::WarrantyYears(2))
            .unwrap();
        add_to_cart(&mut session, "Shirt", Money::from_cents(5_000), ProductDetails::Size(16)).unwrap();

        let response = get_cart(&session);
        assert_eq!(response.lines.len(), 2);
        assert_eq!(response.totals.item_count, 2);
        assert_eq!(response.totals.total, Money::from_cents(94_250));
    }
}
