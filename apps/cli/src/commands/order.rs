//! # Order Commands
//!
//! Placing an order and paying for it are two steps: the shell prints the
//! receipt, asks for a payment method, then pays the order total.

use tracing::debug;

use crate::error::CliError;
use crate::state::Session;
use shopcart_core::{OrderReceipt, PaymentKind, PaymentMethod, Settlement};

/// Places an order over the session cart.
pub fn place_order(session: &Session) -> OrderReceipt {
    debug!(items = session.cart().len(), "place_order command");
    session.order().place_order()
}

/// Pays the current order total with the chosen method.
///
/// ## Arguments
/// * `kind` - which payment method the shopper picked
/// * `account` - card number or PayPal email
pub fn pay_order(session: &Session, kind: PaymentKind, account: &str) -> Result<Settlement, CliError> {
    debug!(method = %kind, "pay_order command");

    let method = match kind {
        PaymentKind::CreditCard => PaymentMethod::credit_card(account)?,
        PaymentKind::PayPal => PaymentMethod::paypal(account)?,
    };

    Ok(method.pay(session.order().total_price()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add_to_cart, ProductDetails};
    use shopcart_core::Money;

    fn session_with_items() -> Session {
        let mut session = Session::start("alice", "secret").unwrap();
        add_to_cart(&mut session, "Laptop", Money::from_cents(100_000), ProductDetails::WarrantyYears(2))
            .unwrap();
        add_to_cart(&mut session, "Shirt", Money::from_cents(5_000), ProductDetails::Size(16)).unwrap();
        session
    }

    #[test]
    fn test_place_order() {
        let session = session_with_items();
        let receipt = place_order(&session);

        assert_eq!(receipt.username, "alice");
        assert_eq!(receipt.total, Money::from_cents(94_250));
    }

    #[test]
    fn test_pay_order_by_card() {
        let session = session_with_items();
        let settlement = pay_order(&session, PaymentKind::CreditCard, "4111").unwrap();

        assert_eq!(settlement.amount, Money::from_cents(94_250));
        assert_eq!(settlement.identifier, "4111");
    }

    #[test]
    fn test_pay_order_by_paypal() {
        let session = session_with_items();
        let settlement = pay_order(&session, PaymentKind::PayPal, "alice@example.com").unwrap();

        assert_eq!(settlement.kind, PaymentKind::PayPal);
        assert_eq!(settlement.amount, Money::from_cents(94_250));
    }

    #[test]
    fn test_pay_order_rejects_bad_account() {
        let session = session_with_items();
        let err = pay_order(&session, PaymentKind::PayPal, "nobody").unwrap_err();
        assert!(err.is_recoverable());
    }
}
