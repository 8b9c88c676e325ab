//! # Validation Module
//!
//! Input validation for everything the driver hands to the core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI prompt                                                   │
//! │  ├── Parsing (is it a number at all?)                                  │
//! │  └── Menu selection (1-4, 1-2)                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Constructors in shopcart-core                                │
//! │  └── THIS MODULE: domain rules (price >= 0, size > 0, ...)             │
//! │                                                                         │
//! │  Anything past layer 2 is valid by construction.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopcart_core::validation::{validate_price, validate_size};
//! use shopcart_core::Money;
//!
//! assert!(validate_price(Money::from_cents(1099)).is_ok());
//! assert!(validate_size(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_CART_ITEMS, MAX_NAME_LENGTH, MAX_PRICE};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_required("name", name)?;

    if name.trim().chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates a username. Only emptiness is checked.
pub fn validate_username(username: &str) -> ValidationResult<()> {
    validate_required("username", username)
}

/// Validates a card number.
///
/// ## Rules
/// - Must not be empty
/// - Digits only, spaces and hyphens allowed as separators
///
/// No Luhn check: payments are simulated.
pub fn validate_card_number(card_number: &str) -> ValidationResult<()> {
    validate_required("card number", card_number)?;

    let card_number = card_number.trim();
    if !card_number.chars().any(|c| c.is_ascii_digit())
        || !card_number
            .chars()
            .all(|c| c.is_ascii_digit() || c == ' ' || c == '-')
    {
        return Err(ValidationError::InvalidFormat {
            field: "card number".to_string(),
            reason: "must contain only digits".to_string(),
        });
    }

    Ok(())
}

/// Validates a PayPal account email.
///
/// ## Rules
/// - Must not be empty
/// - Exactly one '@' with something on both sides
pub fn validate_email(email: &str) -> ValidationResult<()> {
    validate_required("email", email)?;

    let email = email.trim();
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    };

    if !valid || email.contains(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must look like name@example.com".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a listed price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
/// - At most [`MAX_PRICE`]
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    if price > MAX_PRICE {
        return Err(ValidationError::TooLarge {
            field: "price".to_string(),
            max: MAX_PRICE.to_string(),
        });
    }

    Ok(())
}

/// Validates a clothing size. Must be positive.
pub fn validate_size(size: u32) -> ValidationResult<()> {
    if size == 0 {
        return Err(ValidationError::MustBePositive {
            field: "size".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates that one more item fits in a cart holding `current_items`.
pub fn validate_cart_size(current_items: usize) -> ValidationResult<()> {
    if current_items >= MAX_CART_ITEMS {
        return Err(ValidationError::TooLong {
            field: "cart".to_string(),
            max: MAX_CART_ITEMS,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Laptop").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_ok());
        assert_eq!(
            validate_username(""),
            Err(ValidationError::Required {
                field: "username".to_string()
            })
        );
    }

    #[test]
    fn test_validate_card_number() {
        assert!(validate_card_number("4111").is_ok());
        assert!(validate_card_number("4111 1111 1111 1111").is_ok());
        assert!(validate_card_number("4111-1111").is_ok());

        assert!(validate_card_number("").is_err());
        assert!(validate_card_number("4111x").is_err());
        assert!(validate_card_number("- -").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("alice@example.com").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("alice").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("alice@").is_err());
        assert!(validate_email("a@b@c").is_err());
        assert!(validate_email("al ice@example.com").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_cents(1099)).is_ok());
        assert!(validate_price(Money::from_cents(-1)).is_err());
    }

    #[test]
    fn test_validate_price_upper_bound() {
        use rust_decimal::Decimal;

        assert_eq!(MAX_PRICE.amount(), Decimal::new(1_000_000_000_000, 0));
        assert!(validate_price(MAX_PRICE).is_ok());
        assert_eq!(
            validate_price(Money::new(Decimal::MAX)),
            Err(ValidationError::TooLarge {
                field: "price".to_string(),
                max: "$1000000000000.00".to_string(),
            })
        );
        assert!(validate_price(MAX_PRICE + Money::from_cents(1)).is_err());
    }

    #[test]
    fn test_validate_size() {
        assert!(validate_size(1).is_ok());
        assert!(validate_size(16).is_ok());
        assert!(validate_size(0).is_err());
    }

    #[test]
    fn test_validate_cart_size() {
        assert!(validate_cart_size(0).is_ok());
        assert!(validate_cart_size(MAX_CART_ITEMS - 1).is_ok());
        assert!(validate_cart_size(MAX_CART_ITEMS).is_err());
    }
}
