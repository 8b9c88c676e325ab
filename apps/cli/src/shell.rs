//! # Shell
//!
//! The interactive menu: prompts, parsing, and rendering.
//!
//! ## Menu Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Enter your username / password                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Welcome to <store>!                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──► Select an action ──┬── 1 ──► name, price, category ─► add_to_cart│
//! │  │                       ├── 2 ──► get_cart                             │
//! │  │                       ├── 3 ──► place_order ─► method ─► pay_order   │
//! │  │                       ├── 4 ──► Exiting...                           │
//! │  │                       └── ? ──► Invalid choice                       │
//! │  └───────────────────────────────┘                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! End of input at any prompt ends the session the same way as choosing 4.

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::warn;

use crate::commands::{self, CartResponse, ProductDetails};
use crate::error::CliError;
use crate::state::{ConfigState, ReceiptFormat, Session};
use shopcart_core::{CartLine, Money, OrderReceipt, PaymentKind, ProductCategory, Settlement};

const MAIN_MENU: &str =
    "Select an action: \n1. Add Product to Cart \n2. View Cart \n3. Place Order \n4. Exit";
const CATEGORY_MENU: &str = "Enter product category: 1. Electronics 2. Clothing";
const PAYMENT_MENU: &str = "Select payment method: \n1. Credit Card \n2. PayPal";

/// Top-level menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    AddProduct,
    ViewCart,
    PlaceOrder,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u32>().ok()? {
            1 => Some(MenuChoice::AddProduct),
            2 => Some(MenuChoice::ViewCart),
            3 => Some(MenuChoice::PlaceOrder),
            4 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Menu driver over any line-based input and any output.
pub struct Shell<R, W> {
    input: R,
    output: W,
    config: ConfigState,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: ConfigState) -> Self {
        Shell {
            input,
            output,
            config,
        }
    }

    /// Gives back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs login and the menu loop until exit or end of input.
    pub fn run(&mut self) -> Result<(), CliError> {
        match self.run_session() {
            Err(CliError::InputClosed) => {
                writeln!(self.output, "Exiting...")?;
                Ok(())
            }
            other => other,
        }
    }

    fn run_session(&mut self) -> Result<(), CliError> {
        let mut session = self.login()?;
        writeln!(self.output, "Welcome to {}!", self.config.store_name)?;

        loop {
            let choice = self.prompt(MAIN_MENU)?;
            let outcome = match MenuChoice::parse(&choice) {
                Some(MenuChoice::AddProduct) => self.add_product(&mut session),
                Some(MenuChoice::ViewCart) => self.view_cart(&session),
                Some(MenuChoice::PlaceOrder) => self.place_order(&session),
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
                None => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Ok(())
                }
            };

            match outcome {
                Err(err) if err.is_recoverable() => self.report(&err)?,
                other => other?,
            }
        }
    }

    /// Asks for credentials until a session can be started.
    ///
    /// The password is kept but never checked.
    fn login(&mut self) -> Result<Session, CliError> {
        loop {
            let username = self.prompt("Enter your username: ")?;
            let password = self.prompt("Enter your password: ")?;

            match Session::start(username, password) {
                Ok(session) => return Ok(session),
                Err(err) => self.report(&CliError::from(err))?,
            }
        }
    }

    // =========================================================================
    // Menu Actions
    // =========================================================================

    fn add_product(&mut self, session: &mut Session) -> Result<(), CliError> {
        let name = self.prompt("Enter product name: ")?;
        let price: Money = self.prompt_parsed("Enter product price: ", "Please enter a price such as 19.99.")?;

        let category = self.prompt(CATEGORY_MENU)?;
        let details = match category.trim().parse::<u32>().ok().and_then(ProductCategory::from_choice) {
            Some(ProductCategory::Electronics) => ProductDetails::WarrantyYears(
                self.prompt_parsed("Enter warranty years: ", "Please enter a whole number.")?,
            ),
            Some(ProductCategory::Clothing) => ProductDetails::Size(
                self.prompt_parsed("Enter size: ", "Please enter a whole number.")?,
            ),
            None => {
                writeln!(self.output, "Invalid category")?;
                return Ok(());
            }
        };

        let line = commands::add_to_cart(session, &name, price, details)?;
        writeln!(self.output, "{} added to cart.", line.name)?;
        Ok(())
    }

    fn view_cart(&mut self, session: &Session) -> Result<(), CliError> {
        let response = commands::get_cart(session);
        self.render_cart(&response)
    }

    fn place_order(&mut self, session: &Session) -> Result<(), CliError> {
        let receipt = commands::place_order(session);
        self.render_receipt(&receipt)?;

        let choice = self.prompt(PAYMENT_MENU)?;
        let (kind, account) = match choice.trim().parse::<u32>().ok().and_then(PaymentKind::from_choice) {
            Some(PaymentKind::CreditCard) => (PaymentKind::CreditCard, self.prompt("Enter card number: ")?),
            Some(PaymentKind::PayPal) => (PaymentKind::PayPal, self.prompt("Enter email: ")?),
            None => {
                writeln!(self.output, "Invalid payment method")?;
                return Ok(());
            }
        };

        let settlement = commands::pay_order(session, kind, &account)?;
        self.render_settlement(&settlement)
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    fn render_line(&mut self, line: &CartLine) -> Result<(), CliError> {
        writeln!(
            self.output,
            "{} - {} (Discounted Price: {})",
            line.name,
            self.config.format_currency(line.price),
            self.config.format_currency(line.discounted_price)
        )?;
        Ok(())
    }

    fn render_cart(&mut self, response: &CartResponse) -> Result<(), CliError> {
        writeln!(self.output, "Cart: ")?;
        if response.lines.is_empty() {
            writeln!(self.output, "(empty)")?;
        }
        for line in &response.lines {
            self.render_line(line)?;
        }

        let totals = &response.totals;
        if totals.item_count > 0 {
            writeln!(
                self.output,
                "Items: {}, Subtotal: {}, Discount: {}, Total: {}",
                totals.item_count,
                self.config.format_currency(totals.subtotal),
                self.config.format_currency(totals.discount),
                self.config.format_currency(totals.total)
            )?;
        }
        Ok(())
    }

    fn render_receipt(&mut self, receipt: &OrderReceipt) -> Result<(), CliError> {
        if self.config.receipt_format == ReceiptFormat::Json {
            let json = serde_json::to_string_pretty(receipt)?;
            writeln!(self.output, "{}", json)?;
            return Ok(());
        }

        writeln!(self.output, "{} placed an order.", receipt.username)?;
        writeln!(self.output, "Cart: ")?;
        for line in &receipt.lines {
            self.render_line(line)?;
        }
        writeln!(
            self.output,
            "Total Price: {}",
            self.config.format_currency(receipt.total)
        )?;
        Ok(())
    }

    fn render_settlement(&mut self, settlement: &Settlement) -> Result<(), CliError> {
        let amount = self.config.format_currency(settlement.amount);
        writeln!(self.output, "{}", settlement.summary(amount))?;
        Ok(())
    }

    fn report(&mut self, err: &CliError) -> Result<(), CliError> {
        warn!(code = %err.code(), error = %err, "Rejected input");
        writeln!(self.output, "Error: {}", err)?;
        Ok(())
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Prints `text`, then reads one trimmed line.
    fn prompt(&mut self, text: &str) -> Result<String, CliError> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Prompts until the answer parses as `T`.
    fn prompt_parsed<T: FromStr>(&mut self, text: &str, retry: &str) -> Result<T, CliError> {
        loop {
            let answer = self.prompt(text)?;
            match answer.parse() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "{}", retry)?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> String {
        run_script_with(script, ConfigState::default())
    }

    fn run_script_with(script: &str, config: ConfigState) -> String {
        let mut shell = Shell::new(script.as_bytes(), Vec::new(), config);
        shell.run().unwrap();
        String::from_utf8(shell.into_output()).unwrap()
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddProduct));
        assert_eq!(MenuChoice::parse(" 4 "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("5"), None);
        assert_eq!(MenuChoice::parse("abc"), None);
    }

    #[test]
    fn test_full_session_with_card_payment() {
        let output = run_script(
            "alice\nsecret\n\
             1\nLaptop\n1000\n1\n2\n\
             1\nShirt\n50\n2\n16\n\
             2\n\
             3\n1\n4111\n\
             4\n",
        );

        assert!(output.contains("Welcome to the Shopping Cart!"));
        assert!(output.contains("Laptop added to cart."));
        assert!(output.contains("Shirt added to cart."));
        assert!(output.contains("Laptop - $1000.00 (Discounted Price: $900.00)"));
        assert!(output.contains("Shirt - $50.00 (Discounted Price: $42.50)"));
        assert!(output.contains("Items: 2, Subtotal: $1050.00, Discount: $107.50, Total: $942.50"));
        assert!(output.contains("alice placed an order."));
        assert!(output.contains("Total Price: $942.50"));
        assert!(output.contains("Paid $942.50 using credit card ending in 4111"));
        assert!(output.trim_end().ends_with("Exiting..."));
    }

    #[test]
    fn test_paypal_payment() {
        let output = run_script(
            "bob\npw\n1\nShirt\n50\n2\n16\n3\n2\nbob@example.com\n4\n",
        );
        assert!(output.contains("Paid $42.50 using PayPal account bob@example.com"));
    }

    #[test]
    fn test_invalid_selections_continue_the_loop() {
        let output = run_script(
            "alice\nsecret\n\
             9\n\
             hello\n\
             1\nHat\n20\n3\n\
             3\n5\n\
             2\n\
             4\n",
        );

        assert_eq!(output.matches("Invalid choice. Please try again.").count(), 2);
        assert!(output.contains("Invalid category"));
        assert!(output.contains("Invalid payment method"));
        assert!(!output.contains("Hat added to cart."));
        assert!(output.contains("(empty)"));
    }

    #[test]
    fn test_unparseable_numbers_are_asked_again() {
        let output = run_script(
            "alice\nsecret\n1\nShirt\nfifty\n50\n2\nL\n16\n4\n",
        );

        assert!(output.contains("Please enter a price such as 19.99."));
        assert!(output.contains("Please enter a whole number."));
        assert!(output.contains("Shirt added to cart."));
    }

    #[test]
    fn test_negative_price_is_reported_not_fatal() {
        let output = run_script("alice\nsecret\n1\nLaptop\n-5\n1\n2\n2\n4\n");

        assert!(output.contains("Error: Invalid input: price must not be negative"));
        assert!(!output.contains("Laptop added to cart."));
        assert!(output.trim_end().ends_with("Exiting..."));
    }

    #[test]
    fn test_prices_beyond_the_maximum_are_rejected() {
        let output = run_script(
            "alice\nsecret\n\
             1\nA\n79228162514264337593543950335\n1\n1\n\
             1\nB\n79228162514264337593543950335\n1\n1\n\
             2\n3\n5\n4\n",
        );

        assert_eq!(
            output
                .matches("Error: Invalid input: price must be at most $1000000000000.00")
                .count(),
            2
        );
        assert!(output.contains("(empty)"));
        assert!(output.contains("Total Price: $0.00"));
        assert!(output.trim_end().ends_with("Exiting..."));
    }

    #[test]
    fn test_bad_card_number_is_reported() {
        let output = run_script("alice\nsecret\n3\n1\nnot-a-card\n4\n");
        assert!(output.contains("Error: Invalid input: card number has invalid format"));
        assert!(!output.contains("Paid"));
    }

    #[test]
    fn test_empty_username_is_asked_again() {
        let output = run_script("\npw\nalice\npw\n4\n");
        assert!(output.contains("Error: Invalid input: username is required"));
        assert!(output.contains("Welcome to"));
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let output = run_script("alice\nsecret\n1\nLaptop\n");
        assert!(output.trim_end().ends_with("Exiting..."));
    }

    #[test]
    fn test_placing_an_order_keeps_the_cart() {
        let output = run_script(
            "alice\nsecret\n1\nShirt\n50\n2\n16\n3\n1\n4111\n3\n1\n4111\n4\n",
        );
        assert_eq!(output.matches("Total Price: $42.50").count(), 2);
    }

    #[test]
    fn test_json_receipt() {
        let config = ConfigState {
            receipt_format: ReceiptFormat::Json,
            ..ConfigState::default()
        };
        let output = run_script_with("alice\nsecret\n1\nShirt\n50\n2\n16\n3\n5\n4\n", config);

        assert!(output.contains("\"username\": \"alice\""));
        assert!(output.contains("\"discountedPrice\""));
        assert!(!output.contains("placed an order."));
    }

    #[test]
    fn test_custom_store_and_currency() {
        let config = ConfigState {
            store_name: "Corner Shop".to_string(),
            currency_symbol: "€".to_string(),
            ..ConfigState::default()
        };
        let output = run_script_with("alice\nsecret\n1\nShirt\n50\n2\n16\n2\n4\n", config);

        assert!(output.contains("Welcome to Corner Shop!"));
        assert!(output.contains("Shirt - €50.00 (Discounted Price: €42.50)"));
        assert!(output.contains("Items: 1, Subtotal: €50.00, Discount: €7.50, Total: €42.50"));
    }
}
