//! # ShopCart Entry Point
//!
//! ## Startup Sequence
//! 1. Load configuration from the environment
//! 2. Initialize tracing (logging to stderr)
//! 3. Prompt for username and password
//! 4. Run the menu loop until the shopper exits or input ends

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match shopcart_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("shopcart: {err}");
            ExitCode::FAILURE
        }
    }
}
