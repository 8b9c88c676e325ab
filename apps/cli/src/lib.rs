//! # ShopCart CLI Library
//!
//! The interactive driver around `shopcart-core`.
//!
//! ## Module Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  lib.rs ──────► run(): config, logging, stdin/stdout wiring             │
//! │                                                                         │
//! │  shell.rs ────► prompts, menu loop, rendering                           │
//! │                                                                         │
//! │  commands/ ───► add_to_cart, get_cart, place_order, pay_order           │
//! │                                                                         │
//! │  state/ ──────► Session (User + Cart), ConfigState                      │
//! │                                                                         │
//! │  error.rs ────► CliError                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod shell;
pub mod state;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

pub use error::{CliError, ErrorCode};
pub use shell::Shell;
pub use state::{ConfigState, ReceiptFormat, Session};

/// Runs one interactive session on stdin/stdout.
///
/// ## Flow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. ConfigState::from_env()                                             │
/// │  2. init_tracing()     (stderr, so the menu on stdout stays readable)   │
/// │  3. Shell::run()       (login prompts, then the menu loop)              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), CliError> {
    let config = ConfigState::from_env();
    init_tracing(&config);

    info!(store = %config.store_name, format = ?config.receipt_format, "Starting shopcart");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), config);
    shell.run()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `SHOPCART_LOG=shopcart_core=info` - Show cart, order and payment events
/// - `RUST_LOG` is used when `SHOPCART_LOG` is unset
/// - Default: WARN level
fn init_tracing(config: &ConfigState) {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
