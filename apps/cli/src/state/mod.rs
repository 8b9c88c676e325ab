//! # Session State
//!
//! Everything the shell keeps between menu turns.
//!
//! ## State Types
//! - [`Session`]: the logged-in user and their cart, for the whole run
//! - [`ConfigState`]: read-only settings loaded at startup
//!
//! Both are plain owned values: the shell is single-threaded, so there is
//! no locking.

mod config;
mod session;

pub use config::{ConfigState, ReceiptFormat};
pub use session::Session;
