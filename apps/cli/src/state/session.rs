//! # Session
//!
//! One user and one cart, from login to exit.

use shopcart_core::{Cart, CoreResult, Order, User};
use tracing::debug;

/// Explicit session context handed to every command.
#[derive(Debug)]
pub struct Session {
    user: User,
    cart: Cart,
}

impl Session {
    /// Starts a session with an empty cart.
    ///
    /// The password is stored on the user but not checked here: the
    /// simulator never authenticates.
    pub fn start(username: impl Into<String>, password: impl Into<String>) -> CoreResult<Self> {
        let user = User::new(username, password)?;
        debug!(username = %user.username(), "Session started");

        Ok(Session {
            user,
            cart: Cart::new(),
        })
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// A fresh order over the current cart.
    pub fn order(&self) -> Order<'_> {
        Order::new(&self.cart, &self.user)
    }
}
