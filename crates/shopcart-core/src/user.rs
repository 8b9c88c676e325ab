//! # User
//!
//! Identity of the session's shopper.
//!
//! The credential is compared by plain string equality. That is the whole
//! authentication story of this simulator; the comparison sits behind
//! [`AuthPolicy`] so a stricter one can be swapped in without changing
//! [`User`].

use std::fmt;

use crate::error::CoreResult;
use crate::validation::validate_username;

// =============================================================================
// Auth Policy
// =============================================================================

/// Decides whether a candidate credential matches the stored one.
pub trait AuthPolicy {
    fn verify(&self, stored: &str, candidate: &str) -> bool;
}

/// Exact, plaintext equality. Not constant-time.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaintextEquality;

impl AuthPolicy for PlaintextEquality {
    fn verify(&self, stored: &str, candidate: &str) -> bool {
        stored == candidate
    }
}

// =============================================================================
// User
// =============================================================================

/// The shopper. Created once at session start and never mutated.
#[derive(Clone)]
pub struct User {
    username: String,
    credential: String,
}

impl User {
    /// Creates a user. The username must not be empty; the credential is
    /// opaque and may be anything.
    pub fn new(username: impl Into<String>, credential: impl Into<String>) -> CoreResult<Self> {
        let username = username.into();
        validate_username(&username)?;

        Ok(User {
            username,
            credential: credential.into(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Checks `candidate` against the stored credential with
    /// [`PlaintextEquality`].
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::User;
    ///
    /// let user = User::new("alice", "secret").unwrap();
    /// assert!(user.check_password("secret"));
    /// assert!(!user.check_password("wrong"));
    /// ```
    pub fn check_password(&self, candidate: &str) -> bool {
        self.check_password_with(&PlaintextEquality, candidate)
    }

    /// Checks `candidate` with a caller-chosen policy.
    pub fn check_password_with<P: AuthPolicy + ?Sized>(&self, policy: &P, candidate: &str) -> bool {
        policy.verify(&self.credential, candidate)
    }
}

/// Debug output never includes the credential.
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("username", &self.username)
            .field("credential", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_password() {
        let user = User::new("alice", "secret").unwrap();
        assert!(user.check_password("secret"));
        assert!(!user.check_password("wrong"));
        assert!(!user.check_password("Secret"));
        assert!(!user.check_password(""));
    }

    #[test]
    fn test_empty_credential_is_allowed() {
        let user = User::new("bob", "").unwrap();
        assert!(user.check_password(""));
    }

    #[test]
    fn test_empty_username_rejected() {
        assert!(User::new("", "secret").is_err());
    }

    #[test]
    fn test_custom_policy() {
        struct CaseInsensitive;

        impl AuthPolicy for CaseInsensitive {
            fn verify(&self, stored: &str, candidate: &str) -> bool {
                stored.eq_ignore_ascii_case(candidate)
            }
        }

        let user = User::new("alice", "Secret").unwrap();
        assert!(!user.check_password("secret"));
        assert!(user.check_password_with(&CaseInsensitive, "secret"));
    }

    #[test]
    fn test_debug_redacts_credential() {
        let user = User::new("alice", "secret").unwrap();
        let debug = format!("{:?}", user);
        assert!(debug.contains("alice"));
        assert!(!debug.contains("secret"));
    }
}
