//! Authentication DTOs.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Login form contents: an identifier (email) plus a secret.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    /// Account identifier, normally an email address.
    pub identifier: String,
    /// Account secret.
    pub secret: String,
}

impl Credentials {
    /// Creates credentials from form input.
    #[must_use]
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }

    /// Returns whether both fields are non-empty, the only client-side
    /// validation performed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.identifier.trim().is_empty() && !self.secret.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .finish()
    }
}
