//! Session token value object.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Bearer token for an authenticated admin session.
///
/// The token is opaque: no client-side structure is assumed beyond it being a
/// non-empty string. A session is either fully present or fully absent, so an
/// empty or whitespace-only value can never become a token.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SessionToken {
    value: String,
}

impl SessionToken {
    /// Creates a token from a raw string, trimming surrounding whitespace.
    ///
    /// Returns `None` for empty input.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into().trim().to_string();

        if value.is_empty() {
            return None;
        }

        Some(Self { value })
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns a masked form safe for display and logs.
    ///
    /// The token is opaque and may contain multi-byte characters, so all
    /// counting and slicing happens on chars.
    #[must_use]
    pub fn masked(&self) -> String {
        let char_count = self.value.chars().count();
        if char_count <= 8 {
            return "*".repeat(char_count);
        }

        let visible_prefix: String = self.value.chars().take(4).collect();
        format!("{visible_prefix}...")
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionToken")
            .field("value", &self.masked())
            .finish()
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_token_creation() {
        let token = SessionToken::new("tok-123");
        assert!(token.is_some());
        assert_eq!(token.unwrap().as_str(), "tok-123");
    }

    #[test]
    fn test_empty_token_rejected() {
        assert!(SessionToken::new("").is_none());
        assert!(SessionToken::new("   ").is_none());
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        let token = SessionToken::new("  tok-123  ").unwrap();
        assert_eq!(token.as_str(), "tok-123");
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let token = SessionToken::new("super-secret-session-token").unwrap();
        let debug_output = format!("{token:?}");

        assert!(!debug_output.contains("super-secret-session-token"));
    }

    #[test]
    fn test_masking() {
        let token = SessionToken::new("super-secret-session-token").unwrap();
        let masked = token.masked();

        assert!(masked.ends_with("..."));
        assert_eq!(masked, "supe...");
    }

    #[test]
    fn test_masking_multibyte_token() {
        // Prefix boundary falls inside a multi-byte char when counted in
        // bytes; masking must slice on chars.
        let token = SessionToken::new("ñoño-session-token").unwrap();
        assert_eq!(token.masked(), "ñoño...");

        let short = SessionToken::new("€€€€").unwrap();
        assert_eq!(short.masked(), "****");

        let display = format!("{}", SessionToken::new("tökën-säfe-lõng-secret").unwrap());
        assert!(!display.contains("secret"));
    }
}
