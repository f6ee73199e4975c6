//! API error taxonomy.

use thiserror::Error;

/// Outcome classification for backend API calls.
///
/// Callers branch on the variant, never on message text. `Unauthorized` is
/// special: it always invalidates the stored session, regardless of what the
/// response body said.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered 401 or 403; the session is no longer valid.
    #[error("session is not authorized")]
    Unauthorized,

    /// Any other non-success HTTP status.
    #[error("request failed with HTTP {status}: {message}")]
    RequestFailed {
        /// HTTP status code.
        status: u16,
        /// Response body text, or a generic fallback when the body was empty.
        message: String,
    },

    /// The request could not complete at the transport level.
    #[error("network error: {message}")]
    Network {
        /// Transport failure description.
        message: String,
    },

    /// A success response carried a body that did not parse.
    #[error("failed to decode response: {message}")]
    Decode {
        /// Parse failure description.
        message: String,
    },
}

impl ApiError {
    /// Creates a request failure, substituting a generic message for an
    /// empty body.
    #[must_use]
    pub fn request_failed(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let message = if body.trim().is_empty() {
            format!("HTTP error {status}")
        } else {
            body
        };
        Self::RequestFailed { status, message }
    }

    /// Creates a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates a decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Returns whether this error must invalidate the stored session.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
