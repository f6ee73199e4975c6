//! Remote data fetch lifecycle.
//!
//! Every list and detail view follows the same shape: idle, loading, ready,
//! or failed with a short message. `RemoteData` captures that once instead of
//! re-deriving it per view. An unauthorized outcome is never stored as a
//! failure message; it escalates to the shell, which clears the session and
//! routes back to login.

use crate::domain::errors::ApiError;

/// Marker returned when a fetch outcome invalidated the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnauthorizedSignal;

/// Fetch state for a remote collection or record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RemoteData<T> {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request succeeded.
    Ready(T),
    /// The last request failed; holds a short display message.
    Failed(String),
}

impl<T> RemoteData<T> {
    /// Marks a request as in flight, discarding any previous error.
    pub fn begin(&mut self) {
        *self = Self::Loading;
    }

    /// Applies a fetch outcome.
    ///
    /// Returns `Some(UnauthorizedSignal)` when the outcome was 401/403; the
    /// state then resets to idle and the caller must clear the session.
    pub fn resolve(
        &mut self,
        result: Result<T, ApiError>,
        failure_message: &str,
    ) -> Option<UnauthorizedSignal> {
        match result {
            Ok(value) => {
                *self = Self::Ready(value);
                None
            }
            Err(ApiError::Unauthorized) => {
                *self = Self::Idle;
                Some(UnauthorizedSignal)
            }
            Err(_) => {
                *self = Self::Failed(failure_message.to_string());
                None
            }
        }
    }

    /// Returns whether a request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the loaded value, if any.
    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the display message of a failed fetch, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
