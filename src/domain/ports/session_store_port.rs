//! Session store port definition.

use crate::domain::entities::SessionToken;

/// Port for session token persistence.
///
/// All operations are synchronous and infallible from the caller's
/// perspective: when the underlying persistence mechanism is unavailable the
/// implementation degrades to in-memory behavior instead of surfacing an
/// error. `get` re-reads the current value on every call; callers never cache
/// a token across renders.
pub trait SessionStorePort: Send + Sync {
    /// Returns the current token, if any.
    fn get(&self) -> Option<SessionToken>;

    /// Persists the token and makes it current.
    fn set(&self, token: &SessionToken);

    /// Removes the current token.
    fn clear(&self);

    /// Returns whether a token is present.
    fn has_token(&self) -> bool {
        self.get().is_some()
    }
}


#[cfg(test)]
mod tests {
    use super::mock::MockSessionStore;
    use super::*;

    #[test]
    fn test_get_returns_last_set_unless_cleared() {
        let store = MockSessionStore::new();
        assert!(store.get().is_none());

        let first = SessionToken::new("tok-1").unwrap();
        let second = SessionToken::new("tok-2").unwrap();

        store.set(&first);
        store.set(&second);
        assert_eq!(store.get().unwrap().as_str(), "tok-2");

        store.clear();
        assert!(store.get().is_none());
        assert!(!store.has_token());
    }
}
