//! Session resolution use case.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::SessionToken;
use crate::domain::ports::SessionStorePort;

/// Resolves an existing session token at startup.
///
/// Priority: stored session first, then an optional CLI/environment
/// override. A resolved override is written back to the store so the rest of
/// the app sees a single source of truth.
pub struct ResolveSessionUseCase {
    session_store: Arc<dyn SessionStorePort>,
}

impl ResolveSessionUseCase {
    /// Creates a new use case.
    #[must_use]
    pub fn new(session_store: Arc<dyn SessionStorePort>) -> Self {
        Self { session_store }
    }

    /// Resolves a token from the store or the override.
    #[must_use]
    pub fn execute(&self, override_token: Option<String>) -> Option<SessionToken> {
        if let Some(token) = self.session_store.get() {
            info!("Using stored session token");
            return Some(token);
        }
        debug!("No stored session token");

        if let Some(token) = override_token.and_then(SessionToken::new) {
            info!("Using session token from command line / environment");
            self.session_store.set(&token);
            return Some(token);
        }

        debug!("No session token found in any source");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockSessionStore;

    #[test]
    fn test_stored_token_has_priority() {
        let store = Arc::new(MockSessionStore::with_token(
            SessionToken::new("tok-stored").unwrap(),
        ));
        let use_case = ResolveSessionUseCase::new(store);

        let resolved = use_case.execute(Some("tok-cli".to_string())).unwrap();
        assert_eq!(resolved.as_str(), "tok-stored");
    }

    #[test]
    fn test_override_fallback_is_written_back() {
        let store = Arc::new(MockSessionStore::new());
        let use_case = ResolveSessionUseCase::new(store.clone());

        let resolved = use_case.execute(Some("tok-cli".to_string())).unwrap();
        assert_eq!(resolved.as_str(), "tok-cli");
        assert_eq!(store.get().unwrap().as_str(), "tok-cli");
    }

    #[test]
    fn test_no_token_anywhere() {
        let store = Arc::new(MockSessionStore::new());
        let use_case = ResolveSessionUseCase::new(store);

        assert!(use_case.execute(None).is_none());
        assert!(use_case.execute(Some("   ".to_string())).is_none());
    }
}
