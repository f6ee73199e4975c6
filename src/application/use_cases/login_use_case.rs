//! Login use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::Credentials;
use crate::domain::entities::SessionToken;
use crate::domain::errors::ApiError;
use crate::domain::ports::{AuthPort, SessionStorePort};

/// Handles the credential exchange workflow.
///
/// On success the returned token has already been handed to the session
/// store; on failure the store is left untouched.
#[derive(Clone)]
pub struct LoginUseCase {
    auth_port: Arc<dyn AuthPort>,
    session_store: Arc<dyn SessionStorePort>,
}

impl LoginUseCase {
    /// Creates a new login use case.
    #[must_use]
    pub fn new(auth_port: Arc<dyn AuthPort>, session_store: Arc<dyn SessionStorePort>) -> Self {
        Self {
            auth_port,
            session_store,
        }
    }

    /// Exchanges credentials for a session token and persists it.
    ///
    /// # Errors
    /// Returns the API error unchanged; the caller maps it to a generic
    /// user-facing message and must never echo backend detail.
    pub async fn execute(&self, credentials: &Credentials) -> Result<SessionToken, ApiError> {
        debug!(identifier = %credentials.identifier, "Attempting login");

        let token = self
            .auth_port
            .login(&credentials.identifier, &credentials.secret)
            .await
            .map_err(|e| {
                warn!(error = %e, "Login rejected");
                e
            })?;

        self.session_store.set(&token);
        info!(token = %token, "Login successful, session stored");

        Ok(token)
    }

    /// Clears the stored session.
    pub fn logout(&self) {
        debug!("Clearing stored session");
        self.session_store.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::{MockAuthPort, MockSessionStore};

    fn creds() -> Credentials {
        Credentials::new("admin@casuse.mx", "Test1234!")
    }

    #[tokio::test]
    async fn test_successful_login_stores_token() {
        let auth_port = Arc::new(MockAuthPort::new(true));
        let store = Arc::new(MockSessionStore::new());

        let use_case = LoginUseCase::new(auth_port, store.clone());
        let token = use_case.execute(&creds()).await.unwrap();

        assert_eq!(token.as_str(), "tok-123");
        assert_eq!(store.get().unwrap().as_str(), "tok-123");
    }

    #[tokio::test]
    async fn test_failed_login_leaves_store_empty() {
        let auth_port = Arc::new(MockAuthPort::new(false));
        let store = Arc::new(MockSessionStore::new());

        let use_case = LoginUseCase::new(auth_port, store.clone());
        let result = use_case.execute(&creds()).await;

        assert!(matches!(result, Err(ApiError::RequestFailed { .. })));
        assert!(store.get().is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_store() {
        let auth_port = Arc::new(MockAuthPort::new(true));
        let store = Arc::new(MockSessionStore::new());

        let use_case = LoginUseCase::new(auth_port, store.clone());
        use_case.execute(&creds()).await.unwrap();
        assert!(store.has_token());

        use_case.logout();
        assert!(!store.has_token());
    }
}
