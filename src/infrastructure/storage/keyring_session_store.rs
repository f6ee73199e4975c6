//! Keyring-backed session store.

use keyring::Entry;
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::domain::entities::SessionToken;
use crate::domain::ports::SessionStorePort;

const KEYRING_SERVICE: &str = "casuse-admin";

/// Session store persisting the token in the system keyring.
///
/// An in-memory cache fronts the keyring so the contract of
/// [`SessionStorePort`] holds even when the keyring is unavailable: keyring
/// failures are logged and otherwise ignored, and the session keeps working
/// in memory for the lifetime of the process.
pub struct KeyringSessionStore {
    service: String,
    account: String,
    cache: RwLock<Option<SessionToken>>,
}

impl KeyringSessionStore {
    /// Creates a store for the given account name, priming the cache from
    /// the keyring.
    #[must_use]
    pub fn new(account: impl Into<String>) -> Self {
        let store = Self {
            service: KEYRING_SERVICE.to_string(),
            account: account.into(),
            cache: RwLock::new(None),
        };
        *store.cache.write() = store.read_keyring();
        store
    }

    /// Creates a store with a custom service name.
    #[must_use]
    pub fn with_service(service: impl Into<String>, account: impl Into<String>) -> Self {
        let store = Self {
            service: service.into(),
            account: account.into(),
            cache: RwLock::new(None),
        };
        *store.cache.write() = store.read_keyring();
        store
    }

    fn entry(&self) -> Option<Entry> {
        match Entry::new(&self.service, &self.account) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "Keyring unavailable, continuing in-memory");
                None
            }
        }
    }

    fn read_keyring(&self) -> Option<SessionToken> {
        let entry = self.entry()?;
        match entry.get_password() {
            Ok(password) => SessionToken::new(password),
            Err(keyring::Error::NoEntry) => None,
            Err(e) => {
                warn!(error = %e, "Failed to read session from keyring");
                None
            }
        }
    }
}

impl SessionStorePort for KeyringSessionStore {
    fn get(&self) -> Option<SessionToken> {
        self.cache.read().clone()
    }

    fn set(&self, token: &SessionToken) {
        *self.cache.write() = Some(token.clone());

        if let Some(entry) = self.entry() {
            match entry.set_password(token.as_str()) {
                Ok(()) => debug!(account = %self.account, "Session persisted to keyring"),
                Err(e) => warn!(error = %e, "Failed to persist session, kept in-memory"),
            }
        }
    }

    fn clear(&self) {
        *self.cache.write() = None;

        if let Some(entry) = self.entry() {
            match entry.delete_credential() {
                Ok(()) | Err(keyring::Error::NoEntry) => {
                    debug!(account = %self.account, "Session cleared");
                }
                Err(e) => warn!(error = %e, "Failed to delete session from keyring"),
            }
        }
    }
}
