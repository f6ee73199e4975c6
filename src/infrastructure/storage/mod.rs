//! Session persistence adapters.

mod keyring_session_store;

pub use keyring_session_store::KeyringSessionStore;
